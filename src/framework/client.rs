//! # Dispatch Client
//!
//! The handle callers use to reach a running
//! [`DispatchServer`](super::DispatchServer).

use super::error::FrameworkError;
use super::message::DispatchRequest;
use crate::dispatch::Response;
use crate::model::Params;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Sends GET/POST requests to a dispatch server and awaits the reply.
///
/// Holds only a sender, so cloning is inexpensive. The server stops once the
/// last clone is dropped.
#[derive(Clone, Debug)]
pub struct DispatchClient {
    sender: mpsc::Sender<DispatchRequest>,
}

impl DispatchClient {
    pub fn new(sender: mpsc::Sender<DispatchRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, params: Params) -> Result<Response, FrameworkError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DispatchRequest::Get { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ServerClosed)?;
        response.await.map_err(|_| FrameworkError::ServerDropped)
    }

    #[instrument(skip(self, body))]
    pub async fn post(
        &self,
        content_type: String,
        body: Option<String>,
    ) -> Result<Response, FrameworkError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DispatchRequest::Post {
                content_type,
                body,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ServerClosed)?;
        response.await.map_err(|_| FrameworkError::ServerDropped)
    }
}
