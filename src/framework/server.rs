//! # Dispatch Server
//!
//! The server half of the dispatcher. It owns the receiving end of the request
//! channel and handles one request at a time, the way the host runs one script
//! invocation at a time.

use super::client::DispatchClient;
use super::message::DispatchRequest;
use crate::dispatch::{dispatch_get, dispatch_post, Response};
use crate::error::ApiError;
use crate::model::Params;
use crate::provider::DataProvider;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Sequential request loop over a [`DataProvider`].
///
/// # Provider Injection
/// The provider is not known at construction time. It is handed to
/// [`run`](DispatchServer::run) and lives for as long as the loop does, so
/// nothing in the crate holds a global provider.
///
/// ```rust
/// use sheet_dispatch::framework::DispatchServer;
/// use sheet_dispatch::model::Params;
/// use sheet_dispatch::provider::mock::MockProvider;
///
/// #[tokio::main]
/// async fn main() {
///     let (server, client) = DispatchServer::new(8);
///     tokio::spawn(server.run(MockProvider::new()));
///
///     let response = client.get(Params::new()).await.unwrap();
///     assert!(response.is_error());
/// }
/// ```
pub struct DispatchServer {
    receiver: mpsc::Receiver<DispatchRequest>,
}

impl DispatchServer {
    /// Creates a server and a client connected to it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   client calls wait for space. Zero is raised to one.
    pub fn new(buffer_size: usize) -> (Self, DispatchClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        (Self { receiver }, DispatchClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    ///
    /// Each GET runs in its own task and is awaited before the next request is
    /// taken, so a provider that panics fails only that request.
    pub async fn run<P: DataProvider + 'static>(mut self, provider: P) {
        info!("Dispatch server started");
        let provider = Arc::new(provider);
        let mut handled: u64 = 0;

        while let Some(msg) = self.receiver.recv().await {
            handled += 1;
            match msg {
                DispatchRequest::Get { params, respond_to } => {
                    debug!(?params, "GET");
                    let response = isolated_get(&provider, params).await;
                    if respond_to.send(response).is_err() {
                        warn!("GET caller went away before the reply");
                    }
                }
                DispatchRequest::Post {
                    content_type,
                    body,
                    respond_to,
                } => {
                    debug!(%content_type, has_body = body.is_some(), "POST");
                    let response = dispatch_post(&content_type, body.as_deref());
                    if respond_to.send(response).is_err() {
                        warn!("POST caller went away before the reply");
                    }
                }
            }
        }

        info!(handled, "Shutdown");
    }
}

async fn isolated_get<P: DataProvider + 'static>(provider: &Arc<P>, params: Params) -> Response {
    let provider = Arc::clone(provider);
    match tokio::spawn(async move { dispatch_get(&*provider, params).await }).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "GET handler aborted");
            Response::Error(ApiError::internal())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Response;
    use crate::model::{Accounts, Params};
    use crate::provider::mock::MockProvider;

    fn path(id: usize) -> Params {
        let mut params = Params::new();
        params.insert("path".into(), "accounts".into());
        params.insert("id".into(), id.to_string());
        params
    }

    #[tokio::test]
    async fn test_requests_are_handled_in_arrival_order() {
        let mock = MockProvider::with_read(|_, params| {
            Ok(Accounts::new(params["id"].clone(), "Alice").into())
        });
        let (server, client) = DispatchServer::new(2);
        let handle = tokio::spawn(server.run(mock.clone()));

        for id in 0..5 {
            let response = client.get(path(id)).await.unwrap();
            assert!(matches!(response, Response::Record(ref r) if r.id() == id.to_string()));
        }

        drop(client);
        handle.await.unwrap();

        let ids: Vec<_> = mock.calls().iter().map(|c| c.params["id"].clone()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_panicking_read_fails_only_its_request() {
        let mock = MockProvider::with_read(|_, params| {
            if params["id"] == "0" {
                panic!("read blew up");
            }
            Ok(Accounts::new(params["id"].clone(), "Alice").into())
        });
        let (server, client) = DispatchServer::new(2);
        let handle = tokio::spawn(server.run(mock.clone()));

        let failed = client.get(path(0)).await.unwrap();
        assert_eq!(failed, Response::Error(ApiError::internal()));

        let next = client.get(path(1)).await.unwrap();
        assert_eq!(next, Response::Record(Accounts::new("1", "Alice").into()));

        drop(client);
        handle.await.unwrap();
        assert_eq!(mock.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_zero_buffer_size_still_serves() {
        let (server, client) = DispatchServer::new(0);
        let handle = tokio::spawn(server.run(MockProvider::new()));

        let response = client.post(String::new(), None).await.unwrap();
        assert!(!response.is_error());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_post_does_not_touch_provider() {
        let mock = MockProvider::new();
        let (server, client) = DispatchServer::new(2);
        let handle = tokio::spawn(server.run(mock.clone()));

        let response = client
            .post("application/json".into(), Some("[1, 2]".into()))
            .await
            .unwrap();
        assert!(!response.is_error());

        drop(client);
        handle.await.unwrap();
        assert!(mock.calls().is_empty());
    }
}
