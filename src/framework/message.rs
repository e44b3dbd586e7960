//! # Messages
//!
//! Requests sent from a [`DispatchClient`](super::DispatchClient) to the
//! [`DispatchServer`](super::DispatchServer). Each carries a one-shot channel
//! for its reply.

use crate::dispatch::Response;
use crate::model::Params;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel.
pub type Reply = oneshot::Sender<Response>;

/// One invocation of the script, as the host would deliver it.
#[derive(Debug)]
pub enum DispatchRequest {
    Get {
        params: Params,
        respond_to: Reply,
    },
    Post {
        content_type: String,
        body: Option<String>,
        respond_to: Reply,
    },
}
