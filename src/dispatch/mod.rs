//! # Dispatcher
//!
//! Turns one request into exactly one [`Response`]. Both entry points are
//! total: every failure is converted into an [`ApiError`] before it returns.
//!
//! - [`dispatch_get`] validates the `path` parameter and delegates to a
//!   [`DataProvider`](crate::provider::DataProvider).
//! - [`dispatch_post`] echoes the parsed body back; CREATE is not wired yet.

mod get;
mod post;

pub use get::dispatch_get;
pub use post::dispatch_post;

use crate::error::ApiError;
use crate::model::Record;
use serde::Serialize;
use serde_json::Value;

/// Echo of a POST request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEcho {
    pub content_type: String,
    /// The parsed body, or `None` when it was absent or did not parse.
    pub body: Option<Value>,
}

/// Everything a dispatch can produce. Serialized untagged, so the wire form is
/// the record, the echo, or `{code, message}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Record(Record),
    Post(PostEcho),
    Error(ApiError),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl From<ApiError> for Response {
    fn from(err: ApiError) -> Self {
        Response::Error(err)
    }
}

impl From<Record> for Response {
    fn from(record: Record) -> Self {
        Response::Record(record)
    }
}
