//! # Transport Adapter
//!
//! Host glue: takes the GET/POST events the script platform delivers, forwards
//! them to a [`DispatchClient`], and encodes the reply as JSON text output.
//!
//! This layer never fails either. If the dispatch server is gone, the caller
//! receives the same internal error payload the dispatcher uses.

use crate::dispatch::Response;
use crate::error::ApiError;
use crate::framework::{DispatchClient, FrameworkError};
use crate::model::Params;
use serde::{Deserialize, Serialize};
use tracing::error;

/// MIME type of every response body.
pub const JSON_MIME_TYPE: &str = "application/json";

/// A GET event: the query string as a flat map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetEvent {
    #[serde(default)]
    pub parameter: Params,
}

/// Body of a POST event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    #[serde(rename = "type")]
    pub content_type: String,
    pub contents: Option<String>,
}

/// A POST event. `post_data` is absent when the request had no body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEvent {
    #[serde(default)]
    pub post_data: Option<PostData>,
}

/// Text output handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    pub mime_type: &'static str,
    pub content: String,
}

/// Encodes `data` as a JSON text response.
pub fn create_json_responder(data: &Response) -> JsonResponse {
    let content = match serde_json::to_string(data) {
        Ok(content) => content,
        Err(e) => {
            error!(error = %e, "Response encoding failed");
            // ApiError is two plain strings; encoding it cannot fail.
            serde_json::to_string(&ApiError::internal()).unwrap_or_default()
        }
    };
    JsonResponse {
        mime_type: JSON_MIME_TYPE,
        content,
    }
}

fn settle(result: Result<Response, FrameworkError>) -> Response {
    result.unwrap_or_else(|e| {
        error!(error = %e, "Dispatch server unavailable");
        Response::Error(ApiError::internal())
    })
}

/// Handles a GET event.
pub async fn do_get(client: &DispatchClient, event: GetEvent) -> JsonResponse {
    let response = settle(client.get(event.parameter).await);
    create_json_responder(&response)
}

/// Handles a POST event. A missing body is treated as content type `""` with
/// no contents.
pub async fn do_post(client: &DispatchClient, event: PostEvent) -> JsonResponse {
    let PostData {
        content_type,
        contents,
    } = event.post_data.unwrap_or(PostData {
        content_type: String::new(),
        contents: None,
    });
    let response = settle(client.post(content_type, contents).await);
    create_json_responder(&response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::DispatchServer;
    use crate::model::Tasks;
    use crate::provider::mock::MockProvider;
    use serde_json::{json, Value};

    fn body(response: &JsonResponse) -> Value {
        serde_json::from_str(&response.content).unwrap()
    }

    #[test]
    fn test_responder_encodes_record() {
        let record = Tasks::new("7", "Title", "Body", "2024-05-01");
        let response = create_json_responder(&Response::Record(record.into()));
        assert_eq!(response.mime_type, "application/json");
        assert_eq!(
            body(&response),
            json!({"id": "7", "title": "Title", "content": "Body", "lastUpdated": "2024-05-01"})
        );
    }

    #[test]
    fn test_post_event_wire_names() {
        let event: PostEvent = serde_json::from_value(json!({
            "postData": {"type": "application/json", "contents": "{}"}
        }))
        .unwrap();
        assert_eq!(event.post_data.unwrap().content_type, "application/json");

        let empty: PostEvent = serde_json::from_value(json!({})).unwrap();
        assert!(empty.post_data.is_none());
    }

    #[tokio::test]
    async fn test_do_post_without_post_data() {
        let (server, client) = DispatchServer::new(4);
        let handle = tokio::spawn(server.run(MockProvider::new()));

        let response = do_post(&client, PostEvent::default()).await;
        assert_eq!(body(&response), json!({"contentType": "", "body": null}));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_server_yields_internal_error() {
        let (server, client) = DispatchServer::new(4);
        drop(server);

        let response = do_get(&client, GetEvent::default()).await;
        assert_eq!(
            body(&response),
            json!({"code": "Error", "message": "Internal Server Error"})
        );
    }
}
