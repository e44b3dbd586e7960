use super::{PostEcho, Response};
use tracing::debug;

/// Handles a POST request.
///
/// `raw_body` is parsed as JSON and echoed back with its content type. A body
/// that is absent or does not parse is echoed as `null`; it never fails the
/// call. No resource is validated and nothing is persisted.
pub fn dispatch_post(content_type: &str, raw_body: Option<&str>) -> Response {
    let body = raw_body.and_then(|raw| match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(content_type, error = %e, "POST body is not JSON");
            None
        }
    });

    Response::Post(PostEcho {
        content_type: content_type.to_string(),
        body,
    })
}
