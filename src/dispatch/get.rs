use super::Response;
use crate::error::{ApiError, DispatchError};
use crate::model::{Params, Record, PATH_PARAM};
use crate::provider::DataProvider;
use crate::resource::to_resource;
use tracing::{debug, error};

/// Routes a GET request to `provider`.
///
/// The `path` parameter is removed from `params` and validated against the
/// resource catalog; the remaining parameters are passed to
/// [`DataProvider::read`] unchanged and its record is returned as-is.
///
/// # Failures
/// - missing, empty or unknown `path`: `{code: "Error", message: "Invalid Resource"}`,
///   and the provider is never called
/// - `read` fails: the cause is logged and the caller gets
///   `{code: "Error", message: "Internal Server Error"}`
pub async fn dispatch_get<P>(provider: &P, params: Params) -> Response
where
    P: DataProvider + ?Sized,
{
    match try_dispatch_get(provider, params).await {
        Ok(record) => Response::Record(record),
        Err(err) => {
            match &err {
                DispatchError::InvalidResource => debug!("Rejected request for unknown resource"),
                DispatchError::Unexpected(cause) => error!(error = %cause, "GET dispatch failed"),
            }
            Response::Error(ApiError::from(err))
        }
    }
}

async fn try_dispatch_get<P>(provider: &P, mut params: Params) -> Result<Record, DispatchError>
where
    P: DataProvider + ?Sized,
{
    let path = params.shift_remove(PATH_PARAM).unwrap_or_default();
    let resource = to_resource(&path)?;
    debug!(%resource, ?params, "Read");
    Ok(provider.read(resource, params).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::model::Accounts;
    use crate::provider::mock::{MockProvider, ReadCall};
    use crate::resource::Resource;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_empty_path_is_invalid() {
        let mock = MockProvider::new();
        let actual = dispatch_get(&mock, params(&[("path", ""), ("id", "1")])).await;
        assert_eq!(actual, Response::Error(ApiError::invalid_resource()));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_path_is_removed_before_read() {
        let mock = MockProvider::with_read(|_, _| Ok(Accounts::new("1", "Alice").into()));
        let request = params(&[("id", "1"), ("path", "accounts"), ("x", "y")]);
        let actual = dispatch_get(&mock, request).await;

        assert_eq!(actual, Response::Record(Accounts::new("1", "Alice").into()));
        let calls = mock.calls();
        assert_eq!(
            calls,
            vec![ReadCall {
                resource: Resource::Accounts,
                params: params(&[("id", "1"), ("x", "y")]),
            }]
        );
        let keys: Vec<_> = calls[0].params.keys().collect();
        assert_eq!(keys, vec!["id", "x"]);
    }

    #[tokio::test]
    async fn test_provider_error_is_masked() {
        let mock =
            MockProvider::with_read(|_, _| Err(ProviderError::Backend("secret detail".into())));
        let actual = dispatch_get(&mock, params(&[("path", "tasks")])).await;
        assert_eq!(actual, Response::Error(ApiError::internal()));
    }
}
