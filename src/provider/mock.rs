//! # Mock Provider
//!
//! A [`DataProvider`] for tests. `read` can be driven two ways:
//!
//! - a closure, via [`MockProvider::with_read`]
//! - queued expectations, via [`MockProvider::expect_read`]
//!
//! Queued expectations win over the closure. With neither, `read` fails the
//! same way an unconfigured stub would. `create` and `delete` are never
//! implemented. Every `read` is recorded so tests can assert on the arguments.
//!
//! ```rust
//! use sheet_dispatch::dispatch::{dispatch_get, Response};
//! use sheet_dispatch::model::{Accounts, Params};
//! use sheet_dispatch::provider::mock::MockProvider;
//! use sheet_dispatch::resource::Resource;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockProvider::new();
//!     mock.expect_read(Resource::Accounts)
//!         .return_ok(Accounts::new("1", "Alice").into());
//!
//!     let mut params = Params::new();
//!     params.insert("path".into(), "accounts".into());
//!     let response = dispatch_get(&mock, params).await;
//!
//!     assert!(matches!(response, Response::Record(_)));
//!     mock.verify();
//! }
//! ```

use super::DataProvider;
use crate::error::ProviderError;
use crate::model::{Params, Record};
use crate::resource::Resource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type ReadFn = dyn Fn(Resource, &Params) -> Result<Record, ProviderError> + Send + Sync;

/// Arguments of one recorded `read` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadCall {
    pub resource: Resource,
    pub params: Params,
}

struct Expectation {
    resource: Resource,
    response: Result<Record, ProviderError>,
}

/// A provider whose `read` is scripted by the test.
///
/// Clones share their expectations and call log, so a clone can be moved into
/// a dispatch server while the original is inspected afterwards.
#[derive(Clone, Default)]
pub struct MockProvider {
    read_fn: Option<Arc<ReadFn>>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<ReadCall>>>,
}

impl MockProvider {
    /// Creates a mock with no `read` behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose `read` runs `read`.
    pub fn with_read<F>(read: F) -> Self
    where
        F: Fn(Resource, &Params) -> Result<Record, ProviderError> + Send + Sync + 'static,
    {
        Self {
            read_fn: Some(Arc::new(read)),
            ..Self::default()
        }
    }

    /// Expects a `read` of `resource`. Expectations are consumed in order.
    pub fn expect_read(&mut self, resource: Resource) -> ReadExpectationBuilder {
        ReadExpectationBuilder {
            resource,
            expectations: self.expectations.clone(),
        }
    }

    /// Every `read` received so far, oldest first.
    pub fn calls(&self) -> Vec<ReadCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `read` expectations.
pub struct ReadExpectationBuilder {
    resource: Resource,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ReadExpectationBuilder {
    /// Sets the expectation to return a record.
    pub fn return_ok(self, record: Record) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            resource: self.resource,
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ProviderError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            resource: self.resource,
            response: Err(error),
        });
    }
}

#[async_trait]
impl DataProvider for MockProvider {
    async fn read(&self, resource: Resource, params: Params) -> Result<Record, ProviderError> {
        self.calls.lock().unwrap().push(ReadCall {
            resource,
            params: params.clone(),
        });

        let expectation = self.expectations.lock().unwrap().pop_front();
        match (expectation, &self.read_fn) {
            (Some(exp), _) => {
                if exp.resource != resource {
                    panic!(
                        "Unexpected read: expected {}, got {}",
                        exp.resource, resource
                    );
                }
                exp.response
            }
            (None, Some(read)) => read(resource, &params),
            (None, None) => Err(ProviderError::NotImplemented(
                "'readMock' not implemented.".to_string(),
            )),
        }
    }

    async fn create(&self, _record: Record) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("MockProvider::create".to_string()))
    }

    async fn delete(&self, _resource: Resource, _id: &str) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("MockProvider::delete".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Accounts, Tasks};

    #[tokio::test]
    async fn test_unconfigured_read_fails() {
        let mock = MockProvider::new();
        let result = mock.read(Resource::Tasks, Params::new()).await;
        assert!(matches!(
            result,
            Err(ProviderError::NotImplemented(ref m)) if m.contains("readMock")
        ));
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_closure_sees_arguments() {
        let mock = MockProvider::with_read(|resource, params| {
            let title = params.get("title").cloned().unwrap_or_default();
            assert_eq!(resource, Resource::Tasks);
            Ok(Tasks::new("1", title, "", "").into())
        });

        let mut params = Params::new();
        params.insert("title".into(), "Write docs".into());
        let record = mock.read(Resource::Tasks, params.clone()).await.unwrap();

        assert_eq!(record, Record::from(Tasks::new("1", "Write docs", "", "")));
        assert_eq!(
            mock.calls(),
            vec![ReadCall {
                resource: Resource::Tasks,
                params
            }]
        );
    }

    #[tokio::test]
    async fn test_expectations_take_priority_and_run_in_order() {
        let mut mock =
            MockProvider::with_read(|_, _| Err(ProviderError::Backend("fallback".into())));
        mock.expect_read(Resource::Accounts)
            .return_ok(Accounts::new("1", "Alice").into());
        mock.expect_read(Resource::Accounts)
            .return_err(ProviderError::Backend("boom".into()));

        let first = mock.read(Resource::Accounts, Params::new()).await;
        let second = mock.read(Resource::Accounts, Params::new()).await;
        let third = mock.read(Resource::Accounts, Params::new()).await;

        assert_eq!(first, Ok(Record::from(Accounts::new("1", "Alice"))));
        assert_eq!(second, Err(ProviderError::Backend("boom".into())));
        assert_eq!(third, Err(ProviderError::Backend("fallback".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_and_delete_are_not_implemented() {
        let mock = MockProvider::new();
        assert!(mock.create(Accounts::new("1", "A").into()).await.is_err());
        assert!(mock.delete(Resource::Accounts, "1").await.is_err());
    }
}
