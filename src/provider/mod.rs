//! # Data Providers
//!
//! The boundary between the dispatcher and whatever stores the records.
//!
//! - [`DataProvider`] - the capability set the dispatcher consumes
//! - [`SpreadsheetProvider`] - the production seam (not implemented yet)
//! - [`mock::MockProvider`] - a test double with injectable `read` behavior
//! - [`sheet`] - the tabular format a spreadsheet-backed provider reads

pub mod mock;
pub mod sheet;
pub mod spreadsheet;

pub use spreadsheet::SpreadsheetProvider;

use crate::error::ProviderError;
use crate::model::{Params, Record};
use crate::resource::Resource;
use async_trait::async_trait;
use std::sync::Arc;

/// Read/create/delete access to records keyed by [`Resource`].
///
/// # Record Shape
/// `read` returns the [`Record`] union. Nothing checks that the variant matches
/// the requested resource; callers that need a specific shape must match on it
/// (see [`Record::resource`]).
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Looks up a record of `resource` using the remaining request parameters.
    async fn read(&self, resource: Resource, params: Params) -> Result<Record, ProviderError>;

    /// Stores a new record in its resource's table.
    async fn create(&self, record: Record) -> Result<(), ProviderError>;

    /// Removes the record of `resource` whose id column equals `id`.
    async fn delete(&self, resource: Resource, id: &str) -> Result<(), ProviderError>;
}

#[async_trait]
impl<P: DataProvider + ?Sized> DataProvider for Arc<P> {
    async fn read(&self, resource: Resource, params: Params) -> Result<Record, ProviderError> {
        (**self).read(resource, params).await
    }

    async fn create(&self, record: Record) -> Result<(), ProviderError> {
        (**self).create(record).await
    }

    async fn delete(&self, resource: Resource, id: &str) -> Result<(), ProviderError> {
        (**self).delete(resource, id).await
    }
}
