//! The spreadsheet-backed provider.
//!
//! Only the seam exists: every call fails with
//! [`ProviderError::NotImplemented`]. The table format it will read is in
//! [`sheet`](super::sheet).

use super::DataProvider;
use crate::error::ProviderError;
use crate::model::{Params, Record};
use crate::resource::Resource;
use async_trait::async_trait;
use tracing::warn;

/// Provider reading records from the sheets of one spreadsheet file.
#[derive(Debug, Clone)]
pub struct SpreadsheetProvider {
    spreadsheet_name: String,
}

impl SpreadsheetProvider {
    pub fn new(spreadsheet_name: impl Into<String>) -> Self {
        Self {
            spreadsheet_name: spreadsheet_name.into(),
        }
    }

    pub fn spreadsheet_name(&self) -> &str {
        &self.spreadsheet_name
    }

    fn not_implemented(&self, operation: &str) -> ProviderError {
        warn!(
            spreadsheet = %self.spreadsheet_name,
            operation,
            "Provider operation not implemented"
        );
        ProviderError::NotImplemented(format!("SpreadsheetProvider::{operation}"))
    }
}

#[async_trait]
impl DataProvider for SpreadsheetProvider {
    async fn read(&self, _resource: Resource, _params: Params) -> Result<Record, ProviderError> {
        Err(self.not_implemented("read"))
    }

    async fn create(&self, _record: Record) -> Result<(), ProviderError> {
        Err(self.not_implemented("create"))
    }

    async fn delete(&self, _resource: Resource, _id: &str) -> Result<(), ProviderError> {
        Err(self.not_implemented("delete"))
    }
}
