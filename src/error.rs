//! # Errors
//!
//! Error types for every layer of the dispatcher, plus [`ApiError`], the only
//! failure shape a caller ever sees.
//!
//! The rule is simple: [`DispatchError::InvalidResource`] is shown to the
//! caller as-is, every other failure becomes a generic internal error and its
//! cause stays in the logs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `code` carried by every error payload.
pub const ERROR_CODE: &str = "Error";

/// Message for a missing, empty or unknown `path` parameter.
pub const INVALID_RESOURCE_MESSAGE: &str = "Invalid Resource";

/// Message for every failure that is not the caller's fault.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Normalized failure payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// `{code: "Error", message: "Invalid Resource"}`
    pub fn invalid_resource() -> Self {
        Self::new(ERROR_CODE, INVALID_RESOURCE_MESSAGE)
    }

    /// `{code: "Error", message: "Internal Server Error"}`
    pub fn internal() -> Self {
        Self::new(ERROR_CODE, INTERNAL_SERVER_ERROR_MESSAGE)
    }
}

/// Errors raised while dispatching a request.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The `path` parameter is missing, empty, or not in the catalog.
    #[error("Invalid Resource")]
    InvalidResource,

    /// Anything else. The cause is logged, never returned.
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] ProviderError),
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::InvalidResource => ApiError::invalid_resource(),
            DispatchError::Unexpected(_) => ApiError::internal(),
        }
    }
}

/// Errors raised by a [`DataProvider`](crate::provider::DataProvider) or the
/// spreadsheet utilities behind it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// The operation exists only as an integration seam.
    #[error("Function not implemented: {0}")]
    NotImplemented(String),

    /// No spreadsheet file carries the requested name.
    #[error("[ERROR] Open SpreadSheet Failed: \"{0}\"")]
    SpreadsheetNotFound(String),

    /// The spreadsheet has no sheet with the requested name.
    #[error("[ERROR] Open Sheet Failed: \"{0}\"")]
    SheetNotFound(String),

    /// A cell could not be converted to the column's declared type.
    #[error("Cannot cast {value:?} in column {field} to {field_type}")]
    Cast {
        field: String,
        field_type: String,
        value: String,
    },

    /// A row did not match the record shape it was read into.
    #[error("Malformed record: {0}")]
    Record(String),

    /// Any other failure reported by the backing store.
    #[error("Backend error: {0}")]
    Backend(String),
}
