//! # Framework Errors
//!
//! Failures of the channel between a [`DispatchClient`](super::DispatchClient)
//! and its [`DispatchServer`](super::DispatchServer). Dispatch failures never
//! show up here; those are already inside the [`Response`](crate::dispatch::Response).

/// Errors that can occur within the dispatch framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Dispatch server closed")]
    ServerClosed,
    #[error("Dispatch server dropped response channel")]
    ServerDropped,
}
