//! # Observability & Tracing
//!
//! Structured logging for the dispatcher, built on `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Server Lifecycle**: startup and shutdown with the number of requests handled
//! - **Requests**: `GET`/`POST` at debug level with their parameters
//! - **Failures**: provider errors at error level. These are the only place the
//!   cause of an "Internal Server Error" response can be seen.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show request parameters
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=sheet_dispatch::dispatch=debug cargo run
//! ```
//!
//! When `RUST_LOG` is unset, the config's `log_filter` is used.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls are ignored, so tests and
/// embedding hosts can call it freely.
pub fn setup_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
