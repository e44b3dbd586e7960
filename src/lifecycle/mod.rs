//! # System Lifecycle
//!
//! Starting, wiring and stopping the dispatcher.
//!
//! ## Provider Injection
//!
//! The provider is chosen by whoever builds the [`DispatchSystem`] and is moved
//! into the server loop when it starts:
//!
//! ```rust,ignore
//! let system = DispatchSystem::new(&config, SpreadsheetProvider::new(&config.spreadsheet_name));
//! // tests: DispatchSystem::new(&config, MockProvider::with_read(...))
//! ```
//!
//! Nothing else in the crate can reach the provider, so swapping it for a
//! mock needs no global state.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sending side of the channel
//! 2. **Server drains** - requests already queued are still answered
//! 3. **Await completion** - [`DispatchSystem::shutdown`] waits for the task
//!
//! See the [`tracing`](self::tracing) module for logging setup.

pub mod dispatch_system;
pub mod tracing;

pub use dispatch_system::*;
pub use self::tracing::setup_tracing;
