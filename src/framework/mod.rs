//! Request serialization between the host and the dispatcher.
//!
//! # Main Components
//!
//! - [`DispatchServer`] - sequential loop that owns the provider
//! - [`DispatchClient`] - cloneable handle for sending requests
//! - [`DispatchRequest`] - the messages exchanged between them
//! - [`FrameworkError`] - channel failures

pub mod client;
pub mod error;
pub mod message;
pub mod server;

pub use client::DispatchClient;
pub use error::FrameworkError;
pub use message::{DispatchRequest, Reply};
pub use server::DispatchServer;
