//! # Sheet Dispatch
//!
//! > **A request dispatcher for a script platform that uses a spreadsheet as its database.**
//!
//! GET requests name a resource in their `path` parameter; the dispatcher checks
//! it against a fixed catalog and asks a [`DataProvider`](provider::DataProvider)
//! for the record. POST requests are echoed back. Whatever goes wrong, the
//! caller gets a value, never a panic or an error it has to handle:
//!
//! ```text
//! GET  ?path=accounts&id=1  ->  {"id": "1", "name": "Alice"}
//! GET  ?path=users          ->  {"code": "Error", "message": "Invalid Resource"}
//! GET  ?path=tasks          ->  {"code": "Error", "message": "Internal Server Error"}
//! POST {"a": 1}             ->  {"contentType": "application/json", "body": {"a": 1}}
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`dispatch`], [`resource`], [`error`])
//! - **Role**: Validate the resource, call the provider, normalize failures.
//! - **Key items**: [`dispatch_get`](dispatch::dispatch_get),
//!   [`dispatch_post`](dispatch::dispatch_post), [`Resource`](resource::Resource),
//!   [`ApiError`](error::ApiError).
//!
//! ### 2. The Storage Boundary ([`provider`], [`model`])
//! - **Role**: Define what a backing store must offer and what it returns.
//! - **Key items**: [`DataProvider`](provider::DataProvider),
//!   [`MockProvider`](provider::mock::MockProvider), [`Record`](model::Record),
//!   the sheet format in [`provider::sheet`].
//!
//! ### 3. The Runtime ([`framework`], [`lifecycle`], [`config`])
//! - **Role**: Serialize requests through one server loop that owns the provider.
//! - **Key items**: [`DispatchServer`](framework::DispatchServer),
//!   [`DispatchSystem`](lifecycle::DispatchSystem).
//!
//! ### 4. The Host Glue ([`transport`])
//! - **Role**: Turn platform events into dispatcher calls and JSON text.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod provider;
pub mod resource;
pub mod transport;
