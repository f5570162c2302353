//! Finmate Core - Domain models, configuration, and view helpers.
//!
//! This crate holds everything the Finmate client needs that does not talk to
//! the network API: the runtime configuration, the DTOs mirrored from the
//! server's JSON, formatting and validation helpers, and state-free
//! presentation models. The HTTP services live in `finmate-api`.

pub mod attachments;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod goals;
pub mod legal;
pub mod presentation;
pub mod transactions;
pub mod utils;

pub use config::AppConfig;
pub use envelope::{ApiErrors, ApiResponse};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
