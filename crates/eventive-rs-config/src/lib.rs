//! Emitter configuration models and JSON5 loading.
//!
//! This crate owns the declaration format for supported events and the
//! error-reporting level used by the core emitter.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::*;
