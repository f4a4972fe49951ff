//! Error types for emitter operations.

use thiserror::Error;

/// Reasons an emitter refuses a call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// No event name was given.
    #[error("event is required")]
    EventNameMissing,
    /// The name is not in the emitter's supported set.
    #[error("event not supported: {0}")]
    EventNotSupported(String),
}
