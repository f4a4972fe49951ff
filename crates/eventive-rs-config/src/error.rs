//! Errors raised while reading emitter declarations.

use thiserror::Error;

/// Why an emitter config could not be produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be opened or read.
    #[error("cannot read emitter config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// The contents are not valid JSON5.
    #[error("failed to parse emitter config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// The JSON5 is well formed but does not match the emitter schema.
    #[error("emitter config does not match schema: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// An event declaration was rejected.
    #[error("invalid event declaration at {path}: {message}")]
    InvalidField { path: String, message: String },
}
