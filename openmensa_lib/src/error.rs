//! Error types for the library layer.

use thiserror::Error;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration and input validation failures.
#[derive(Error, Debug)]
pub enum MensaError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] openmensa_api::Error),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A configuration value could not be used.
    #[error("Configuration error: {0}")]
    Config(String),
}
