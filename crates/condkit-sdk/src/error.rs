//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Registry configuration error at engine build time
    #[error("Registry error: {0}")]
    Registry(#[from] condkit_core::RegistryError),

    /// Stored document failed to decode
    #[error("Decode error: {0}")]
    Decode(#[from] condkit_core::DecodeError),

    /// Structural validation failure surfaced outside decode
    #[error("Invalid condition: {0}")]
    InvalidCondition(#[from] condkit_core::InvalidConditionError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
