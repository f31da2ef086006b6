//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Brand not found
    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    /// Resource kind not provisioned on the brand
    #[error("Resource not found: {kind} on brand {brand_id}")]
    ResourceNotFound { brand_id: String, kind: String },

    /// Derived brand id already taken
    #[error("Brand id already exists: {0}")]
    DuplicateId(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, target does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::BrandNotFound(_)
            | Self::ResourceNotFound { .. }
            | Self::DuplicateId(_)
            | Self::ValidationError(_) => true,
            Self::SerializationError(_) | Self::StorageError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
