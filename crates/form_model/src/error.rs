//! Error types for form model operations

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FormModelError {
    #[error("Unknown category tag: {0}")]
    UnknownCategory(String),

    #[error("Response not found: {0}")]
    ResponseNotFound(Uuid),

    #[error("Listing not found for hash: {0}")]
    ListingNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormModelError>;
