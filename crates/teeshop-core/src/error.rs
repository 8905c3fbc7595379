//! Error types for the storefront core

use thiserror::Error;

/// Main error type for storefront operations
#[derive(Error, Debug)]
pub enum ShopError {
    /// Order form is missing a required field; carries the user-facing notice
    #[error("{0}")]
    IncompleteOrder(String),

    /// Add-to-cart control is missing one of its data fields
    #[error("Missing product field: {0}")]
    MissingField(&'static str),

    /// Price text could not be read as a non-negative amount
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Configuration is structurally valid JSON but semantically wrong
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ShopError
pub type ShopResult<T> = Result<T, ShopError>;
