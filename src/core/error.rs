//! Custom error types for the cart library

use thiserror::Error;

/// Main error type for the cart library
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument passed to a cart operation (negative price, bad tip rate, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A named menu item or line item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not permitted in current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this error rejected caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
