//! Errors raised by the library API itself.
//!
//! These are not validation findings; findings are reported through
//! [`crate::ValidationResult`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// A type name that is neither a GeoJSON object kind nor a custom validator key.
    #[error("unknown GeoJSON type name: {0:?}")]
    UnknownType(String),

    /// Validator options could not be decoded.
    #[error("invalid validator options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl PartialEq for GeoJsonError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GeoJsonError::UnknownType(a), GeoJsonError::UnknownType(b)) => a == b,
            (GeoJsonError::InvalidOptions(a), GeoJsonError::InvalidOptions(b)) => {
                a.to_string() == b.to_string()
            }
            _ => false,
        }
    }
}
