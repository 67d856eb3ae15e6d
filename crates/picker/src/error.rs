//! Error types for the picker state model.

use thiserror::Error;

/// Errors produced when constructing picker geometry.
#[derive(Debug, Error)]
pub enum PickerError {
    /// A pixel dimension was zero, negative, or not finite.
    #[error("invalid geometry: {0} must be a finite positive number")]
    InvalidGeometry(&'static str),
}
