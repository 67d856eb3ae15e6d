//! Error types for the huebox core.

use thiserror::Error;

/// Errors produced by color parsing and decoding.
///
/// Conversions between color representations are total functions and never
/// fail; only textual decoding is partial.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex string or color component was malformed (wrong digit count,
    /// non-hex digits, non-numeric component).
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The input matched none of the recognized grammars (hex, rgb, hsl).
    #[error("unrecognized color format: {0}")]
    UnrecognizedFormat(String),
}
