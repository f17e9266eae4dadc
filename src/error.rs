//! Error types for PBN to LIN conversion.

use thiserror::Error;

/// Errors that abort the conversion of a deal.
///
/// A single badly formed hand is not an error: it is written as
/// [`INVALID_HAND`](crate::lin::INVALID_HAND) in its slot instead.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid PBN format: {0}")]
    MalformedDeal(String),

    #[error("Invalid board number 0 (board numbers start at 1)")]
    InvalidBoard,

    #[error("Invalid vulnerability index {0} (expected 0-3)")]
    InvalidVulnerability(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
