//! Error types for the thslip-core library.

use thiserror::Error;

/// Main error type for the thslip library.
#[derive(Error, Debug)]
pub enum SlipError {
    /// Slip field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON (configuration or serialized records).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to slip field extraction.
///
/// Only the amount is mandatory; every other field degrades to an empty
/// string instead of producing an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The OCR text was empty or whitespace only.
    #[error("OCR text is empty")]
    EmptyText,

    /// No amount pattern produced a positive number.
    #[error("amount not found in OCR text")]
    AmountNotFound,

    /// Transaction kind other than `income` or `expense`.
    #[error("invalid transaction type: {0} (expected income or expense)")]
    InvalidTransactionKind(String),
}

/// Result type for the thslip library.
pub type Result<T> = std::result::Result<T, SlipError>;
