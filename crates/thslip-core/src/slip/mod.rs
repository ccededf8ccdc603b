//! Slip field extraction module.

mod extractor;
mod processor;
pub mod rules;

pub use extractor::{SlipExtractor, extract_data};
pub use processor::SlipProcessor;

use crate::error::ExtractionError;
use crate::models::slip::SlipData;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for slip parsing.
pub trait SlipParser {
    /// Parse slip fields from OCR text.
    fn parse(&self, text: &str) -> Result<SlipData>;
}
