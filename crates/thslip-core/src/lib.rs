//! Core library for Thai bank transfer slip processing.
//!
//! This crate provides:
//! - Bank detection against a compiled-in pattern catalog
//! - Field extraction (amount, date, time, reference, counterparties)
//! - Date normalization with Buddhist-era conversion
//! - Recurring subscription detection
//!
//! OCR itself is out of scope: every entry point takes the recognized text.

pub mod error;
pub mod models;
pub mod slip;
pub mod text;

pub use error::{ExtractionError, Result, SlipError};
pub use models::config::SlipConfig;
pub use models::slip::{ProcessedSlip, SlipData, SlipTransaction, TransactionKind};
pub use models::subscription::{BillingCycle, SubscriptionCandidate};
pub use slip::{SlipExtractor, SlipParser, SlipProcessor, extract_data};
pub use slip::rules::{
    UNKNOWN_BANK, detect_bank, detect_subscription, normalize_date, suggest_category,
};
pub use text::clean_text;
