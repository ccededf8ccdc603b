//! Rule-based field extractors for Thai bank slips.

pub mod amounts;
pub mod banks;
pub mod dates;
pub mod detect;
pub mod fields;
pub mod patterns;
pub mod subscriptions;

pub use amounts::{AmountExtractor, extract_amount, parse_thai_amount};
pub use banks::{BankProfile, Field, FieldPatterns, UNKNOWN_BANK, catalog, default_profile, find_profile};
pub use dates::{normalize_date, parse_normalized_date};
pub use detect::{detect_bank, detect_profile};
pub use fields::{PatternFieldExtractor, extract_field};
pub use subscriptions::{detect_subscription, subscription_catalog, suggest_category};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text, `None` when no pattern yields a value.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
