//! Bank detection from slip text.

use tracing::debug;

use super::banks::{BankProfile, UNKNOWN_BANK, catalog};

/// Find the first catalog profile with a matching identifier.
pub fn detect_profile(text: &str) -> Option<&'static BankProfile> {
    catalog().iter().find(|profile| match profile.identify(text) {
        Some(identifier) => {
            debug!("Matched bank {} with identifier {}", profile.name, identifier.as_str());
            true
        }
        None => false,
    })
}

/// Detect the issuing bank, returning `"Unknown"` when nothing matches.
///
/// First match wins in catalog order; there is no scoring between several
/// plausible banks.
pub fn detect_bank(text: &str) -> &'static str {
    detect_profile(text).map_or(UNKNOWN_BANK, |profile| profile.name)
}
