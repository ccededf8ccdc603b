//! First-match field extraction over ordered pattern lists.

use regex::Regex;
use tracing::debug;

use super::FieldExtractor;
use super::banks::Field;

/// Extracts one text field by trying patterns in order.
pub struct PatternFieldExtractor<'p> {
    field: Field,
    patterns: &'p [&'static Regex],
}

impl<'p> PatternFieldExtractor<'p> {
    pub fn new(field: Field, patterns: &'p [&'static Regex]) -> Self {
        Self { field, patterns }
    }
}

impl FieldExtractor for PatternFieldExtractor<'_> {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.patterns.iter().find_map(|pattern| {
            let value = first_capture(pattern, text)?;
            debug!(
                "Extracted {}: {} using pattern: {}",
                self.field.name(),
                value,
                pattern.as_str()
            );
            Some(value.to_string())
        })
    }
}

/// Extract a field, returning an empty string when no pattern matches.
pub fn extract_field(text: &str, field: Field, patterns: &[&'static Regex]) -> String {
    PatternFieldExtractor::new(field, patterns)
        .extract(text)
        .unwrap_or_default()
}

/// Trimmed capture group 1 of the first match, if present and non-empty.
///
/// Only the leftmost match of a pattern is considered.
pub(crate) fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    let caps = pattern.captures(text)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then_some(value)
}
