//! Amount extraction for bank slips.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use super::FieldExtractor;
use super::fields::first_capture;

/// Amount extractor trying patterns in order.
///
/// A capture that does not parse, or parses to zero or less, does not stop
/// the search: the next pattern is tried instead.
pub struct AmountExtractor<'p> {
    patterns: &'p [&'static Regex],
}

impl<'p> AmountExtractor<'p> {
    pub fn new(patterns: &'p [&'static Regex]) -> Self {
        Self { patterns }
    }
}

impl FieldExtractor for AmountExtractor<'_> {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.patterns.iter().find_map(|pattern| {
            let raw = first_capture(pattern, text)?;
            let amount = parse_thai_amount(raw)?;
            debug!("Extracted amount: {:.2} using pattern: {}", amount, pattern.as_str());
            Some(amount)
        })
    }
}

/// Extract the first positive amount from `text`.
pub fn extract_amount(text: &str, patterns: &[&'static Regex]) -> Option<Decimal> {
    AmountExtractor::new(patterns).extract(text)
}

/// Parse a slip amount such as "1,234.50", rejecting non-positive values.
pub fn parse_thai_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    let cleaned = cleaned.trim_end_matches('.');

    Decimal::from_str(cleaned)
        .ok()
        .filter(|amount| amount.is_sign_positive() && !amount.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slip::rules::patterns::{
        AMOUNT_CURRENCY_PREFIX, AMOUNT_CURRENCY_SUFFIX, AMOUNT_LABELED,
    };

    fn shared() -> Vec<&'static Regex> {
        vec![&*AMOUNT_LABELED, &*AMOUNT_CURRENCY_PREFIX, &*AMOUNT_CURRENCY_SUFFIX]
    }

    #[test]
    fn test_parse_thai_amount() {
        assert_eq!(parse_thai_amount("1,234.50"), Some(Decimal::new(123450, 2)));
        assert_eq!(parse_thai_amount("1500"), Some(Decimal::from(1500)));
        assert_eq!(parse_thai_amount("1,500."), Some(Decimal::from(1500)));
        assert_eq!(parse_thai_amount("12,345,678.9"), Some(Decimal::new(123456789, 1)));
        assert_eq!(parse_thai_amount("0.00"), None);
        assert_eq!(parse_thai_amount(","), None);
        assert_eq!(parse_thai_amount(""), None);
    }

    #[test]
    fn test_every_amount_pattern_strips_separators() {
        let expected = Decimal::new(123450, 2);
        let samples = [
            (&*AMOUNT_LABELED, "โอนเงินสำเร็จ จำนวนเงิน: 1,234.50 ค่าธรรมเนียม 0.00"),
            (&*AMOUNT_CURRENCY_PREFIX, "ยอดโอน THB 1,234.50"),
            (&*AMOUNT_CURRENCY_SUFFIX, "ยอดโอน 1,234.50 บาท"),
        ];

        for (pattern, text) in samples {
            assert_eq!(extract_amount(text, &[pattern]), Some(expected), "text: {}", text);
        }
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        assert_eq!(extract_amount("0.00 บาท", &shared()), None);
    }

    #[test]
    fn test_zero_match_falls_through_to_next_pattern() {
        // Labeled amount is zero, the suffixed one is valid.
        let text = "Amount: 0.00\nค่าบริการ 99.00 BAHT";
        assert_eq!(extract_amount(text, &shared()), Some(Decimal::from(99)));
    }

    #[test]
    fn test_labeled_amount_takes_priority() {
        let text = "ค่าธรรมเนียม 10.00 บาท\nยอดเงิน 2,000.00";
        assert_eq!(extract_amount(text, &shared()), Some(Decimal::from(2000)));
    }
}
