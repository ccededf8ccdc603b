//! Bank-aware slip field extraction.

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::slip::SlipData;

use super::rules::{
    BankProfile, Field, UNKNOWN_BANK, default_profile, detect_profile, extract_amount,
    extract_field, find_profile,
};
use super::{Result, SlipParser};

/// Extracts slip fields using the detected bank's pattern lists.
#[derive(Debug, Clone, Default)]
pub struct SlipExtractor {
    /// Profile name used when the bank is not detected.
    fallback_profile: Option<String>,
}

impl SlipExtractor {
    /// Create an extractor that parses unknown slips with the first
    /// catalog profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            fallback_profile: config.fallback_profile.clone(),
        }
    }

    /// Parse unknown slips with the named profile instead.
    pub fn with_fallback_profile(mut self, name: impl Into<String>) -> Self {
        self.fallback_profile = Some(name.into());
        self
    }

    fn fallback(&self) -> &'static BankProfile {
        match self.fallback_profile.as_deref() {
            Some(name) => find_profile(name).unwrap_or_else(|| {
                warn!("Fallback profile {} not in catalog, using {}", name, default_profile().name);
                default_profile()
            }),
            None => default_profile(),
        }
    }

    /// Try the profile's amount patterns, then any default-profile patterns
    /// it does not already contain.
    fn extract_amount(&self, text: &str, profile: &BankProfile) -> Option<Decimal> {
        let primary = profile.patterns(Field::Amount);
        if let Some(amount) = extract_amount(text, primary) {
            return Some(amount);
        }

        let remaining: Vec<&'static Regex> = default_profile()
            .patterns(Field::Amount)
            .iter()
            .copied()
            .filter(|p| !primary.iter().any(|q| std::ptr::eq(*p, *q)))
            .collect();

        if remaining.is_empty() {
            None
        } else {
            extract_amount(text, &remaining)
        }
    }
}

impl SlipParser for SlipExtractor {
    fn parse(&self, text: &str) -> Result<SlipData> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        let (bank, profile) = match detect_profile(text) {
            Some(profile) => (profile.name, profile),
            None => {
                let profile = self.fallback();
                debug!("Bank not detected, parsing with {} patterns", profile.name);
                (UNKNOWN_BANK, profile)
            }
        };
        debug!("Detected bank: {}", bank);

        let amount = self
            .extract_amount(text, profile)
            .ok_or(ExtractionError::AmountNotFound)?;

        let extract = |field: Field| extract_field(text, field, profile.patterns(field));

        Ok(SlipData {
            amount,
            date: extract(Field::Date),
            time: extract(Field::Time),
            reference: extract(Field::Reference),
            bank: bank.to_string(),
            sender: extract(Field::Sender),
            receiver: extract(Field::Receiver),
        })
    }
}

/// Extract slip fields with the default extractor.
pub fn extract_data(text: &str) -> Result<SlipData> {
    SlipExtractor::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCB_SLIP: &str =
        "ธนาคารไทยพาณิชย์ ... จำนวนเงิน 1,500.00 ... วันที่ 23 พ.ย. 68 ... เวลา 14:30 ... อ้างอิง ABC123";

    #[test]
    fn test_extract_scb_slip() {
        let data = extract_data(SCB_SLIP).unwrap();

        assert_eq!(data.bank, "SCB");
        assert_eq!(data.amount, Decimal::new(150000, 2));
        assert_eq!(data.date, "23 พ.ย. 68");
        assert_eq!(data.time, "14:30");
        assert_eq!(data.reference, "ABC123");
        assert_eq!(data.sender, "");
        assert_eq!(data.receiver, "");
    }

    #[test]
    fn test_extract_kbank_slip() {
        let text = "K-Bank\n\
                    Transfer completed\n\
                    จาก นาย สมชาย ใจดี\n\
                    ถึง นางสาว สมหญิง รักดี\n\
                    12/05/2024 09:41\n\
                    Transaction No: 0145A77\n\
                    Amount 2,500.50";

        let data = extract_data(text).unwrap();

        assert_eq!(
            data,
            SlipData {
                amount: Decimal::new(250050, 2),
                date: "12/05/2024".to_string(),
                time: "09:41".to_string(),
                reference: "0145A77".to_string(),
                bank: "KBank".to_string(),
                sender: "นาย สมชาย ใจดี".to_string(),
                receiver: "นางสาว สมหญิง รักดี".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_bank_uses_first_profile() {
        let text = "โอนเงินสำเร็จ\nผู้รับ: ร้านกาแฟ\nยอดเงิน 85.00";
        let data = extract_data(text).unwrap();

        assert_eq!(data.bank, UNKNOWN_BANK);
        assert_eq!(data.amount, Decimal::from(85));
        // ผู้รับ is only in the first profile's receiver list.
        assert_eq!(data.receiver, "ร้านกาแฟ");
    }

    #[test]
    fn test_configured_fallback_profile() {
        let text = "โอนเงินสำเร็จ\nผู้รับ: ร้านกาแฟ\nยอดเงิน 85.00";
        let data = SlipExtractor::new()
            .with_fallback_profile("BBL")
            .parse(text)
            .unwrap();

        assert_eq!(data.bank, UNKNOWN_BANK);
        assert_eq!(data.receiver, "");
    }

    #[test]
    fn test_missing_fallback_profile_uses_default() {
        let text = "โอนเงินสำเร็จ\nผู้รับ: ร้านกาแฟ\nยอดเงิน 85.00";
        let data = SlipExtractor::new()
            .with_fallback_profile("Nope")
            .parse(text)
            .unwrap();

        assert_eq!(data.receiver, "ร้านกาแฟ");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_data(""), Err(ExtractionError::EmptyText));
        assert_eq!(extract_data("  \n\t"), Err(ExtractionError::EmptyText));
    }

    #[test]
    fn test_zero_amount_fails() {
        assert_eq!(extract_data("0.00 บาท"), Err(ExtractionError::AmountNotFound));
        assert_eq!(
            extract_data("SCB วันที่ 01/01/2025"),
            Err(ExtractionError::AmountNotFound)
        );
    }

    #[test]
    fn test_amount_retries_default_patterns_not_in_profile() {
        use crate::slip::rules::patterns::AMOUNT_CURRENCY_SUFFIX;

        let profile = BankProfile::new("Suffix only", &["suffixbank"])
            .with(Field::Amount, &[&*AMOUNT_CURRENCY_SUFFIX]);
        let extractor = SlipExtractor::new();

        assert_eq!(
            extractor.extract_amount("suffixbank\nAmount 250.00", &profile),
            Some(Decimal::from(250))
        );
        assert_eq!(
            extractor.extract_amount("suffixbank\n125.50 THB", &profile),
            Some(Decimal::new(12550, 2))
        );
        assert_eq!(extractor.extract_amount("suffixbank\nno amount", &profile), None);
    }

    #[test]
    fn test_amount_digits_are_ascii_only() {
        let data = extract_data("SCB Amount: 1,500.๐๐").unwrap();
        assert_eq!(data.amount, Decimal::from(1500));

        assert_eq!(
            extract_data("SCB Amount: ๑,๕๐๐.๐๐"),
            Err(ExtractionError::AmountNotFound)
        );
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let data = extract_data("Bangkok Bank 100.00 THB").unwrap();
        assert_eq!(data.bank, "BBL");
        assert_eq!(data.amount, Decimal::from(100));
        assert_eq!(data.date, "");
        assert_eq!(data.time, "");
        assert_eq!(data.reference, "");
    }
}
