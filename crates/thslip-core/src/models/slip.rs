//! Slip data models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::slip::rules::dates::parse_normalized_date;

use super::subscription::SubscriptionCandidate;

/// Fields extracted from one slip's OCR text.
///
/// `amount` is always positive: extraction fails rather than producing a
/// zero record. Optional fields are empty strings when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipData {
    /// Transferred amount.
    pub amount: Decimal,
    /// Date as found in the text (normalized by the processor).
    pub date: String,
    /// Time as found in the text.
    pub time: String,
    /// Transaction reference.
    pub reference: String,
    /// Catalog bank name, or `"Unknown"`.
    pub bank: String,
    /// Sending party.
    pub sender: String,
    /// Receiving party.
    pub receiver: String,
}

/// Direction of a transaction from the account owner's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money received.
    Income,
    /// Money paid out.
    Expense,
}

impl Default for TransactionKind {
    fn default() -> Self {
        Self::Expense
    }
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(ExtractionError::InvalidTransactionKind(other.to_string())),
        }
    }
}

/// A transaction record ready to be handed to a persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipTransaction {
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Transferred amount.
    pub amount: Decimal,

    /// Date in `DD/MM/YYYY` form when it could be normalized.
    pub date: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sender: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub receiver: String,

    /// Category of the detected subscription, empty otherwise.
    pub category: String,

    /// Cleaned OCR text the record was extracted from.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_ocr_text: String,
}

impl SlipTransaction {
    /// Parse the normalized date back into a calendar date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_normalized_date(&self.date)
    }
}

/// Output of processing a single slip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedSlip {
    /// The extracted transaction.
    pub transaction: SlipTransaction,

    /// Subscription detected in the same text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionCandidate>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_kind_parsing() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" Expense ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert_eq!(
            "transfer".parse::<TransactionKind>(),
            Err(ExtractionError::InvalidTransactionKind("transfer".to_string()))
        );
    }

    #[test]
    fn test_transaction_serializes_type_field() {
        let tx = SlipTransaction {
            kind: TransactionKind::Income,
            amount: Decimal::new(150000, 2),
            date: "23/11/2025".to_string(),
            time: String::new(),
            reference: "ABC123".to_string(),
            bank: "SCB".to_string(),
            sender: String::new(),
            receiver: String::new(),
            category: "สมาชิก".to_string(),
            raw_ocr_text: String::new(),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["reference"], "ABC123");
        assert!(json.get("time").is_none());
        assert_eq!(tx.parsed_date(), NaiveDate::from_ymd_opt(2025, 11, 23));
    }
}
