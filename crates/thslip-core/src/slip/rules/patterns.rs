//! Common regex patterns for Thai bank slip extraction.
//!
//! Field patterns capture the value in group 1. Digits are ASCII only.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount patterns (1,500.00 / 1500 / 1500.5)
    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)(?:amount|จำนวนเงิน|ยอดเงิน)[:\s]*([0-9,]+\.?[0-9]{0,2})"
    ).unwrap();

    pub static ref AMOUNT_CURRENCY_PREFIX: Regex = Regex::new(
        r"(?i)(?:THB|บาท)[:\s]*([0-9,]+\.?[0-9]{0,2})"
    ).unwrap();

    pub static ref AMOUNT_CURRENCY_SUFFIX: Regex = Regex::new(
        r"([0-9,]+\.[0-9]{2})\s*(?:THB|บาท|BAHT)"
    ).unwrap();

    // Date patterns
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"([0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4})"
    ).unwrap();

    pub static ref DATE_LABELED: Regex = Regex::new(
        r"(?i)(?:date|วันที่)[:\s]*([0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4})"
    ).unwrap();

    // "23 พ.ย. 68", "1 มี.ค. 2568"
    pub static ref DATE_THAI: Regex = Regex::new(
        r"([0-9]{1,2}\s*\p{Thai}{1,3}\.\s?\p{Thai}{1,2}\.?\s*(?:[0-9]{4}|[0-9]{2}))\b"
    ).unwrap();

    // Time patterns (14:30 / 14:30:59)
    pub static ref TIME_BARE: Regex = Regex::new(
        r"([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?)"
    ).unwrap();

    pub static ref TIME_LABELED: Regex = Regex::new(
        r"(?i)(?:time|เวลา)[:\s]*([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?)"
    ).unwrap();

    // Reference patterns
    pub static ref REF_LABELED: Regex = Regex::new(
        r"(?i)(?:ref(?:erence)?|อ้างอิง|เลขที่อ้างอิง)[:\s#]*([A-Z0-9]+)"
    ).unwrap();

    pub static ref REF_LABELED_SHORT: Regex = Regex::new(
        r"(?i)(?:ref(?:erence)?|อ้างอิง)[:\s#]*([A-Z0-9]+)"
    ).unwrap();

    pub static ref REF_TRANSACTION_ID: Regex = Regex::new(
        r"(?i)transaction\s*(?:ref|id)[:\s]*([A-Z0-9]+)"
    ).unwrap();

    pub static ref REF_TRANSACTION_NO: Regex = Regex::new(
        r"(?i)transaction\s*(?:ref|no)[:\s]*([A-Z0-9]+)"
    ).unwrap();

    // Counterparty patterns
    pub static ref SENDER_FROM: Regex = Regex::new(
        r"(?i)(?:from|จาก)[:\s]*([^\n]+)"
    ).unwrap();

    pub static ref SENDER_LABELED: Regex = Regex::new(
        r"(?i)sender[:\s]*([^\n]+)"
    ).unwrap();

    pub static ref RECEIVER_TO: Regex = Regex::new(
        r"(?i)(?:to|ถึง|ไปยัง)[:\s]*([^\n]+)"
    ).unwrap();

    pub static ref RECEIVER_TO_SHORT: Regex = Regex::new(
        r"(?i)(?:to|ถึง)[:\s]*([^\n]+)"
    ).unwrap();

    pub static ref RECEIVER_LABELED: Regex = Regex::new(
        r"(?i)(?:receiver|ผู้รับ)[:\s]*([^\n]+)"
    ).unwrap();

    // Date normalization (component captures)
    pub static ref THAI_DATE_PARTS: Regex = Regex::new(
        r"([0-9]{1,2})\s*(\p{Thai}{1,3}\.\s?\p{Thai}{1,2}\.?)\s*([0-9]{4}|[0-9]{2})\b"
    ).unwrap();

    pub static ref NUMERIC_DATE_PARTS: Regex = Regex::new(
        r"([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4}|[0-9]{2})\b"
    ).unwrap();
}
