//! Date normalization for Thai bank slips.
//!
//! Two year heuristics coexist:
//! - Thai month-literal dates carry Buddhist-era years (`68` is BE 2568).
//! - Numeric dates use a pivot at 50 (`99` is 1999, `25` is 2025).

use chrono::NaiveDate;
use tracing::debug;

use super::patterns::{NUMERIC_DATE_PARTS, THAI_DATE_PARTS};

/// Offset between the Buddhist and Gregorian calendars.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Four-digit years above this are taken as Buddhist era.
const BUDDHIST_YEAR_THRESHOLD: i32 = 2400;

/// Two-digit numeric years above this are 19xx.
const CENTURY_PIVOT: u32 = 50;

/// Thai month abbreviations.
const THAI_MONTHS: [(&str, u32); 12] = [
    ("ม.ค.", 1),
    ("ก.พ.", 2),
    ("มี.ค.", 3),
    ("เม.ย.", 4),
    ("พ.ค.", 5),
    ("มิ.ย.", 6),
    ("ก.ค.", 7),
    ("ส.ค.", 8),
    ("ก.ย.", 9),
    ("ต.ค.", 10),
    ("พ.ย.", 11),
    ("ธ.ค.", 12),
];

/// Normalize a slip date to `DD/MM/YYYY` with a Gregorian year.
///
/// Never fails: text without a recognizable date is returned trimmed.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(date) = normalize_thai_date(trimmed) {
        debug!("Normalized Thai date {} -> {}", trimmed, date);
        return date;
    }

    if let Some(date) = normalize_numeric_date(trimmed) {
        debug!("Normalized numeric date {} -> {}", trimmed, date);
        return date;
    }

    trimmed.to_string()
}

/// Parse a `DD/MM/YYYY` string produced by [`normalize_date`].
pub fn parse_normalized_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()
}

fn normalize_thai_date(s: &str) -> Option<String> {
    let caps = THAI_DATE_PARTS.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = thai_month_to_number(&caps[2]);
    let year = buddhist_to_gregorian(&caps[3])?;

    Some(format!("{:02}/{:02}/{:04}", day, month, year))
}

fn normalize_numeric_date(s: &str) -> Option<String> {
    let caps = NUMERIC_DATE_PARTS.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = expand_numeric_year(&caps[3])?;

    Some(format!("{:02}/{:02}/{:04}", day, month, year))
}

/// Month number for a Thai abbreviation; unknown abbreviations map to 1.
///
/// Dots and whitespace are ignored, so OCR output like `พ.ย` still matches.
pub fn thai_month_to_number(abbrev: &str) -> u32 {
    let key = month_key(abbrev);
    THAI_MONTHS
        .iter()
        .find(|(name, _)| month_key(name) == key)
        .map_or(1, |(_, number)| *number)
}

fn month_key(abbrev: &str) -> String {
    abbrev
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect()
}

/// Convert a slip year to Gregorian.
///
/// Two digits are a Buddhist-era short form (2500 + YY). Four-digit years
/// above 2400 are Buddhist era; anything else is already Gregorian.
pub fn buddhist_to_gregorian(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    let value = if year.len() == 2 { 2500 + value } else { value };

    if value > BUDDHIST_YEAR_THRESHOLD {
        Some(value - BUDDHIST_ERA_OFFSET)
    } else {
        Some(value)
    }
}

fn expand_numeric_year(year: &str) -> Option<u32> {
    let value: u32 = year.parse().ok()?;
    if year.len() != 2 {
        return Some(value);
    }

    if value > CENTURY_PIVOT {
        Some(1900 + value)
    } else {
        Some(2000 + value)
    }
}
