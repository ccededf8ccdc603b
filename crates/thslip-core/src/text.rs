//! OCR text cleanup applied before raw text is stored or displayed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Trim every line, drop blank lines and collapse internal whitespace runs
/// to a single space.
///
/// Idempotent: cleaning already cleaned text returns it unchanged.
pub fn clean_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| WHITESPACE_RUN.replace_all(line, " "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_drops_blank_lines() {
        let raw = "  ธนาคารไทยพาณิชย์  \n\n   \n จำนวนเงิน    1,500.00   บาท\n";
        assert_eq!(clean_text(raw), "ธนาคารไทยพาณิชย์\nจำนวนเงิน 1,500.00 บาท");
    }

    #[test]
    fn test_clean_text_collapses_tabs() {
        assert_eq!(clean_text("Ref:\t\tABC123"), "Ref: ABC123");
    }

    #[test]
    fn test_clean_text_handles_crlf() {
        assert_eq!(clean_text("SCB\r\n\r\nAmount 10.00\r\n"), "SCB\nAmount 10.00");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t\n "), "");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let samples = [
            "a  b\n\n c ",
            "\u{00a0}x\u{00a0}\u{00a0}y\u{00a0}",
            "line1\r\n  line2\t\tend",
            "วันที่ 23 พ.ย. 68\n\nเวลา   14:30",
            "",
        ];

        for sample in samples {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
