//! Recurring subscription detection from slip text.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::subscription::SubscriptionCandidate;

pub const CATEGORY_ENTERTAINMENT: &str = "บันเทิง";
pub const CATEGORY_MEMBERSHIP: &str = "สมาชิก";
pub const CATEGORY_CLOUD: &str = "คลาวด์";
pub const CATEGORY_SOFTWARE: &str = "ซอฟต์แวร์";

/// A known recurring service.
#[derive(Debug)]
pub struct SubscriptionPattern {
    pub name: &'static str,
    pub category: &'static str,
    /// Case-insensitive patterns, tried in order.
    pub patterns: Vec<Regex>,
}

impl SubscriptionPattern {
    fn new(name: &'static str, category: &'static str, patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(&format!("(?i){}", pattern)).unwrap())
            .collect();

        Self {
            name,
            category,
            patterns,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

lazy_static! {
    static ref SERVICES: Vec<SubscriptionPattern> = vec![
        SubscriptionPattern::new("Netflix", CATEGORY_ENTERTAINMENT, &[r"netflix"]),
        SubscriptionPattern::new("Spotify", CATEGORY_ENTERTAINMENT, &[r"spotify"]),
        SubscriptionPattern::new("YouTube Premium", CATEGORY_ENTERTAINMENT, &[
            r"youtube\s*premium",
            r"youtube\s*music",
        ]),
        SubscriptionPattern::new("LINE MAN", CATEGORY_MEMBERSHIP, &[r"line\s*man", r"lineman"]),
        SubscriptionPattern::new("Grab Unlimited", CATEGORY_MEMBERSHIP, &[r"grab\s*unlimited"]),
        SubscriptionPattern::new("True ID", CATEGORY_ENTERTAINMENT, &[r"true\s*id", r"trueid"]),
        SubscriptionPattern::new("Disney+", CATEGORY_ENTERTAINMENT, &[
            r"disney\s*\+",
            r"disney\s*plus",
        ]),
        SubscriptionPattern::new("iCloud", CATEGORY_CLOUD, &[r"icloud", r"apple\s*storage"]),
        SubscriptionPattern::new("Google One", CATEGORY_CLOUD, &[r"google\s*one"]),
        SubscriptionPattern::new("Adobe", CATEGORY_SOFTWARE, &[r"adobe", r"photoshop"]),
    ];
}

/// Known services in declaration order.
pub fn subscription_catalog() -> &'static [SubscriptionPattern] {
    &SERVICES
}

/// Detect a known subscription service anywhere in `text`.
///
/// The first service in catalog order wins. `None` is the normal outcome
/// for ordinary transfers.
pub fn detect_subscription(text: &str, amount: Decimal) -> Option<SubscriptionCandidate> {
    let service = SERVICES.iter().find(|service| service.is_match(text))?;
    debug!("Detected subscription {} ({})", service.name, service.category);

    Some(SubscriptionCandidate::new(service.name, service.category, amount))
}

/// Suggest a subscription category from a receiver name.
pub fn suggest_category(receiver: &str) -> &'static str {
    let receiver = receiver.to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| receiver.contains(k));

    if has_any(&["netflix", "spotify", "youtube", "true", "disney"]) {
        CATEGORY_ENTERTAINMENT
    } else if has_any(&["icloud", "google", "dropbox"]) {
        CATEGORY_CLOUD
    } else if has_any(&["adobe", "microsoft"]) {
        CATEGORY_SOFTWARE
    } else {
        CATEGORY_MEMBERSHIP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subscription::BillingCycle;

    #[test]
    fn test_detect_netflix() {
        let amount = Decimal::new(41900, 2);
        let sub = detect_subscription("ชำระเงิน NETFLIX.COM 419.00", amount).unwrap();

        assert_eq!(sub.name, "Netflix");
        assert_eq!(sub.category, CATEGORY_ENTERTAINMENT);
        assert_eq!(sub.billing_cycle, BillingCycle::Monthly);
        assert_eq!(sub.amount, amount);
        assert!(sub.auto_detected);
    }

    #[test]
    fn test_detect_pattern_variants() {
        let samples = [
            ("YouTube Premium", "Google YouTube Music family"),
            ("LINE MAN", "LINEMAN Wongnai"),
            ("Grab Unlimited", "GRAB UNLIMITED monthly"),
            ("True ID", "TrueID+"),
            ("Disney+", "Disney Plus Hotstar"),
            ("iCloud", "APPLE STORAGE 50GB"),
            ("Google One", "Google One 100 GB"),
            ("Adobe", "Photoshop plan"),
        ];

        for (expected, text) in samples {
            let sub = detect_subscription(text, Decimal::ONE).unwrap();
            assert_eq!(sub.name, expected, "text: {}", text);
        }
    }

    #[test]
    fn test_first_service_wins() {
        let sub = detect_subscription("Spotify bundle with Netflix", Decimal::ONE).unwrap();
        assert_eq!(sub.name, "Netflix");
    }

    #[test]
    fn test_no_subscription() {
        assert!(detect_subscription("โอนเงินให้ นาย สมชาย 500.00 บาท", Decimal::ONE).is_none());
    }

    #[test]
    fn test_suggest_category() {
        assert_eq!(suggest_category("NETFLIX.COM"), CATEGORY_ENTERTAINMENT);
        assert_eq!(suggest_category("Dropbox Inc"), CATEGORY_CLOUD);
        assert_eq!(suggest_category("Microsoft 365"), CATEGORY_SOFTWARE);
        assert_eq!(suggest_category("Fitness First"), CATEGORY_MEMBERSHIP);
    }

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = subscription_catalog().iter().map(|s| s.name).collect();
        assert_eq!(names.first(), Some(&"Netflix"));
        assert_eq!(names.last(), Some(&"Adobe"));
        assert_eq!(names.len(), 10);
    }
}
