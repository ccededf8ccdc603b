//! Bank pattern catalog.
//!
//! Profiles are evaluated in declaration order and the first declared
//! profile doubles as the default pattern set. Reordering the catalog
//! changes which bank a slip is attributed to.

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::*;

/// Bank label for slips that match no catalog identifier.
pub const UNKNOWN_BANK: &str = "Unknown";

/// Slip fields extracted through pattern lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Amount,
    Date,
    Time,
    Reference,
    Sender,
    Receiver,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Amount,
        Field::Date,
        Field::Time,
        Field::Reference,
        Field::Sender,
        Field::Receiver,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Date => "date",
            Field::Time => "time",
            Field::Reference => "reference",
            Field::Sender => "sender",
            Field::Receiver => "receiver",
        }
    }
}

/// Ordered pattern lists for every extracted field.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    pub amount: Vec<&'static Regex>,
    pub date: Vec<&'static Regex>,
    pub time: Vec<&'static Regex>,
    pub reference: Vec<&'static Regex>,
    pub sender: Vec<&'static Regex>,
    pub receiver: Vec<&'static Regex>,
}

impl FieldPatterns {
    /// The field set shared by every profile unless overridden.
    pub fn shared() -> Self {
        Self {
            amount: vec![&*AMOUNT_LABELED, &*AMOUNT_CURRENCY_PREFIX, &*AMOUNT_CURRENCY_SUFFIX],
            date: vec![&*DATE_NUMERIC, &*DATE_LABELED, &*DATE_THAI],
            time: vec![&*TIME_BARE, &*TIME_LABELED],
            reference: vec![&*REF_LABELED, &*REF_TRANSACTION_ID],
            sender: vec![&*SENDER_FROM, &*SENDER_LABELED],
            receiver: vec![&*RECEIVER_TO, &*RECEIVER_LABELED],
        }
    }

    pub fn get(&self, field: Field) -> &[&'static Regex] {
        match field {
            Field::Amount => &self.amount,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Reference => &self.reference,
            Field::Sender => &self.sender,
            Field::Receiver => &self.receiver,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut Vec<&'static Regex> {
        match field {
            Field::Amount => &mut self.amount,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Reference => &mut self.reference,
            Field::Sender => &mut self.sender,
            Field::Receiver => &mut self.receiver,
        }
    }
}

/// A known bank: identifiers plus per-field pattern lists.
#[derive(Debug)]
pub struct BankProfile {
    /// Unique bank label.
    pub name: &'static str,
    /// Case-insensitive identifier patterns, tried in order.
    pub identifiers: Vec<Regex>,
    /// Field patterns, tried in order.
    pub fields: FieldPatterns,
}

impl BankProfile {
    pub(crate) fn new(name: &'static str, identifiers: &[&str]) -> Self {
        let identifiers = identifiers
            .iter()
            .map(|pattern| Regex::new(&format!("(?i){}", pattern)).unwrap())
            .collect();

        Self {
            name,
            identifiers,
            fields: FieldPatterns::shared(),
        }
    }

    /// Replace the pattern list of one field.
    pub(crate) fn with(mut self, field: Field, patterns: &[&'static Regex]) -> Self {
        *self.fields.get_mut(field) = patterns.to_vec();
        self
    }

    /// BBL-style field set: bare time, short reference and counterparty labels.
    fn with_compact_fields(self) -> Self {
        self.with(Field::Time, &[&*TIME_BARE])
            .with(Field::Reference, &[&*REF_LABELED_SHORT])
            .with(Field::Sender, &[&*SENDER_FROM])
            .with(Field::Receiver, &[&*RECEIVER_TO_SHORT])
    }

    /// Pattern list for a field, in priority order.
    pub fn patterns(&self, field: Field) -> &[&'static Regex] {
        self.fields.get(field)
    }

    /// First identifier pattern that matches `text`.
    pub fn identify(&self, text: &str) -> Option<&Regex> {
        self.identifiers.iter().find(|re| re.is_match(text))
    }
}

lazy_static! {
    static ref CATALOG: Vec<BankProfile> = vec![
        BankProfile::new("SCB", &[
            r"siam\s*commercial\s*bank",
            r"scb",
            r"ธนาคารไทยพาณิชย์",
        ]),
        BankProfile::new("KBank", &[
            r"kasikorn\s*bank",
            r"kbank",
            r"k-bank",
            r"ธนาคารกสิกรไทย",
        ])
        .with(Field::Reference, &[&*REF_LABELED, &*REF_TRANSACTION_NO])
        .with(Field::Sender, &[&*SENDER_FROM])
        .with(Field::Receiver, &[&*RECEIVER_TO_SHORT]),
        BankProfile::new("BBL", &[
            r"bangkok\s*bank",
            r"bbl",
            r"ธนาคารกรุงเทพ",
        ])
        .with_compact_fields(),
        BankProfile::new("KTB", &[
            r"krung\s*thai\s*bank",
            r"ktb",
            r"ธนาคารกรุงไทย",
        ])
        .with_compact_fields()
        .with(Field::Date, &[&*DATE_NUMERIC, &*DATE_THAI]),
        BankProfile::new("Krungsri", &[
            r"krungsri",
            r"bank\s*of\s*ayudhya",
            r"ธนาคารกรุงศรีอยุธยา",
        ])
        .with_compact_fields(),
        BankProfile::new("TTB", &[
            r"tmb\s*thanachart",
            r"\bttb\b",
            r"ธนาคารทหารไทยธนชาต",
        ])
        .with_compact_fields(),
        BankProfile::new("GSB", &[
            r"government\s*savings\s*bank",
            r"\bgsb\b",
            r"ธนาคารออมสิน",
        ])
        .with_compact_fields(),
    ];
}

/// All bank profiles in declaration order.
pub fn catalog() -> &'static [BankProfile] {
    &CATALOG
}

/// The first declared profile, used for slips from unknown banks.
pub fn default_profile() -> &'static BankProfile {
    &CATALOG[0]
}

/// Look up a profile by name (case-insensitive).
pub fn find_profile(name: &str) -> Option<&'static BankProfile> {
    CATALOG.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = catalog().iter().map(|p| p.name).collect();
        assert_eq!(names, ["SCB", "KBank", "BBL", "KTB", "Krungsri", "TTB", "GSB"]);
        assert_eq!(default_profile().name, "SCB");
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in catalog().iter().enumerate() {
            for b in &catalog()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find_profile() {
        assert_eq!(find_profile("kbank").map(|p| p.name), Some("KBank"));
        assert!(find_profile("Unknown").is_none());
    }

    #[test]
    fn test_overrides_keep_shared_amounts() {
        let shared = FieldPatterns::shared();
        for profile in catalog() {
            let amounts = profile.patterns(Field::Amount);
            assert_eq!(amounts.len(), shared.amount.len());
            for (a, b) in amounts.iter().zip(&shared.amount) {
                assert!(std::ptr::eq(*a, *b), "{} amount list diverged", profile.name);
            }
        }
    }

    #[test]
    fn test_kbank_reference_order() {
        let kbank = find_profile("KBank").unwrap();
        let refs = kbank.patterns(Field::Reference);
        assert!(std::ptr::eq(refs[0], &*REF_LABELED));
        assert!(std::ptr::eq(refs[1], &*REF_TRANSACTION_NO));
    }

    #[test]
    fn test_ktb_has_no_labeled_date() {
        let ktb = find_profile("KTB").unwrap();
        let dates = ktb.patterns(Field::Date);
        assert_eq!(dates.len(), 2);
        assert!(std::ptr::eq(dates[0], &*DATE_NUMERIC));
    }

    #[test]
    fn test_identify_returns_first_matching_identifier() {
        let scb = default_profile();
        let matched = scb.identify("SIAM COMMERCIAL BANK (SCB)").unwrap();
        assert!(matched.as_str().contains("siam"));
    }
}
