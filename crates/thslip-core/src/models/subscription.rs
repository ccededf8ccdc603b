//! Recurring subscription models.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a subscription is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl Default for BillingCycle {
    fn default() -> Self {
        Self::Monthly
    }
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Number of months in one cycle.
    pub fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => 12,
        }
    }
}

/// A subscription inferred from slip text.
///
/// Absence of a candidate means "no evidence of a subscription", never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCandidate {
    /// Service name from the known-service catalog.
    pub name: String,

    /// Amount copied from the enclosing transaction.
    pub amount: Decimal,

    /// Fixed category of the service.
    pub category: String,

    pub billing_cycle: BillingCycle,

    /// Next expected charge in `DD/MM/YYYY` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<String>,

    pub is_active: bool,

    /// Always true for candidates built from OCR text.
    pub auto_detected: bool,
}

impl SubscriptionCandidate {
    /// Create an auto-detected monthly candidate.
    pub fn new(name: impl Into<String>, category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            billing_cycle: BillingCycle::default(),
            next_billing_date: None,
            is_active: true,
            auto_detected: true,
        }
    }

    /// Set the next billing date one cycle after `paid_on`.
    pub fn with_next_billing(mut self, paid_on: NaiveDate) -> Self {
        self.next_billing_date = paid_on
            .checked_add_months(Months::new(self.billing_cycle.months()))
            .map(|d| d.format("%d/%m/%Y").to_string());
        self
    }
}
