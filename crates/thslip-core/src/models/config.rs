//! Configuration structures for the slip pipeline.

use serde::{Deserialize, Serialize};

use crate::error::SlipError;
use crate::slip::rules::find_profile;

use super::slip::TransactionKind;

/// Main configuration for the thslip pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Subscription detection configuration.
    pub subscriptions: SubscriptionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Profile used for slips whose bank could not be detected.
    /// `None` uses the first profile in the catalog.
    pub fallback_profile: Option<String>,

    /// Rewrite extracted dates to `DD/MM/YYYY`.
    pub normalize_dates: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fallback_profile: None,
            normalize_dates: true,
        }
    }
}

/// Subscription detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionConfig {
    /// Scan slips for known subscription services.
    pub enabled: bool,

    /// Fill in the next billing date from the slip date.
    pub estimate_next_billing: bool,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            estimate_next_billing: false,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Transaction kind used when none is given.
    pub default_kind: TransactionKind,

    /// Keep the cleaned OCR text on the transaction record.
    pub include_raw_text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_kind: TransactionKind::default(),
            include_raw_text: true,
        }
    }
}

impl SlipConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check references into the compiled-in catalogs.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(name) = &self.extraction.fallback_profile {
            if find_profile(name).is_none() {
                return Err(SlipError::Config(format!(
                    "unknown fallback profile: {}",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
