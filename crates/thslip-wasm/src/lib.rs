//! WASM bindings for Thai bank slip OCR text extraction.
//!
//! OCR runs on the JavaScript side (Tesseract.js or similar); these bindings
//! take the recognized text.

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use thslip_core::slip::rules::{catalog, find_profile};
use thslip_core::{SlipConfig, SlipProcessor, SlipTransaction, SubscriptionCandidate, TransactionKind};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_kind(kind: Option<String>) -> Result<TransactionKind, JsValue> {
    match kind {
        Some(kind) => TransactionKind::from_str(&kind).map_err(to_js_error),
        None => Ok(TransactionKind::default()),
    }
}

#[derive(serde::Serialize)]
struct ExtractResult {
    transaction: SlipTransaction,
    subscription: Option<SubscriptionCandidate>,
}

fn extract_with(processor: &SlipProcessor, text: &str, kind: TransactionKind) -> Result<JsValue, JsValue> {
    let (transaction, subscription) = processor.build(text, kind).map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&ExtractResult {
        transaction,
        subscription,
    })
    .map_err(to_js_error)
}

/// Extract a transaction from slip OCR text.
///
/// `kind` is `"income"` or `"expense"` (default). Returns
/// `{ transaction, subscription }`.
#[wasm_bindgen]
pub fn extract_slip(text: &str, kind: Option<String>) -> Result<JsValue, JsValue> {
    extract_with(&SlipProcessor::default(), text, parse_kind(kind)?)
}

/// Normalize a slip date to `DD/MM/YYYY` (Buddhist-era years converted).
#[wasm_bindgen]
pub fn normalize_date(raw: &str) -> String {
    thslip_core::normalize_date(raw)
}

/// Detect the issuing bank, `"Unknown"` when no identifier matches.
#[wasm_bindgen]
pub fn detect_bank(text: &str) -> String {
    thslip_core::detect_bank(text).to_string()
}

/// Names of the known banks in detection order.
#[wasm_bindgen]
pub fn known_banks() -> js_sys::Array {
    catalog()
        .iter()
        .map(|profile| JsValue::from_str(profile.name))
        .collect()
}

/// Detect a known subscription service. `amount` is in baht.
#[wasm_bindgen]
pub fn detect_subscription(text: &str, amount: &str) -> Result<JsValue, JsValue> {
    let amount = thslip_core::slip::rules::parse_thai_amount(amount)
        .ok_or_else(|| JsValue::from_str("invalid amount"))?;

    serde_wasm_bindgen::to_value(&thslip_core::detect_subscription(text, amount))
        .map_err(to_js_error)
}

#[wasm_bindgen]
pub fn clean_text(text: &str) -> String {
    thslip_core::clean_text(text)
}

/// Guess a spending category from the receiver name.
#[wasm_bindgen]
pub fn suggest_category(receiver: &str) -> String {
    thslip_core::suggest_category(receiver).to_string()
}

/// Slip extractor class for browser use.
#[wasm_bindgen]
pub struct SlipExtractor {
    config: SlipConfig,
    processor: SlipProcessor,
}

#[wasm_bindgen]
impl SlipExtractor {
    /// Create a new slip extractor with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(SlipConfig::default())
    }

    /// Create an extractor from a JSON configuration document.
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<SlipExtractor, JsValue> {
        let config = SlipConfig::from_json(json).map_err(to_js_error)?;
        Ok(Self::with_config(config))
    }

    /// Profile used when the bank cannot be detected.
    #[wasm_bindgen]
    pub fn set_fallback_profile(&mut self, name: &str) {
        if find_profile(name).is_none() {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "thslip: unknown bank profile {:?}, using default",
                name
            )));
        }

        let mut config = self.config.clone();
        config.extraction.fallback_profile = Some(name.to_string());
        *self = Self::with_config(config);
    }

    /// Configure next billing date estimation.
    #[wasm_bindgen]
    pub fn set_estimate_next_billing(&mut self, estimate: bool) {
        let mut config = self.config.clone();
        config.subscriptions.estimate_next_billing = estimate;
        *self = Self::with_config(config);
    }

    /// Extract a transaction from slip OCR text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str, kind: Option<String>) -> Result<JsValue, JsValue> {
        let kind = match kind {
            Some(_) => parse_kind(kind)?,
            None => self.config.output.default_kind,
        };
        extract_with(&self.processor, text, kind)
    }

    /// Current configuration as JSON.
    #[wasm_bindgen]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config).map_err(to_js_error)
    }
}

impl SlipExtractor {
    fn with_config(config: SlipConfig) -> Self {
        Self {
            processor: SlipProcessor::new(config.clone()),
            config,
        }
    }
}

impl Default for SlipExtractor {
    fn default() -> Self {
        Self::new()
    }
}
