//! End-to-end slip processing: extraction, normalization and subscription
//! detection.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::SlipConfig;
use crate::models::slip::{ProcessedSlip, SlipTransaction, TransactionKind};
use crate::models::subscription::SubscriptionCandidate;
use crate::text::clean_text;

use super::extractor::SlipExtractor;
use super::rules::{detect_subscription, normalize_date, parse_normalized_date};
use super::{Result, SlipParser};

/// Turns OCR text into a transaction plus an optional subscription.
///
/// Holds no mutable state; one processor can serve many threads.
#[derive(Debug, Clone)]
pub struct SlipProcessor {
    extractor: SlipExtractor,
    config: SlipConfig,
}

impl Default for SlipProcessor {
    fn default() -> Self {
        Self::new(SlipConfig::default())
    }
}

impl SlipProcessor {
    pub fn new(config: SlipConfig) -> Self {
        Self {
            extractor: SlipExtractor::from_config(&config.extraction),
            config,
        }
    }

    pub fn config(&self) -> &SlipConfig {
        &self.config
    }

    /// Process a slip using the configured default transaction kind.
    pub fn process_default(&self, text: &str) -> Result<ProcessedSlip> {
        self.process(text, self.config.output.default_kind)
    }

    /// Process one slip's OCR text.
    ///
    /// Fails only when the text is empty or holds no positive amount.
    pub fn process(&self, text: &str, kind: TransactionKind) -> Result<ProcessedSlip> {
        let start = Instant::now();

        let (transaction, subscription) = self.build(text, kind)?;

        Ok(ProcessedSlip {
            transaction,
            subscription,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Untimed variant of [`process`](Self::process), for targets without a
    /// system clock.
    pub fn build(
        &self,
        text: &str,
        kind: TransactionKind,
    ) -> Result<(SlipTransaction, Option<SubscriptionCandidate>)> {
        let data = self.extractor.parse(text)?;

        let date = if self.config.extraction.normalize_dates {
            normalize_date(&data.date)
        } else {
            data.date.clone()
        };

        let subscription = if self.config.subscriptions.enabled {
            detect_subscription(text, data.amount)
        } else {
            None
        };

        let subscription = match (subscription, self.config.subscriptions.estimate_next_billing) {
            (Some(sub), true) => match parse_normalized_date(&date) {
                Some(paid_on) => Some(sub.with_next_billing(paid_on)),
                None => {
                    debug!("Slip date {:?} not normalized, skipping next billing date", date);
                    Some(sub)
                }
            },
            (sub, _) => sub,
        };

        let raw_ocr_text = if self.config.output.include_raw_text {
            clean_text(text)
        } else {
            String::new()
        };

        let transaction = SlipTransaction {
            kind,
            amount: data.amount,
            date,
            time: data.time,
            reference: data.reference,
            bank: data.bank,
            sender: data.sender,
            receiver: data.receiver,
            category: subscription
                .as_ref()
                .map(|sub| sub.category.clone())
                .unwrap_or_default(),
            raw_ocr_text,
        };

        info!(
            "Processed {} slip from {}: {} on {}",
            transaction.kind, transaction.bank, transaction.amount, transaction.date
        );

        Ok((transaction, subscription))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::models::subscription::BillingCycle;
    use rust_decimal::Decimal;

    const SCB_SLIP: &str = "ธนาคารไทยพาณิชย์\n\n  จำนวนเงิน   1,500.00\nวันที่ 23 พ.ย. 68\nเวลา 14:30\nอ้างอิง ABC123";

    #[test]
    fn test_process_normalizes_date() {
        let slip = SlipProcessor::default()
            .process(SCB_SLIP, TransactionKind::Expense)
            .unwrap();

        let tx = &slip.transaction;
        assert_eq!(tx.bank, "SCB");
        assert_eq!(tx.amount, Decimal::new(150000, 2));
        assert_eq!(tx.date, "23/11/2025");
        assert_eq!(tx.time, "14:30");
        assert_eq!(tx.reference, "ABC123");
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.category, "");
        assert!(slip.subscription.is_none());
    }

    #[test]
    fn test_process_stores_cleaned_text() {
        let slip = SlipProcessor::default().process_default(SCB_SLIP).unwrap();
        assert_eq!(
            slip.transaction.raw_ocr_text,
            "ธนาคารไทยพาณิชย์\nจำนวนเงิน 1,500.00\nวันที่ 23 พ.ย. 68\nเวลา 14:30\nอ้างอิง ABC123"
        );
    }

    #[test]
    fn test_process_without_normalization() {
        let mut config = SlipConfig::default();
        config.extraction.normalize_dates = false;
        config.output.include_raw_text = false;

        let slip = SlipProcessor::new(config)
            .process(SCB_SLIP, TransactionKind::Income)
            .unwrap();

        assert_eq!(slip.transaction.date, "23 พ.ย. 68");
        assert_eq!(slip.transaction.raw_ocr_text, "");
    }

    #[test]
    fn test_process_detects_subscription() {
        let text = "KBank\nจ่ายบิล NETFLIX.COM\nจำนวนเงิน 419.00\n01/03/2025";

        let slip = SlipProcessor::default()
            .process(text, TransactionKind::Expense)
            .unwrap();

        let sub = slip.subscription.unwrap();
        assert_eq!(sub.name, "Netflix");
        assert_eq!(sub.amount, Decimal::new(41900, 2));
        assert_eq!(sub.billing_cycle, BillingCycle::Monthly);
        assert!(sub.next_billing_date.is_none());
        assert_eq!(slip.transaction.category, sub.category);
    }

    #[test]
    fn test_process_estimates_next_billing() {
        let mut config = SlipConfig::default();
        config.subscriptions.estimate_next_billing = true;

        let text = "KBank\nSpotify Premium\nจำนวนเงิน 149.00\n01/03/2025";
        let slip = SlipProcessor::new(config)
            .process(text, TransactionKind::Expense)
            .unwrap();

        let sub = slip.subscription.unwrap();
        assert_eq!(sub.next_billing_date.as_deref(), Some("01/04/2025"));
    }

    #[test]
    fn test_subscription_detection_disabled() {
        let mut config = SlipConfig::default();
        config.subscriptions.enabled = false;

        let text = "KBank\nNETFLIX.COM\nจำนวนเงิน 419.00";
        let slip = SlipProcessor::new(config)
            .process(text, TransactionKind::Expense)
            .unwrap();

        assert!(slip.subscription.is_none());
    }

    #[test]
    fn test_process_propagates_amount_failure() {
        let err = SlipProcessor::default()
            .process("Spotify 0.00 บาท", TransactionKind::Expense)
            .unwrap_err();

        assert_eq!(err, ExtractionError::AmountNotFound);
    }

    #[test]
    fn test_build_matches_process() {
        let processor = SlipProcessor::default();
        let (transaction, subscription) = processor.build(SCB_SLIP, TransactionKind::Income).unwrap();
        let slip = processor.process(SCB_SLIP, TransactionKind::Income).unwrap();

        assert_eq!(transaction, slip.transaction);
        assert_eq!(subscription, slip.subscription);
    }

    #[test]
    fn test_processor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SlipProcessor>();
    }

    #[test]
    fn test_concurrent_processing() {
        let processor = SlipProcessor::default();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| processor.process_default(SCB_SLIP).unwrap()))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap().transaction.date, "23/11/2025");
            }
        });
    }
}
