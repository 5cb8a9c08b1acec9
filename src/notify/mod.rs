//! "Send by email" for projection reports
//!
//! Delivery is simulated: [`SimulatedMailer`] waits a fixed delay and
//! reports success. The [`Notifier`] trait is the seam where a real
//! transport would go.

use crate::projection::ProjectionResult;
use crate::report::{ReportDocument, ReportLayout};
use chrono::{DateTime, NaiveDate, Utc};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

const FALLBACK_HINT: &str = "Please try again or download the report directly.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotifyError {
    #[error("No destination address given")]
    MissingAddress,

    #[error("Failed to send email to {recipient}: {reason}. {hint}", hint = FALLBACK_HINT)]
    Transport { recipient: String, reason: String },
}

impl NotifyError {
    /// Suggested alternative for the user when delivery fails
    pub fn fallback_hint(&self) -> &'static str {
        FALLBACK_HINT
    }
}

/// Message handed to a notifier
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: String,
}

/// Proof of a completed delivery
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub recipient: String,
    pub attachment_bytes: usize,
    pub delivered_at: DateTime<Utc>,
}

pub trait Notifier: Send + Sync {
    fn deliver(
        &self,
        envelope: &Envelope,
    ) -> impl Future<Output = Result<DeliveryReceipt, NotifyError>> + Send;
}

/// Pretends to send after a fixed delay; never fails
#[derive(Debug, Clone)]
pub struct SimulatedMailer {
    delay: Duration,
}

impl SimulatedMailer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl Notifier for SimulatedMailer {
    async fn deliver(&self, envelope: &Envelope) -> Result<DeliveryReceipt, NotifyError> {
        log::info!("Preparing email to {}", envelope.recipient);
        tokio::time::sleep(self.delay).await;
        log::info!(
            "Results sent to {} ({}, {} bytes)",
            envelope.recipient,
            envelope.attachment_name,
            envelope.attachment.len()
        );
        Ok(DeliveryReceipt {
            recipient: envelope.recipient.clone(),
            attachment_bytes: envelope.attachment.len(),
            delivered_at: Utc::now(),
        })
    }
}

/// Render the report for `result` and deliver it to `address`
pub async fn send_results_by_email<N: Notifier>(
    notifier: &N,
    address: &str,
    result: &ProjectionResult,
    layout: &ReportLayout,
    generated_on: NaiveDate,
) -> Result<DeliveryReceipt, NotifyError> {
    let recipient = address.trim();
    if recipient.is_empty() {
        return Err(NotifyError::MissingAddress);
    }

    let document = ReportDocument::build(result, layout, generated_on);
    let envelope = Envelope {
        recipient: recipient.to_string(),
        subject: layout.title.clone(),
        body: "Check your inbox for your compound interest calculation results.".to_string(),
        attachment_name: "FinWise-Compound-Interest-Results.txt".to_string(),
        attachment: document.render(),
    };

    match notifier.deliver(&envelope).await {
        Ok(receipt) => Ok(receipt),
        Err(e) => {
            log::error!("Error sending email: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ProjectionParameters;
    use crate::projection::project;

    struct OfflineMailer;

    impl Notifier for OfflineMailer {
        async fn deliver(&self, envelope: &Envelope) -> Result<DeliveryReceipt, NotifyError> {
            Err(NotifyError::Transport {
                recipient: envelope.recipient.clone(),
                reason: "network unreachable".to_string(),
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn test_simulated_send_succeeds() {
        let mailer = SimulatedMailer::new(Duration::from_millis(5));
        let result = project(&ProjectionParameters::default());
        let receipt = send_results_by_email(
            &mailer,
            "  investor@example.com ",
            &result,
            &ReportLayout::default(),
            today(),
        )
        .await
        .unwrap();

        assert_eq!(receipt.recipient, "investor@example.com");
        assert!(receipt.attachment_bytes > 0);
    }

    #[tokio::test]
    async fn test_blank_address_is_rejected() {
        let mailer = SimulatedMailer::new(Duration::ZERO);
        let result = project(&ProjectionParameters::default());
        let err = send_results_by_email(&mailer, "   ", &result, &ReportLayout::default(), today())
            .await
            .unwrap_err();
        assert_eq!(err, NotifyError::MissingAddress);
    }

    #[tokio::test]
    async fn test_transport_failure_suggests_download() {
        let result = project(&ProjectionParameters::default());
        let err = send_results_by_email(
            &OfflineMailer,
            "investor@example.com",
            &result,
            &ReportLayout::default(),
            today(),
        )
        .await
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("investor@example.com"));
        assert!(message.contains("download the report directly"));
        assert_eq!(err.fallback_hint(), FALLBACK_HINT);
    }
}
