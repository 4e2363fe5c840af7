//! Best-effort email notifications.
//!
//! [`Notifier`] decouples mail delivery from the request path: callers hand
//! it a composed [`EmailMessage`] and get control back immediately; delivery
//! runs in a spawned task with a bounded retry/backoff policy. A message
//! that exhausts its retries is written to the log as a dead letter --
//! notification failure is never surfaced to, and never fails, the
//! triggering request.

pub mod email;

use std::sync::Arc;
use std::time::Duration;

pub use email::{EmailConfig, EmailDelivery, EmailError};

/// Maximum delivery attempts per message.
const MAX_ATTEMPTS: u32 = 3;

/// Base delay between attempts; doubles after each failure.
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

/// A composed notification email awaiting delivery.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Fire-and-forget notification dispatcher.
///
/// Holds an optional [`EmailDelivery`]; when SMTP is not configured the
/// dispatcher drops messages with a debug log instead of erroring, so the
/// rest of the system behaves identically with and without a mailer.
pub struct Notifier {
    delivery: Option<Arc<EmailDelivery>>,
}

impl Notifier {
    /// Build a notifier from optional SMTP configuration.
    pub fn from_config(config: Option<EmailConfig>) -> Self {
        Self {
            delivery: config.map(|c| Arc::new(EmailDelivery::new(c))),
        }
    }

    /// A notifier that drops every message. Used when SMTP is unconfigured
    /// and throughout the test suites.
    pub fn disabled() -> Self {
        Self { delivery: None }
    }

    /// Queue a message for background delivery and return immediately.
    pub fn dispatch(&self, message: EmailMessage) {
        if message.to.is_empty() {
            tracing::debug!(subject = %message.subject, "notification has no recipients, dropping");
            return;
        }
        let Some(delivery) = &self.delivery else {
            tracing::debug!(
                subject = %message.subject,
                "email delivery not configured, dropping notification"
            );
            return;
        };

        let delivery = Arc::clone(delivery);
        tokio::spawn(async move {
            deliver_with_retry(delivery, message).await;
        });
    }
}

/// Attempt delivery up to [`MAX_ATTEMPTS`] times with exponential backoff,
/// logging a dead-letter line after the final failure.
async fn deliver_with_retry(delivery: Arc<EmailDelivery>, message: EmailMessage) {
    let mut delay = RETRY_BASE_DELAY;
    for attempt in 1..=MAX_ATTEMPTS {
        match delivery
            .send(&message.to, &message.subject, &message.body)
            .await
        {
            Ok(()) => return,
            Err(err) => {
                tracing::warn!(
                    attempt,
                    max_attempts = MAX_ATTEMPTS,
                    subject = %message.subject,
                    error = %err,
                    "notification delivery attempt failed"
                );
                if attempt < MAX_ATTEMPTS {
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
    tracing::error!(
        to = ?message.to,
        subject = %message.subject,
        attempts = MAX_ATTEMPTS,
        "notification dead-lettered after exhausting retries"
    );
}

/// Remove duplicate recipients while preserving first-seen order.
pub fn dedup_recipients(recipients: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(recipients.len());
    for addr in recipients {
        if !seen.contains(&addr) {
            seen.push(addr);
        }
    }
    seen
}
