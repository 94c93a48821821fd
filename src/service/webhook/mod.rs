//! Discord webhook notification sink.
//!
//! The `WebhookNotifier` posts monitor notifications to a Discord webhook URL as embeds.
//! When no webhook is configured it only logs a warning, so the monitor keeps polling
//! and logging without a sink.

pub mod builder;

use chrono::Utc;
use dioxus_logger::tracing;
use serenity::async_trait;
use std::time::Duration;
use url::Url;

use crate::{
    error::monitor::NotificationError, model::notification::Notification,
    monitor::notifier::Notifier,
};

/// Upper bound on a single webhook delivery.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Notifier delivering embeds to a Discord webhook.
pub struct WebhookNotifier {
    /// HTTP client used for the POST request
    client: reqwest::Client,
    /// Webhook URL; `None` disables delivery
    url: Option<Url>,
}

impl WebhookNotifier {
    /// Creates a new WebhookNotifier.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `url` - Webhook URL, or `None` to only log notifications
    pub fn new(client: reqwest::Client, url: Option<Url>) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    /// Posts the notification as a single-embed webhook message.
    ///
    /// # Returns
    /// - `Ok(())` - Webhook accepted the message, or no webhook is configured
    /// - `Err(NotificationError::Rejected)` - Webhook answered with a non-2xx status
    /// - `Err(NotificationError::Request)` - Webhook unreachable or timed out
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let Some(url) = &self.url else {
            tracing::warn!(
                "Missing DISCORD_WEBHOOK_API environment variable, not sending '{}'",
                notification.title
            );
            return Ok(());
        };

        let payload = builder::build_payload(notification, Utc::now());

        let response = self
            .client
            .post(url.as_str())
            .timeout(WEBHOOK_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::Rejected(status.as_u16()));
        }

        tracing::debug!("Delivered '{}' notification", notification.title);

        Ok(())
    }
}
