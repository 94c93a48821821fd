//! Webhook payload builder.
//!
//! Converts a `Notification` into the JSON body Discord's "execute webhook" endpoint
//! accepts: a single embed with color, title, description, timestamp and footer.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::model::notification::Notification;

/// Footer text attached to every notification embed.
pub const FOOTER_TEXT: &str = "Signal Server Monitor";

/// Body of an execute-webhook request.
#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<WebhookEmbed>,
}

#[derive(Debug, Serialize)]
pub struct WebhookEmbed {
    pub color: u32,
    pub title: String,
    pub description: String,
    /// ISO-8601 send time
    pub timestamp: String,
    pub footer: WebhookFooter,
}

#[derive(Debug, Serialize)]
pub struct WebhookFooter {
    pub text: String,
}

/// Builds the webhook body for a notification.
///
/// # Arguments
/// - `notification` - Notification to render
/// - `sent_at` - Time shown in the embed timestamp
///
/// # Returns
/// - `WebhookPayload` - Body containing exactly one embed
pub fn build_payload(notification: &Notification, sent_at: DateTime<Utc>) -> WebhookPayload {
    WebhookPayload {
        embeds: vec![WebhookEmbed {
            color: notification.color,
            title: notification.title.clone(),
            description: notification.description.clone(),
            timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            footer: WebhookFooter {
                text: FOOTER_TEXT.to_string(),
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Tests the JSON shape Discord expects for a "down" notification.
    ///
    /// Expected: one embed with color, title, description, timestamp and footer text
    #[test]
    fn builds_single_embed_payload() {
        let sent_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let payload = build_payload(&Notification::down("Status 500"), sent_at);

        let json = serde_json::to_value(&payload).unwrap();
        let embeds = json["embeds"].as_array().unwrap();

        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0]["color"], 0xFF0000);
        assert_eq!(embeds[0]["title"], "🔴 Server is DOWN!");
        assert_eq!(
            embeds[0]["description"],
            "Signal server not responding.\n**Error:** Status 500"
        );
        assert_eq!(embeds[0]["timestamp"], "2026-03-01T12:30:00.000Z");
        assert_eq!(embeds[0]["footer"]["text"], FOOTER_TEXT);
    }
}
