//! Notification messages announced to the notification sink.
//!
//! A `Notification` carries everything a sink needs to render a message: a title, a
//! description and a color code. The webhook sink turns it into a Discord embed.

use crate::model::monitor::Transition;

/// Embed color for "down" notifications.
pub const COLOR_DOWN: u32 = 0xFF0000;
/// Embed color for "back online" notifications.
pub const COLOR_BACK_ONLINE: u32 = 0x00FF00;
/// Embed color for the startup announcement.
pub const COLOR_BOT_ONLINE: u32 = 0x3498DB;

/// What a notification announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Monitored server stopped responding
    Down,
    /// Monitored server is responding again
    BackOnline,
    /// Bot connected and the monitor is active
    BotOnline,
}

/// Message delivered to the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub color: u32,
}

impl Notification {
    /// Builds the notification sent when the server stops responding.
    ///
    /// # Arguments
    /// - `reason` - Failure description of the probe that detected the outage
    pub fn down(reason: &str) -> Self {
        Self {
            kind: NotificationKind::Down,
            title: "🔴 Server is DOWN!".to_string(),
            description: format!("Signal server not responding.\n**Error:** {}", reason),
            color: COLOR_DOWN,
        }
    }

    /// Builds the notification sent when the server responds again.
    ///
    /// # Arguments
    /// - `status` - Status code of the probe that detected the recovery
    pub fn back_online(status: u16) -> Self {
        Self {
            kind: NotificationKind::BackOnline,
            title: "🟢 Server Back Online".to_string(),
            description: format!("Signal server is responding.\n**Status:** {}", status),
            color: COLOR_BACK_ONLINE,
        }
    }

    /// Builds the announcement sent once the bot has connected and started monitoring.
    pub fn bot_online() -> Self {
        Self {
            kind: NotificationKind::BotOnline,
            title: "🤖 Bot Online".to_string(),
            description: "Signal server monitor is now active.".to_string(),
            color: COLOR_BOT_ONLINE,
        }
    }
}

impl From<&Transition> for Notification {
    fn from(transition: &Transition) -> Self {
        match transition {
            Transition::WentDown { reason } => Self::down(reason),
            Transition::CameBack { status } => Self::back_online(*status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a down transition maps to a red "down" notification carrying the reason.
    #[test]
    fn went_down_maps_to_down_notification() {
        let notification = Notification::from(&Transition::WentDown {
            reason: "Status 503".to_string(),
        });

        assert_eq!(notification.kind, NotificationKind::Down);
        assert_eq!(notification.color, COLOR_DOWN);
        assert!(notification.description.contains("Status 503"));
    }

    /// Tests that a recovery maps to a green "back online" notification with the status.
    #[test]
    fn came_back_maps_to_back_online_notification() {
        let notification = Notification::from(&Transition::CameBack { status: 204 });

        assert_eq!(notification.kind, NotificationKind::BackOnline);
        assert_eq!(notification.color, COLOR_BACK_ONLINE);
        assert!(notification.description.contains("**Status:** 204"));
    }
}
