use serenity::async_trait;

use crate::{error::monitor::NotificationError, model::notification::Notification};

/// Capability to deliver a notification somewhere a human will see it.
///
/// The monitor invokes the notifier on every belief transition and treats any error as
/// non-fatal.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;
}
