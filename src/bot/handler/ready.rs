//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler is used to:
//! - Log connection information and set the bot's activity
//! - Register the slash commands
//! - Announce the bot and start the health monitor, once per process
//!
//! Ready fires again after a full reconnect. Command registration is idempotent and is
//! repeated; the announcement and the monitor start are not.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};
use std::sync::atomic::Ordering;

use crate::{
    bot::{command, handler::Handler},
    model::notification::Notification,
    scheduler::health_monitor::start_monitor,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `handler` - Event handler holding the monitor and its settings
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("the signal server")));

    match command::register(&ctx, handler.guild_id).await {
        Ok(count) => tracing::info!("Registered {} application (/) commands", count),
        Err(e) => tracing::error!("Failed to register application commands: {}", e),
    }

    start_monitor_once(handler).await;
}

/// Announces the bot and starts the health monitor unless an earlier ready already did.
///
/// The monitor slot is only locked to store the finished handle, so shutdown never waits
/// on the announcement or the first probe.
///
/// # Returns
/// - `true` - This call started the monitor
/// - `false` - The monitor was already started
pub async fn start_monitor_once(handler: &Handler) -> bool {
    if handler.monitor_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Health monitor already running, skipping start");
        return false;
    }

    tracing::info!("Starting background server monitor...");

    handler.monitor.announce(&Notification::bot_online()).await;

    match start_monitor(handler.monitor.clone(), handler.interval).await {
        Ok(handle) => *handler.monitor_slot.lock().await = Some(handle),
        Err(e) => tracing::error!("Failed to start health monitor: {}", e),
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, time::Duration};

    use crate::{
        model::notification::NotificationKind,
        monitor::test::{
            fake::{GatedProbe, RecordingNotifier, ScriptedProbe},
            monitor_with, reachable,
        },
        scheduler::health_monitor::MonitorSlot,
    };

    /// Tests that a second ready event neither re-announces nor restarts the monitor.
    ///
    /// Expected: one BotOnline notification, one immediate probe, a stored handle
    #[tokio::test(flavor = "multi_thread")]
    async fn starts_monitor_once_across_ready_events() {
        let probe = ScriptedProbe::new(Vec::new());
        let notifier = RecordingNotifier::new();
        let monitor = Arc::new(monitor_with(probe.clone(), notifier.clone()));
        let handler = Handler::new(
            monitor,
            Duration::from_secs(3600),
            None,
            MonitorSlot::default(),
        );

        assert!(start_monitor_once(&handler).await);
        assert!(!start_monitor_once(&handler).await);

        let delivered = notifier.delivered().await;
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].kind, NotificationKind::BotOnline);
        assert_eq!(probe.calls(), 1);

        let handle = handler.monitor_slot.lock().await.take().unwrap();
        handle.stop().await.unwrap();
    }

    /// Tests that the monitor slot stays free while the first probe is in flight.
    ///
    /// Expected: slot lockable during the probe, handle stored once it finishes
    #[tokio::test(flavor = "multi_thread")]
    async fn slot_not_held_during_first_probe() {
        let probe = GatedProbe::new(reachable(200));
        let monitor = Arc::new(monitor_with(probe.clone(), RecordingNotifier::new()));
        let handler = Arc::new(Handler::new(
            monitor,
            Duration::from_secs(3600),
            None,
            MonitorSlot::default(),
        ));

        let starting = tokio::spawn({
            let handler = handler.clone();
            async move { start_monitor_once(&handler).await }
        });
        probe.entered.notified().await;

        assert!(handler.monitor_slot.try_lock().is_ok());

        probe.release.notify_one();
        assert!(starting.await.unwrap());

        let handle = handler.monitor_slot.lock().await.take().unwrap();
        handle.stop().await.unwrap();
    }
}
