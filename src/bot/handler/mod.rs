use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;
use std::{
    sync::{atomic::AtomicBool, Arc},
    time::Duration,
};

use crate::{monitor::HealthMonitor, scheduler::health_monitor::MonitorSlot};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Monitor started on first ready and queried by commands
    pub monitor: Arc<HealthMonitor>,
    /// Poll cadence for the monitor job
    pub interval: Duration,
    /// Guild to register commands in; global registration when `None`
    pub guild_id: Option<GuildId>,
    /// Holds the running monitor job once started
    pub monitor_slot: MonitorSlot,
    /// Claimed by the first ready event so the monitor is started once per process
    monitor_started: AtomicBool,
}

impl Handler {
    pub fn new(
        monitor: Arc<HealthMonitor>,
        interval: Duration,
        guild_id: Option<GuildId>,
        monitor_slot: MonitorSlot,
    ) -> Self {
        Self {
            monitor,
            interval,
            guild_id,
            monitor_slot,
            monitor_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a user invokes a slash command or other interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
