mod bot;
mod config;
mod controller;
mod error;
mod model;
mod monitor;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use dioxus_logger::tracing::{self, Level};
use serenity::all::GuildId;
use std::sync::Arc;

use crate::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    scheduler::health_monitor::MonitorSlot,
    startup::{PUBLIC_URL_ATTEMPTS, PUBLIC_URL_RETRY_DELAY, PUBLIC_URL_TIMEOUT},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let monitor = Arc::new(startup::build_monitor(&config, &http_client));

    // Start keepalive server in a separate task
    let keepalive_state = AppState::new(monitor.clone(), config.poll_interval);
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_keepalive(port, keepalive_state).await {
            tracing::error!("Keepalive server error: {}", e);
        }
    });

    match config.public_url.clone() {
        Some(public_url) => {
            let client = http_client.clone();
            tokio::spawn(async move {
                startup::verify_public_url(
                    &client,
                    &public_url,
                    PUBLIC_URL_ATTEMPTS,
                    PUBLIC_URL_RETRY_DELAY,
                    PUBLIC_URL_TIMEOUT,
                )
                .await;
            });
        }
        None => tracing::info!("No public URL configured or detected"),
    }

    // The monitor is started from the ready handler once the bot has connected
    let monitor_slot = MonitorSlot::default();
    let handler = Handler::new(
        monitor.clone(),
        config.poll_interval,
        config.guild_id.map(GuildId::new),
        monitor_slot.clone(),
    );

    let bot_client = bot::start::init_bot(&config, handler).await?;
    let shard_manager = bot_client.shard_manager.clone();

    tokio::select! {
        result = bot::start::start_bot(bot_client) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
            shard_manager.shutdown_all().await;
        }
    }

    // Covers a monitor still starting when shutdown begins
    monitor.halt();
    if let Some(handle) = monitor_slot.lock().await.take() {
        handle.stop().await?;
    }

    Ok(())
}
