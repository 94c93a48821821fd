use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting.
///
/// Split from `start_bot` so the caller can grab the shard manager for shutdown before
/// the client is moved into its run loop.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `handler` - Event handler receiving gateway events
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError::DiscordErr)` - Invalid token or client construction failure
pub async fn init_bot(config: &Config, handler: Handler) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until the shards shut down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
