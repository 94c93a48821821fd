//! Slash commands.
//!
//! Every command lives in its own module exposing `register()` for its definition and
//! `run()` for its handler. `SlashCommand` is the lookup table between the two: the
//! ready handler registers `definitions()` and the interaction handler resolves incoming
//! command names with `SlashCommand::from_name`.

pub mod checkserver;
pub mod ping;
pub mod status;

use dioxus_logger::tracing;
use serenity::all::{Command, CommandInteraction, Context, CreateCommand, GuildId};

use crate::{bot::handler::Handler, error::AppError};

/// Slash commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    CheckServer,
    Status,
    Ping,
}

impl SlashCommand {
    pub const ALL: [SlashCommand; 3] = [Self::CheckServer, Self::Status, Self::Ping];

    /// Name users type after the slash.
    pub fn name(self) -> &'static str {
        match self {
            Self::CheckServer => checkserver::NAME,
            Self::Status => status::NAME,
            Self::Ping => ping::NAME,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn definition(self) -> CreateCommand {
        match self {
            Self::CheckServer => checkserver::register(),
            Self::Status => status::register(),
            Self::Ping => ping::register(),
        }
    }
}

/// Definitions for every command, in registration order.
pub fn definitions() -> Vec<CreateCommand> {
    SlashCommand::ALL
        .into_iter()
        .map(SlashCommand::definition)
        .collect()
}

/// Registers all slash commands with Discord, replacing any previous set.
///
/// Guild commands show up immediately and are used when a guild is configured; global
/// commands can take a while to propagate.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client
/// - `guild_id` - Guild to register in, or `None` for global registration
///
/// # Returns
/// - `Ok(usize)` - Number of commands Discord reports as registered
/// - `Err(AppError::DiscordErr)` - Registration request failed
pub async fn register(ctx: &Context, guild_id: Option<GuildId>) -> Result<usize, AppError> {
    let commands = definitions();

    tracing::info!(
        "Started refreshing {} application (/) commands",
        commands.len()
    );

    let registered = match guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await?,
        None => Command::set_global_commands(&ctx.http, commands).await?,
    };

    Ok(registered.len())
}

/// Runs the handler for a resolved command.
pub async fn execute(
    command: SlashCommand,
    ctx: &Context,
    interaction: &CommandInteraction,
    handler: &Handler,
) -> Result<(), AppError> {
    match command {
        SlashCommand::CheckServer => checkserver::run(ctx, interaction, &handler.monitor).await,
        SlashCommand::Status => {
            status::run(ctx, interaction, &handler.monitor, handler.interval).await
        }
        SlashCommand::Ping => ping::run(ctx, interaction).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_command_by_name() {
        for command in SlashCommand::ALL {
            assert_eq!(SlashCommand::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn unknown_name_is_not_resolved() {
        assert_eq!(SlashCommand::from_name("deploy"), None);
        assert_eq!(SlashCommand::from_name("CheckServer"), None);
    }

    /// Tests that the registered definitions carry the names the dispatcher resolves.
    ///
    /// Expected: checkserver, status, ping, each with a description
    #[test]
    fn definitions_match_dispatch_names() {
        let names: Vec<String> = definitions()
            .iter()
            .map(|definition| {
                let json = serde_json::to_value(definition).unwrap();
                assert!(json["description"].as_str().is_some_and(|d| !d.is_empty()));
                json["name"].as_str().unwrap().to_string()
            })
            .collect();

        assert_eq!(names, vec!["checkserver", "status", "ping"]);
    }
}
