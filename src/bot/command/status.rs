//! `/status` - reports what the background monitor currently believes.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use std::time::Duration;

use crate::{
    error::AppError,
    model::notification::{COLOR_BACK_ONLINE, COLOR_DOWN},
    monitor::HealthMonitor,
};

pub const NAME: &str = "status";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Shows the background monitor's view of the signal server")
}

/// Replies ephemerally with the monitor's belief, target and cadence.
pub async fn run(
    ctx: &Context,
    interaction: &CommandInteraction,
    monitor: &HealthMonitor,
    interval: Duration,
) -> Result<(), AppError> {
    let embed = build_embed(monitor.target().as_str(), monitor.is_up().await, interval);

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

pub fn build_embed(target: &str, is_up: bool, interval: Duration) -> CreateEmbed {
    let (title, color) = if is_up {
        ("🟢 Monitor: server up", COLOR_BACK_ONLINE)
    } else {
        ("🔴 Monitor: server down", COLOR_DOWN)
    };

    CreateEmbed::new()
        .title(title)
        .color(color)
        .field("Target", target, false)
        .field("Poll interval", format!("{}s", interval.as_secs()), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_belief_builds_down_embed() {
        let embed = build_embed("https://signal.example.com/", false, Duration::from_secs(300));
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["title"], "🔴 Monitor: server down");
        assert_eq!(json["fields"][0]["value"], "https://signal.example.com/");
        assert_eq!(json["fields"][1]["value"], "300s");
    }
}
