//! `/checkserver` - probes the signal server on demand.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, EditInteractionResponse, Timestamp,
};

use crate::{
    error::AppError,
    model::{
        monitor::ProbeOutcome,
        notification::{COLOR_BACK_ONLINE, COLOR_DOWN},
    },
    monitor::HealthMonitor,
};

pub const NAME: &str = "checkserver";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Checks if the signal server is online")
}

/// Defers the reply, probes the target once and edits the reply with the result.
///
/// The probe does not change the background monitor's belief.
pub async fn run(
    ctx: &Context,
    interaction: &CommandInteraction,
    monitor: &HealthMonitor,
) -> Result<(), AppError> {
    interaction.defer(&ctx.http).await?;

    let outcome = monitor.check().await;

    interaction
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().embed(build_embed(&outcome)),
        )
        .await?;

    Ok(())
}

/// Builds the Online/Offline embed for a probe outcome.
pub fn build_embed(outcome: &ProbeOutcome) -> CreateEmbed {
    let embed = match outcome {
        ProbeOutcome::Reachable { status } => CreateEmbed::new()
            .color(COLOR_BACK_ONLINE)
            .title("🟢 Server Status: Online")
            .description(format!(
                "**Status:** {}\n✅ Server is responding normally.",
                status
            )),
        ProbeOutcome::Unreachable { reason } => CreateEmbed::new()
            .color(COLOR_DOWN)
            .title("🔴 Server Status: Offline")
            .description(format!("❌ **Error:** {}", reason)),
    };

    embed.timestamp(Timestamp::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_builds_online_embed() {
        let embed = build_embed(&ProbeOutcome::Reachable { status: 200 });
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["title"], "🟢 Server Status: Online");
        assert!(json["description"]
            .as_str()
            .unwrap()
            .contains("**Status:** 200"));
    }

    #[test]
    fn unreachable_builds_offline_embed_with_reason() {
        let embed = build_embed(&ProbeOutcome::Unreachable {
            reason: "Timed out after 10000ms".to_string(),
        });
        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["title"], "🔴 Server Status: Offline");
        assert_eq!(json["description"], "❌ **Error:** Timed out after 10000ms");
    }
}
