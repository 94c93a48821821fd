use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::bot::{
    command::{self, SlashCommand},
    handler::Handler,
};

/// Message shown to the user when a command handler fails.
pub const COMMAND_ERROR_MESSAGE: &str = "There was an error executing this command!";

/// Dispatches a slash command interaction to its handler.
///
/// Non-command interactions are ignored and unknown command names are logged. A failing
/// handler is reported to the invoking user with an ephemeral error message.
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    let name = interaction.data.name.as_str();
    let Some(command) = SlashCommand::from_name(name) else {
        tracing::error!("No command matching {} found", name);
        return;
    };

    tracing::debug!("Executing /{} for {}", name, interaction.user.name);

    if let Err(e) = command::execute(command, &ctx, &interaction, handler).await {
        tracing::error!("Failed to execute /{}: {}", name, e);
        report_failure(&ctx, &interaction).await;
    }
}

/// Tells the user their command failed.
///
/// Answers with an ephemeral response, or with a follow-up when the interaction was
/// already acknowledged (e.g. deferred) before the handler failed.
async fn report_failure(ctx: &Context, interaction: &CommandInteraction) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(COMMAND_ERROR_MESSAGE)
            .ephemeral(true),
    );

    if interaction.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(COMMAND_ERROR_MESSAGE)
        .ephemeral(true);

    if let Err(e) = interaction.create_followup(&ctx.http, followup).await {
        tracing::error!("Failed to report command failure: {}", e);
    }
}
