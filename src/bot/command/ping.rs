//! `/ping` - liveness check for the bot itself.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::error::AppError;

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Replies with Pong!")
}

pub async fn run(ctx: &Context, interaction: &CommandInteraction) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content("Pong! 🏓"),
            ),
        )
        .await?;

    Ok(())
}
