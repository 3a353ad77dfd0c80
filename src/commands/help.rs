//! `/help` — static usage overview built from the command catalog.

use serenity::builder::{
    CreateEmbed, CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::commands::{self, CommandError};
use crate::ui::style::{COLOR_BUTLER, FOOTER_TEXT};

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<(), CommandError> {
    let mut embed = CreateEmbed::new()
        .color(COLOR_BUTLER)
        .title("📖 Discord Butler の使い方")
        .description("やりたい作業を伝えると、ぴったりのAIツールを推薦します。まずは `/ai` からどうぞ。")
        .footer(CreateEmbedFooter::new(FOOTER_TEXT));
    for spec in commands::catalog() {
        embed = embed.field(format!("/{}", spec.name), spec.description, false);
    }

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await
        .map_err(CommandError::before_ack)
}
