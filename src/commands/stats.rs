//! `/stats` — process summary for administrators. Visibility is gated
//! declaratively via the registered default member permissions.

use serenity::builder::{
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::commands::{self, CommandError};
use crate::model::AppState;
use crate::ui::style::COLOR_BUTLER;

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{hours}時間{minutes}分")
}

pub async fn run_slash(
    ctx: &Context,
    interaction: &CommandInteraction,
    state: &AppState,
) -> Result<(), CommandError> {
    let uptime = state.started.elapsed().as_secs();
    let embed = CreateEmbed::new()
        .color(COLOR_BUTLER)
        .title("📊 システム統計")
        .field("バージョン", env!("CARGO_PKG_VERSION"), true)
        .field("稼働時間", format_uptime(uptime), true)
        .field(
            "登録コマンド数",
            commands::catalog().len().to_string(),
            true,
        );

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
