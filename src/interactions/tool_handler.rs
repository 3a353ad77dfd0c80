//! Handles tool selection components: the per-tool buttons and the
//! multi-select comparison menu.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{ComponentInteraction, ComponentInteractionDataKind};
use serenity::prelude::*;
use tracing::info;

use crate::commands::CommandError;

pub async fn handle_button(
    ctx: &Context,
    component: &ComponentInteraction,
    tool_id: &str,
) -> Result<(), CommandError> {
    info!(
        target: "tools",
        user = %component.user.name,
        tool = %tool_id,
        "tool selected"
    );

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("✅ ツールを選択しました。詳細な使い方ガイドを生成中です...")
                    .ephemeral(true),
            ),
        )
        .await
        .map_err(CommandError::before_ack)
}

pub async fn handle_menu(
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), CommandError> {
    let selected = match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.len(),
        _ => 0,
    };

    info!(
        target: "tools",
        user = %component.user.name,
        selected,
        "tool comparison requested"
    );

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(format!(
                        "✅ {selected}個のツールを選択しました。比較情報を生成中です..."
                    ))
                    .ephemeral(true),
            ),
        )
        .await
        .map_err(CommandError::before_ack)
}
