//! Handles the 👍/👎 feedback buttons attached to recommendation results.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::*;
use tracing::info;

use crate::commands::CommandError;

/// Replies to a feedback button press. `interaction_id` is the id of the
/// original `/ai` interaction, recovered from the button's custom_id.
pub async fn handle(
    ctx: &Context,
    component: &ComponentInteraction,
    helpful: bool,
    interaction_id: &str,
) -> Result<(), CommandError> {
    info!(
        target: "feedback",
        user = %component.user.name,
        subject = %interaction_id,
        helpful,
        "feedback button pressed"
    );

    let content = if helpful {
        "👍 フィードバックありがとうございます！"
    } else {
        "📝 改善のため、詳細なフィードバックをお聞かせください。`/feedback`コマンドをご利用ください。"
    };

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await
        .map_err(CommandError::before_ack)
}
