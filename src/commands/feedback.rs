//! `/feedback` — acknowledges a tool rating. Ratings are not stored here;
//! recording them is the backend's concern.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;
use tracing::info;

use crate::commands::CommandError;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<(), CommandError> {
    let tool = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "tool")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();
    let rating = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "rating")
        .and_then(|opt| opt.value.as_i64())
        .unwrap_or_default();
    let comment = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "comment")
        .and_then(|opt| opt.value.as_str());

    info!(
        target: "feedback",
        user = %interaction.user.name,
        tool = %tool,
        rating,
        has_comment = comment.is_some(),
        "feedback received"
    );

    let mut content = format!("⭐ 「{tool}」への評価（{rating}/5）を受け付けました。ありがとうございます！");
    if comment.is_some() {
        content.push_str("\n📝 コメントも合わせて送信しました。");
    }

    interaction
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
