//! `/history` — recommendation history lives with the backend, not in this
//! process; the command points the user at the guide pages instead.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::commands::CommandError;

const DEFAULT_LIMIT: i64 = 5;

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<(), CommandError> {
    let limit = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "limit")
        .and_then(|opt| opt.value.as_i64())
        .unwrap_or(DEFAULT_LIMIT);

    let content = format!(
        "📜 直近{limit}件の推薦履歴は、各推薦メッセージの「詳細を見る」リンクから確認できます。\n新しい推薦は `/ai` でいつでも受けられます。"
    );

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
