//! `/profile view|update` — echoes the declared skill level back to the
//! user. The level travels with each backend request; nothing is stored in
//! this process.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{CommandDataOptionValue, CommandInteraction};
use serenity::prelude::*;
use tracing::info;

use crate::commands::CommandError;

fn skill_label(value: &str) -> &str {
    match value {
        "beginner" => "初心者",
        "intermediate" => "中級者",
        "advanced" => "上級者",
        "expert" => "エキスパート",
        other => other,
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) -> Result<(), CommandError> {
    let content = match interaction.data.options.first() {
        Some(sub) if sub.name == "update" => {
            let skill = match &sub.value {
                CommandDataOptionValue::SubCommand(nested) => nested
                    .iter()
                    .find(|opt| opt.name == "skill_level")
                    .and_then(|opt| opt.value.as_str())
                    .unwrap_or_default(),
                _ => "",
            };
            info!(
                target: "profile",
                user = %interaction.user.name,
                skill = %skill,
                "skill level updated"
            );
            format!(
                "✅ スキルレベルを「{}」に更新しました。今後の推薦に反映されます。",
                skill_label(skill)
            )
        }
        _ => format!(
            "👤 {} さんのプロファイル\n推薦内容はスキルレベルに合わせて調整されます。変更は `/profile update` からどうぞ。",
            interaction.user.name
        ),
    };

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
