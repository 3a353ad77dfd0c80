//! Renders the backend's recommendation result (and its failure
//! counterpart) into the finalized interaction response.

use serenity::builder::{CreateActionRow, CreateEmbed, CreateEmbedFooter, EditInteractionResponse};
use serenity::model::Timestamp;

use crate::interactions::ids;
use crate::services::backend::ToolRecommendation;
use crate::ui::buttons::Btn;
use crate::ui::style::{error_embed, COLOR_BUTLER, FOOTER_TEXT};

const GUIDE_URL_BASE: &str = "https://discord-butler.com/guide/";

/// Embed field text for each recommended tool: a 1-based rank with the
/// display name, and the description with a free/paid indicator.
pub fn recommendation_fields(tools: &[ToolRecommendation]) -> Vec<(String, String)> {
    tools
        .iter()
        .enumerate()
        .map(|(index, tool)| {
            let pricing = if tool.pricing_model.free_tier {
                "無料プランあり"
            } else {
                "有料"
            };
            (
                format!("{}. {}", index + 1, tool.display_name),
                format!("{}\n💰 {}", tool.description, pricing),
            )
        })
        .collect()
}

/// Action row attached to the success rendering: two feedback buttons whose
/// custom_ids carry the originating interaction id, plus a link to the full
/// guide page.
pub fn feedback_row(interaction_id: &str) -> CreateActionRow {
    let guide_url = format!("{GUIDE_URL_BASE}{interaction_id}");
    CreateActionRow::Buttons(vec![
        Btn::success(
            &ids::feedback_helpful_id(interaction_id),
            "役に立った",
            '👍',
        ),
        Btn::danger(
            &ids::feedback_nothelpful_id(interaction_id),
            "役に立たなかった",
            '👎',
        ),
        Btn::link(&guide_url, "詳細を見る", '📖'),
    ])
}

/// The finalized success rendering: title, the task restated, one field per
/// recommended tool, and the feedback action row.
pub fn success_message(
    task: &str,
    tools: &[ToolRecommendation],
    interaction_id: &str,
) -> EditInteractionResponse {
    let mut embed = CreateEmbed::new()
        .color(COLOR_BUTLER)
        .title("🤖 AIツール推薦結果")
        .description(task)
        .footer(CreateEmbedFooter::new(FOOTER_TEXT))
        .timestamp(Timestamp::now());
    for (name, value) in recommendation_fields(tools) {
        embed = embed.field(name, value, false);
    }
    EditInteractionResponse::new()
        .embed(embed)
        .components(vec![feedback_row(interaction_id)])
}

/// The finalized error rendering: clearly marked failure plus a short
/// remediation hint, with no follow-ups.
pub fn failure_message() -> EditInteractionResponse {
    let embed = error_embed(
        "❌ エラーが発生しました",
        "AIツールの推薦中にエラーが発生しました。",
    )
    .field(
        "対処法",
        "• しばらく待ってから再度お試しください\n• 問題が続く場合は管理者にお問い合わせください",
        false,
    )
    .timestamp(Timestamp::now());
    EditInteractionResponse::new().embed(embed)
}
