//! Central UI style constants and helpers.

use serenity::builder::CreateEmbed;

pub const COLOR_BUTLER: u32 = 0x5865F2; // Discord blurple
pub const COLOR_ALERT: u32 = 0xED4245; // Red

pub const FOOTER_TEXT: &str = "Discord Butler";

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
