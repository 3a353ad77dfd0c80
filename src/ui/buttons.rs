//! Central button construction helpers ensuring consistent style.

use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

pub struct Btn;

impl Btn {
    pub fn success(id: &str, label: &str, emoji: char) -> CreateButton {
        CreateButton::new(id)
            .label(label)
            .emoji(emoji)
            .style(ButtonStyle::Success)
    }

    pub fn danger(id: &str, label: &str, emoji: char) -> CreateButton {
        CreateButton::new(id)
            .label(label)
            .emoji(emoji)
            .style(ButtonStyle::Danger)
    }

    pub fn link(url: &str, label: &str, emoji: char) -> CreateButton {
        CreateButton::new_link(url).label(label).emoji(emoji)
    }
}
