//! Environment-backed configuration, validated once at startup.

use std::env;

use thiserror::Error;

const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/discord-butler";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// n8n webhook receiving `/ai` task requests.
    pub webhook_url: String,
    /// Optional bearer credential for the webhook.
    pub webhook_api_key: Option<String>,
    /// Whether unmatched component custom_ids get an ephemeral notice
    /// instead of being silently ignored.
    pub unknown_component_notice: bool,
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

fn flag(name: &str) -> bool {
    env::var(name)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            discord_token: require("DISCORD_BOT_TOKEN")?,
            webhook_url: env::var("N8N_WEBHOOK_URL")
                .ok()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string()),
            webhook_api_key: env::var("N8N_API_KEY").ok().filter(|value| !value.is_empty()),
            unknown_component_notice: flag("UNKNOWN_COMPONENT_NOTICE"),
        })
    }
}
