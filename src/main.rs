use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

use butler_bot::config::Config;
use butler_bot::handler::Handler;
use butler_bot::AppState;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("invalid configuration");
    let token = config.discord_token.clone();
    let state = Arc::new(AppState::new(config));

    // Interactions arrive with GUILDS alone; no message content needed.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler { state })
        .await
        .expect("error creating the Discord client");

    if let Err(why) = client.start().await {
        error!(target: "main", error = %why, "client error");
    }
}
