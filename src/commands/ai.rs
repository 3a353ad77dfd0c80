//! `/ai` — forwards the user's task to the automation backend and renders
//! the recommendation it sends back.

use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

use crate::commands::CommandError;
use crate::model::AppState;
use crate::pipeline;
use crate::respond::InteractionResponder;
use crate::services::backend::TaskRequest;

pub async fn run_slash(
    ctx: &Context,
    interaction: &CommandInteraction,
    state: &AppState,
) -> Result<(), CommandError> {
    // `task` is required and length-capped by the registered schema.
    let task = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "task")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default()
        .to_string();

    let request = TaskRequest {
        task,
        user_id: interaction.user.id.to_string(),
        username: interaction.user.name.clone(),
        channel_id: interaction.channel_id.to_string(),
        interaction_id: interaction.id.to_string(),
        token: interaction.token.clone(),
    };

    let mut responder = InteractionResponder::new(&ctx.http, interaction);
    pipeline::run(&mut responder, &state.backend, request).await;
    Ok(())
}
