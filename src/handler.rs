//! The event router: classifies every inbound interaction and dispatches it
//! to the matching handler, guaranteeing that an error escaping a handler
//! still reaches the user as a visible message rather than a silent drop.

use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, ComponentInteraction, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};
use tracing::{debug, error, info};

use crate::commands::{self, CommandError};
use crate::interactions::ids::ComponentAction;
use crate::interactions::{feedback_handler, tool_handler};
use crate::model::AppState;

const GENERIC_ERROR: &str =
    "❌ コマンドの実行中にエラーが発生しました。しばらく待ってからもう一度お試しください。";
const UNKNOWN_COMMAND: &str = "❓ 不明なコマンドです。`/help`で使い方を確認してください。";
const UNKNOWN_COMPONENT: &str = "❓ このボタンは現在利用できません。";

pub struct Handler {
    pub state: Arc<AppState>,
}

impl Handler {
    async fn dispatch_command(&self, ctx: &Context, command: &CommandInteraction) {
        let name = command.data.name.as_str();
        info!(target: "handler", command = name, user = %command.user.name, "command received");

        let result = match name {
            "ai" => commands::ai::run_slash(ctx, command, &self.state).await,
            "help" => commands::help::run_slash(ctx, command).await,
            "feedback" => commands::feedback::run_slash(ctx, command).await,
            "history" => commands::history::run_slash(ctx, command).await,
            "profile" => commands::profile::run_slash(ctx, command).await,
            "stats" => commands::stats::run_slash(ctx, command, &self.state).await,
            _ => {
                command
                    .create_response(
                        &ctx.http,
                        CreateInteractionResponse::Message(
                            CreateInteractionResponseMessage::new()
                                .content(UNKNOWN_COMMAND)
                                .ephemeral(true),
                        ),
                    )
                    .await
                    .map_err(CommandError::before_ack)
            }
        };

        if let Err(e) = result {
            error!(target: "handler", command = name, error = %e.source, "command handler failed");
            report_command_failure(ctx, command, &e).await;
        }
    }

    async fn dispatch_component(&self, ctx: &Context, component: &ComponentInteraction) {
        let custom_id = component.data.custom_id.as_str();
        let result = match ComponentAction::decode(custom_id) {
            ComponentAction::FeedbackHelpful { interaction_id } => {
                feedback_handler::handle(ctx, component, true, &interaction_id).await
            }
            ComponentAction::FeedbackNotHelpful { interaction_id } => {
                feedback_handler::handle(ctx, component, false, &interaction_id).await
            }
            ComponentAction::SelectTool { tool_id } => {
                tool_handler::handle_button(ctx, component, &tool_id).await
            }
            ComponentAction::ToolSelection => tool_handler::handle_menu(ctx, component).await,
            ComponentAction::Unrecognized => {
                // Forward-compatibility branch: components registered by a
                // newer deployment may reach an older process.
                if self.state.config.unknown_component_notice {
                    component
                        .create_response(
                            &ctx.http,
                            CreateInteractionResponse::Message(
                                CreateInteractionResponseMessage::new()
                                    .content(UNKNOWN_COMPONENT)
                                    .ephemeral(true),
                            ),
                        )
                        .await
                        .map_err(CommandError::before_ack)
                } else {
                    debug!(target: "handler", custom_id, "unrecognized component ignored");
                    Ok(())
                }
            }
        };

        if let Err(e) = result {
            error!(target: "handler", custom_id, error = %e.source, "component handler failed");
            report_component_failure(ctx, component).await;
        }
    }
}

/// Best-effort error message for a failed command handler. Whether the
/// event was already acknowledged decides which delivery path is still
/// legal: editing the deferred placeholder, or replying fresh. A failure
/// here is logged and dropped — there is nothing left to fall back to.
async fn report_command_failure(ctx: &Context, command: &CommandInteraction, error: &CommandError) {
    let outcome = if error.acknowledged {
        command
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().content(GENERIC_ERROR),
            )
            .await
            .map(|_| ())
    } else {
        command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(GENERIC_ERROR)
                        .ephemeral(true),
                ),
            )
            .await
    };
    if let Err(e) = outcome {
        error!(target: "handler", error = %e, "failed to report command failure");
    }
}

async fn report_component_failure(ctx: &Context, component: &ComponentInteraction) {
    if let Err(e) = component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(GENERIC_ERROR)
                    .ephemeral(true),
            ),
        )
        .await
    {
        error!(target: "handler", error = %e, "failed to report component failure");
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => self.dispatch_command(&ctx, &command).await,
            Interaction::Component(component) => self.dispatch_component(&ctx, &component).await,
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target: "handler", user = %ready.user.name, "connected and ready");

        // Full-replacement upsert; a failure leaves previously registered
        // commands usable, so it is logged rather than fatal.
        match serenity::model::application::Command::set_global_commands(
            &ctx.http,
            commands::describe(),
        )
        .await
        {
            Ok(registered) => {
                info!(target: "registry", count = registered.len(), "registered application commands");
            }
            Err(e) => {
                error!(target: "registry", error = %e, "command registration failed; stale commands remain usable");
            }
        }
    }
}
