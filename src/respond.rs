//! The acknowledgment handle for a single interaction.
//!
//! Discord gives each interaction one deferred acknowledgment, one edit of
//! the resulting placeholder, and any number of follow-up messages after
//! that. `InteractionResponder` owns that protocol for one event and tracks
//! where in it the event currently is, so callers can query the state
//! instead of inferring it from which calls happened to succeed.

use async_trait::async_trait;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use serenity::http::Http;
use serenity::model::application::CommandInteraction;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("platform call failed: {0}")]
    Http(#[from] serenity::Error),
    /// The caller tried to use the handle out of order (e.g. a follow-up
    /// before finalize). Issuing such a call against Discord would itself
    /// be a protocol error, so it is rejected locally.
    #[error("response protocol violation: {0}")]
    Protocol(&'static str),
}

/// Where an event sits in the defer / edit / follow-up protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckState {
    Unacknowledged,
    Acknowledged,
    Finalized,
}

/// One-shot right to respond to an interaction: acknowledge exactly once,
/// finalize exactly once, then zero or more follow-ups.
#[async_trait]
pub trait Responder: Send {
    fn state(&self) -> AckState;

    /// Issues the deferred acknowledgment. Must be the very first call;
    /// failure means the 3 second response window was lost and the event
    /// is unrecoverable.
    async fn acknowledge(&mut self) -> Result<(), DeliveryError>;

    /// Edits the deferred placeholder with the final rendering.
    async fn finalize(&mut self, builder: EditInteractionResponse) -> Result<(), DeliveryError>;

    /// Appends one plain-text delivery unit after finalize.
    async fn follow_up(&mut self, content: String) -> Result<(), DeliveryError>;
}

/// Serenity-backed responder for a slash command interaction.
pub struct InteractionResponder<'a> {
    http: &'a Http,
    interaction: &'a CommandInteraction,
    state: AckState,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(http: &'a Http, interaction: &'a CommandInteraction) -> Self {
        Self {
            http,
            interaction,
            state: AckState::Unacknowledged,
        }
    }
}

#[async_trait]
impl Responder for InteractionResponder<'_> {
    fn state(&self) -> AckState {
        self.state
    }

    async fn acknowledge(&mut self) -> Result<(), DeliveryError> {
        if self.state != AckState::Unacknowledged {
            return Err(DeliveryError::Protocol("acknowledge called twice"));
        }
        self.interaction
            .create_response(
                self.http,
                CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
            )
            .await?;
        self.state = AckState::Acknowledged;
        Ok(())
    }

    async fn finalize(&mut self, builder: EditInteractionResponse) -> Result<(), DeliveryError> {
        match self.state {
            AckState::Unacknowledged => {
                return Err(DeliveryError::Protocol("finalize before acknowledge"));
            }
            AckState::Finalized => return Err(DeliveryError::Protocol("finalize called twice")),
            AckState::Acknowledged => {}
        }
        self.interaction.edit_response(self.http, builder).await?;
        self.state = AckState::Finalized;
        Ok(())
    }

    async fn follow_up(&mut self, content: String) -> Result<(), DeliveryError> {
        if self.state != AckState::Finalized {
            return Err(DeliveryError::Protocol("follow-up before finalize"));
        }
        self.interaction
            .create_followup(
                self.http,
                CreateInteractionResponseFollowup::new().content(content),
            )
            .await?;
        Ok(())
    }
}
