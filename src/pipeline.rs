//! The acknowledge-then-resolve pipeline behind `/ai`.
//!
//! Discord gives an interaction roughly three seconds to produce a first
//! response, while the backend can take up to thirty. The pipeline bridges
//! the two: it defers immediately (stopping Discord's clock), performs the
//! single slow webhook call, and then finalizes the deferred placeholder
//! with either the recommendation rendering or an error rendering. Long
//! guide text is split and delivered as ordered follow-up messages.
//!
//! Per event: exactly one acknowledgment, exactly one finalize (success or
//! error path), and follow-ups only after finalize. The pipeline is generic
//! over its two collaborators so that sequencing is testable without
//! Discord.

use tracing::{error, info, warn};

use crate::respond::Responder;
use crate::services::backend::{BackendResult, Recommender, TaskRequest};
use crate::ui::recommend;
use crate::util::split_message;

/// Discord's single-message content limit, and therefore the follow-up
/// chunk granularity.
pub const MESSAGE_CHUNK_LEN: usize = 2000;

/// Terminal state of one pipeline execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The acknowledgment window was lost; nothing could be sent.
    Expired,
    /// Recommendation delivered, with the number of guide follow-ups sent.
    Recommended { follow_ups: usize },
    /// Backend failure, reported to the user as the error rendering.
    Errored,
    /// Acknowledged but a later platform delivery call failed; the user may
    /// be left with a partial response. Logged, nothing more to do.
    Lost,
}

pub async fn run<R>(responder: &mut R, backend: &dyn Recommender, request: TaskRequest) -> Outcome
where
    R: Responder,
{
    // Must happen before any other work: once the window lapses the event
    // is unrecoverable.
    if let Err(e) = responder.acknowledge().await {
        warn!(
            target: "pipeline",
            id = %request.interaction_id,
            error = %e,
            "acknowledgment window lost; abandoning event"
        );
        return Outcome::Expired;
    }

    info!(
        target: "pipeline",
        id = %request.interaction_id,
        user = %request.username,
        task = %request.task,
        "forwarding task to backend"
    );

    let response = match backend.recommend(&request).await {
        BackendResult::Success(response) => response,
        BackendResult::Malformed => {
            warn!(target: "pipeline", id = %request.interaction_id, "backend response failed shape validation");
            return report_failure(responder, &request).await;
        }
        BackendResult::Failure(e) => {
            warn!(target: "pipeline", id = %request.interaction_id, error = %e, "backend call failed");
            return report_failure(responder, &request).await;
        }
    };

    let message = recommend::success_message(
        &request.task,
        &response.recommendations,
        &request.interaction_id,
    );
    if let Err(e) = responder.finalize(message).await {
        error!(target: "pipeline", id = %request.interaction_id, error = %e, "finalize failed");
        return Outcome::Lost;
    }

    // The guide goes out as separate messages so the embed edit above never
    // brushes against the content limit.
    let mut delivered = 0;
    for chunk in split_message(&response.guide, MESSAGE_CHUNK_LEN) {
        if let Err(e) = responder.follow_up(chunk).await {
            error!(
                target: "pipeline",
                id = %request.interaction_id,
                delivered,
                error = %e,
                "guide follow-up failed"
            );
            return Outcome::Lost;
        }
        delivered += 1;
    }

    Outcome::Recommended {
        follow_ups: delivered,
    }
}

/// Error path: finalize the placeholder with the error rendering. No
/// follow-ups, no retries.
async fn report_failure<R>(responder: &mut R, request: &TaskRequest) -> Outcome
where
    R: Responder,
{
    if let Err(e) = responder.finalize(recommend::failure_message()).await {
        error!(target: "pipeline", id = %request.interaction_id, error = %e, "error rendering lost");
        return Outcome::Lost;
    }
    Outcome::Errored
}
