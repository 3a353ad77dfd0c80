//! Client for the n8n automation webhook that performs the actual
//! task-to-tool-recommendation reasoning.
//!
//! The webhook is opaque beyond its request/response contract: one POST per
//! `/ai` invocation, a 30 second local timeout, and no retries — the backend
//! may have side effects on a partial failure, so a single failure is
//! reported to the user instead of being replayed.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the webhook needs about one `/ai` invocation.
#[derive(Debug, Clone)]
pub struct TaskRequest {
    pub task: String,
    pub user_id: String,
    pub username: String,
    pub channel_id: String,
    pub interaction_id: String,
    pub token: String,
}

#[derive(Serialize)]
struct WebhookEnvelope<'a> {
    #[serde(rename = "type")]
    kind: u8,
    data: WebhookData<'a>,
}

#[derive(Serialize)]
struct WebhookData<'a> {
    user: WebhookUser<'a>,
    options: [WebhookOption<'a>; 1],
    channel_id: &'a str,
    id: &'a str,
    token: &'a str,
}

#[derive(Serialize)]
struct WebhookUser<'a> {
    id: &'a str,
    username: &'a str,
}

#[derive(Serialize)]
struct WebhookOption<'a> {
    name: &'a str,
    value: &'a str,
}

/// Successful webhook payload: a long-form guide plus an ordered list of
/// recommended tools. An absent recommendation list means an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendResponse {
    pub guide: String,
    #[serde(default)]
    pub recommendations: Vec<ToolRecommendation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolRecommendation {
    pub display_name: String,
    pub description: String,
    pub pricing_model: PricingModel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingModel {
    pub free_tier: bool,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request timed out")]
    Timeout,
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend returned status {0}")]
    Status(u16),
}

/// Outcome of one webhook call, produced by a single validation step right
/// after the response arrives.
#[derive(Debug)]
pub enum BackendResult {
    Success(BackendResponse),
    /// 2xx response whose body does not match the expected shape.
    Malformed,
    Failure(BackendError),
}

impl BackendResult {
    /// Validates a 2xx response body. A body missing the `guide` field, or
    /// carrying an empty guide, is `Malformed`.
    pub fn from_body(body: &[u8]) -> BackendResult {
        match serde_json::from_slice::<BackendResponse>(body) {
            Ok(response) if !response.guide.is_empty() => BackendResult::Success(response),
            Ok(_) => BackendResult::Malformed,
            Err(_) => BackendResult::Malformed,
        }
    }
}

/// Seam between the pipeline and the webhook, so the pipeline's sequencing
/// can be exercised against a stub backend.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, request: &TaskRequest) -> BackendResult;
}

pub struct BackendClient {
    http: reqwest::Client,
    webhook_url: String,
    api_key: Option<String>,
}

impl BackendClient {
    pub fn new(webhook_url: String, api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(BACKEND_TIMEOUT)
            .build()
            .expect("failed to build the backend HTTP client");
        Self {
            http,
            webhook_url,
            api_key,
        }
    }
}

#[async_trait]
impl Recommender for BackendClient {
    async fn recommend(&self, request: &TaskRequest) -> BackendResult {
        let envelope = WebhookEnvelope {
            kind: 2,
            data: WebhookData {
                user: WebhookUser {
                    id: &request.user_id,
                    username: &request.username,
                },
                options: [WebhookOption {
                    name: "task",
                    value: &request.task,
                }],
                channel_id: &request.channel_id,
                id: &request.interaction_id,
                token: &request.token,
            },
        };

        let mut call = self.http.post(&self.webhook_url).json(&envelope);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        let response = match call.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return BackendResult::Failure(BackendError::Timeout),
            Err(e) => return BackendResult::Failure(BackendError::Unreachable(e.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            return BackendResult::Failure(BackendError::Status(status.as_u16()));
        }

        match response.bytes().await {
            Ok(body) => BackendResult::from_body(&body),
            Err(e) if e.is_timeout() => BackendResult::Failure(BackendError::Timeout),
            Err(e) => BackendResult::Failure(BackendError::Unreachable(e.to_string())),
        }
    }
}
