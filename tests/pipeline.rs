//! Sequencing tests for the acknowledge-then-resolve pipeline, run against
//! recording stubs instead of Discord and the webhook.

use async_trait::async_trait;
use serenity::builder::EditInteractionResponse;

use butler_bot::pipeline::{self, Outcome};
use butler_bot::respond::{AckState, DeliveryError, Responder};
use butler_bot::services::backend::{
    BackendError, BackendResponse, BackendResult, PricingModel, Recommender, TaskRequest,
    ToolRecommendation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Acknowledge,
    Finalize,
    FollowUp,
}

/// Records every protocol call and panics on any out-of-order use.
#[derive(Default)]
struct RecordingResponder {
    calls: Vec<Call>,
    finalized: Vec<String>,
    follow_ups: Vec<String>,
    acknowledged: bool,
    finalized_once: bool,
    fail_acknowledge: bool,
}

#[async_trait]
impl Responder for RecordingResponder {
    fn state(&self) -> AckState {
        if self.finalized_once {
            AckState::Finalized
        } else if self.acknowledged {
            AckState::Acknowledged
        } else {
            AckState::Unacknowledged
        }
    }

    async fn acknowledge(&mut self) -> Result<(), DeliveryError> {
        assert!(!self.acknowledged, "second acknowledgment issued");
        if self.fail_acknowledge {
            return Err(DeliveryError::Protocol("window expired"));
        }
        self.acknowledged = true;
        self.calls.push(Call::Acknowledge);
        Ok(())
    }

    async fn finalize(&mut self, builder: EditInteractionResponse) -> Result<(), DeliveryError> {
        assert!(self.acknowledged, "finalize before acknowledge");
        assert!(!self.finalized_once, "finalize issued twice");
        self.finalized_once = true;
        self.finalized.push(format!("{builder:?}"));
        self.calls.push(Call::Finalize);
        Ok(())
    }

    async fn follow_up(&mut self, content: String) -> Result<(), DeliveryError> {
        assert!(self.finalized_once, "follow-up before finalize");
        self.follow_ups.push(content);
        self.calls.push(Call::FollowUp);
        Ok(())
    }
}

enum Script {
    Success {
        guide: String,
        tools: Vec<ToolRecommendation>,
    },
    Malformed,
    Status(u16),
    Timeout,
}

struct StubBackend {
    script: Script,
}

#[async_trait]
impl Recommender for StubBackend {
    async fn recommend(&self, _request: &TaskRequest) -> BackendResult {
        match &self.script {
            Script::Success { guide, tools } => BackendResult::Success(BackendResponse {
                guide: guide.clone(),
                recommendations: tools.clone(),
            }),
            Script::Malformed => BackendResult::Malformed,
            Script::Status(code) => BackendResult::Failure(BackendError::Status(*code)),
            Script::Timeout => BackendResult::Failure(BackendError::Timeout),
        }
    }
}

fn request() -> TaskRequest {
    TaskRequest {
        task: "動画を編集したい".to_string(),
        user_id: "111".to_string(),
        username: "tester".to_string(),
        channel_id: "222".to_string(),
        interaction_id: "333".to_string(),
        token: "tok".to_string(),
    }
}

fn tool_a() -> ToolRecommendation {
    ToolRecommendation {
        display_name: "Tool A".to_string(),
        description: "desc".to_string(),
        pricing_model: PricingModel { free_tier: true },
    }
}

#[tokio::test]
async fn short_guide_finalizes_then_sends_one_follow_up() {
    let mut responder = RecordingResponder::default();
    let backend = StubBackend {
        script: Script::Success {
            guide: "short text".to_string(),
            tools: vec![tool_a()],
        },
    };

    let outcome = pipeline::run(&mut responder, &backend, request()).await;

    assert_eq!(outcome, Outcome::Recommended { follow_ups: 1 });
    assert_eq!(
        responder.calls,
        vec![Call::Acknowledge, Call::Finalize, Call::FollowUp]
    );
    assert_eq!(responder.follow_ups, vec!["short text".to_string()]);

    let rendering = &responder.finalized[0];
    assert!(rendering.contains("AIツール推薦結果"), "success title missing");
    assert!(rendering.contains("1. Tool A"), "ranked tool name missing");
    assert!(rendering.contains("無料プランあり"), "free-tier flag missing");
    assert!(
        rendering.contains("feedback_helpful_333"),
        "feedback button must carry the originating interaction id"
    );
}

#[tokio::test]
async fn long_guide_is_chunked_into_ordered_follow_ups() {
    let line = "x".repeat(99);
    let guide = vec![line; 45].join("\n");
    let mut responder = RecordingResponder::default();
    let backend = StubBackend {
        script: Script::Success {
            guide: guide.clone(),
            tools: vec![],
        },
    };

    let outcome = pipeline::run(&mut responder, &backend, request()).await;

    assert_eq!(outcome, Outcome::Recommended { follow_ups: 3 });
    assert_eq!(responder.follow_ups.len(), 3);
    for chunk in &responder.follow_ups {
        assert!(chunk.chars().count() <= 2000);
    }
    assert_eq!(responder.follow_ups.join("\n"), guide);
}

#[tokio::test]
async fn empty_recommendation_list_still_succeeds() {
    let mut responder = RecordingResponder::default();
    let backend = StubBackend {
        script: Script::Success {
            guide: "guide".to_string(),
            tools: vec![],
        },
    };

    let outcome = pipeline::run(&mut responder, &backend, request()).await;

    assert_eq!(outcome, Outcome::Recommended { follow_ups: 1 });
    assert!(responder.finalized[0].contains("AIツール推薦結果"));
}

#[tokio::test]
async fn non_2xx_status_reports_error_without_follow_ups() {
    let mut responder = RecordingResponder::default();
    let backend = StubBackend {
        script: Script::Status(502),
    };

    let outcome = pipeline::run(&mut responder, &backend, request()).await;

    assert_eq!(outcome, Outcome::Errored);
    assert_eq!(responder.calls, vec![Call::Acknowledge, Call::Finalize]);
    assert!(responder.follow_ups.is_empty());
    assert!(responder.finalized[0].contains("エラーが発生しました"));
    assert!(!responder.finalized[0].contains("AIツール推薦結果"));
}

#[tokio::test]
async fn malformed_response_reports_error() {
    let mut responder = RecordingResponder::default();
    let backend = StubBackend {
        script: Script::Malformed,
    };

    let outcome = pipeline::run(&mut responder, &backend, request()).await;

    assert_eq!(outcome, Outcome::Errored);
    assert_eq!(responder.calls, vec![Call::Acknowledge, Call::Finalize]);
    assert!(responder.follow_ups.is_empty());
}

#[tokio::test]
async fn backend_timeout_reports_error_promptly() {
    let mut responder = RecordingResponder::default();
    let backend = StubBackend {
        script: Script::Timeout,
    };

    let outcome = pipeline::run(&mut responder, &backend, request()).await;

    assert_eq!(outcome, Outcome::Errored);
    assert!(responder.finalized[0].contains("エラーが発生しました"));
}

#[tokio::test]
async fn lost_acknowledgment_window_abandons_the_event() {
    let mut responder = RecordingResponder {
        fail_acknowledge: true,
        ..Default::default()
    };
    let backend = StubBackend {
        script: Script::Success {
            guide: "guide".to_string(),
            tools: vec![tool_a()],
        },
    };

    let outcome = pipeline::run(&mut responder, &backend, request()).await;

    assert_eq!(outcome, Outcome::Expired);
    assert!(responder.calls.is_empty(), "no calls after a lost window");
}
