//! Shape validation of webhook response bodies.

use butler_bot::services::backend::BackendResult;

#[test]
fn full_response_parses() {
    let body = br#"{
        "guide": "short text",
        "recommendations": [
            {
                "display_name": "Tool A",
                "description": "desc",
                "pricing_model": {"free_tier": true}
            }
        ]
    }"#;
    match BackendResult::from_body(body) {
        BackendResult::Success(response) => {
            assert_eq!(response.guide, "short text");
            assert_eq!(response.recommendations.len(), 1);
            assert_eq!(response.recommendations[0].display_name, "Tool A");
            assert!(response.recommendations[0].pricing_model.free_tier);
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn absent_recommendations_default_to_empty() {
    let body = br#"{"guide": "g"}"#;
    match BackendResult::from_body(body) {
        BackendResult::Success(response) => assert!(response.recommendations.is_empty()),
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn missing_guide_is_malformed() {
    let body = br#"{"recommendations": []}"#;
    assert!(matches!(
        BackendResult::from_body(body),
        BackendResult::Malformed
    ));
}

#[test]
fn empty_guide_is_malformed() {
    let body = br#"{"guide": ""}"#;
    assert!(matches!(
        BackendResult::from_body(body),
        BackendResult::Malformed
    ));
}

#[test]
fn non_json_body_is_malformed() {
    assert!(matches!(
        BackendResult::from_body(b"<html>502 Bad Gateway</html>"),
        BackendResult::Malformed
    ));
}
