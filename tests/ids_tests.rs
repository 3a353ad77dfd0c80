use butler_bot::interactions::ids::{
    feedback_helpful_id, feedback_nothelpful_id, ComponentAction, SELECT_TOOL_PREFIX,
    TOOL_SELECTION_MENU,
};

#[test]
fn decode_feedback_helpful_roundtrip() {
    let id = feedback_helpful_id("1234567890");
    assert_eq!(
        ComponentAction::decode(&id),
        ComponentAction::FeedbackHelpful {
            interaction_id: "1234567890".to_string()
        }
    );
}

#[test]
fn decode_feedback_nothelpful_roundtrip() {
    let id = feedback_nothelpful_id("42");
    assert_eq!(
        ComponentAction::decode(&id),
        ComponentAction::FeedbackNotHelpful {
            interaction_id: "42".to_string()
        }
    );
}

#[test]
fn decode_select_tool() {
    let id = format!("{SELECT_TOOL_PREFIX}chatgpt");
    assert_eq!(
        ComponentAction::decode(&id),
        ComponentAction::SelectTool {
            tool_id: "chatgpt".to_string()
        }
    );
}

#[test]
fn decode_tool_selection_exact_match_only() {
    assert_eq!(
        ComponentAction::decode(TOOL_SELECTION_MENU),
        ComponentAction::ToolSelection
    );
    assert_eq!(
        ComponentAction::decode("tool_selection_extra"),
        ComponentAction::Unrecognized
    );
}

#[test]
fn malformed_ids_decode_to_unrecognized() {
    for id in [
        "",
        "feedback_",
        "feedback_helpful_",
        "feedback_unknown_123",
        "select_tool_",
        "nav_saga",
        "completely arbitrary",
    ] {
        assert_eq!(
            ComponentAction::decode(id),
            ComponentAction::Unrecognized,
            "id={id:?}"
        );
    }
}
