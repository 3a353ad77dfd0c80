//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and keeps the encode/decode pair for
//! correlation strings in one place.

/// Family prefix shared by both feedback buttons.
pub const FEEDBACK_PREFIX: &str = "feedback_";
pub const FEEDBACK_HELPFUL_PREFIX: &str = "feedback_helpful_"; // followed by interaction id
pub const FEEDBACK_NOTHELPFUL_PREFIX: &str = "feedback_nothelpful_"; // followed by interaction id

pub const SELECT_TOOL_PREFIX: &str = "select_tool_"; // followed by tool id
pub const TOOL_SELECTION_MENU: &str = "tool_selection";

/// Builds the custom_id for the "helpful" feedback button, carrying the
/// originating interaction id so a later press can be correlated without
/// any server-side session state.
pub fn feedback_helpful_id(interaction_id: &str) -> String {
    format!("{FEEDBACK_HELPFUL_PREFIX}{interaction_id}")
}

pub fn feedback_nothelpful_id(interaction_id: &str) -> String {
    format!("{FEEDBACK_NOTHELPFUL_PREFIX}{interaction_id}")
}

/// Intent recovered from a component's correlation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    FeedbackHelpful { interaction_id: String },
    FeedbackNotHelpful { interaction_id: String },
    SelectTool { tool_id: String },
    ToolSelection,
    /// Anything that matches no known pattern, including malformed ids.
    Unrecognized,
}

impl ComponentAction {
    /// Total decoder: malformed or unknown ids map to `Unrecognized`, never
    /// an error, so a stray component can at worst reach the router's
    /// fallback branch.
    pub fn decode(custom_id: &str) -> ComponentAction {
        if let Some(id) = custom_id.strip_prefix(FEEDBACK_HELPFUL_PREFIX) {
            if !id.is_empty() {
                return ComponentAction::FeedbackHelpful {
                    interaction_id: id.to_string(),
                };
            }
        }
        if let Some(id) = custom_id.strip_prefix(FEEDBACK_NOTHELPFUL_PREFIX) {
            if !id.is_empty() {
                return ComponentAction::FeedbackNotHelpful {
                    interaction_id: id.to_string(),
                };
            }
        }
        if let Some(id) = custom_id.strip_prefix(SELECT_TOOL_PREFIX) {
            if !id.is_empty() {
                return ComponentAction::SelectTool {
                    tool_id: id.to_string(),
                };
            }
        }
        if custom_id == TOOL_SELECTION_MENU {
            return ComponentAction::ToolSelection;
        }
        ComponentAction::Unrecognized
    }
}
