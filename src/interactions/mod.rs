//! Component interaction handling.
//!
//! `handler.rs` decodes each component's custom_id via [`ids`] and
//! delegates to the matching handler here. No session state survives
//! between the original response and a later press; everything a handler
//! needs is recovered from the correlation string itself.

pub mod feedback_handler;
pub mod ids;
pub mod tool_handler;
