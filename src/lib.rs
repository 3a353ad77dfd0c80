// Library entry so integration tests and the binary can reference internal
// modules.
pub mod commands;
pub mod config;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod pipeline;
pub mod respond;
pub mod services;
pub mod ui;
pub mod util;

pub use model::AppState;
