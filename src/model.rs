//! The shared application state, constructed once at startup and handed to
//! the event handler explicitly rather than looked up from global storage.

use std::time::Instant;

use crate::config::Config;
use crate::services::backend::BackendClient;

pub struct AppState {
    pub config: Config,
    /// Stateless webhook client; safe for unlimited concurrent use.
    pub backend: BackendClient,
    /// Process start, for `/stats`.
    pub started: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = BackendClient::new(
            config.webhook_url.clone(),
            config.webhook_api_key.clone(),
        );
        Self {
            config,
            backend,
            started: Instant::now(),
        }
    }
}
