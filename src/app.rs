//! Application state shared by the chat handlers and the lookup CLI.

use std::sync::Arc;

use chrono::Datelike;

use crate::config::Config;
use crate::services::{HttpSession, LookupService, OmdbClient, TmdbClient};

/// Shared, read-only state handed to every update handler.
pub struct AppState {
    pub config: Arc<Config>,
    /// Connection pool behind both provider clients
    pub http: Arc<HttpSession>,
    pub lookup: LookupService,
}

impl AppState {
    /// Wire the provider clients to one HTTP session.
    pub fn new(config: Arc<Config>) -> Self {
        let http = HttpSession::new("providers");

        let tmdb = TmdbClient::new(http.clone(), config.tmdb_api_key.clone())
            .with_base_url(config.tmdb_base_url.clone())
            .with_language(config.tmdb_language.clone());
        let omdb = OmdbClient::new(http.clone(), config.omdb_api_key.clone())
            .with_base_url(config.omdb_base_url.clone());

        Self {
            config,
            http,
            lookup: LookupService::new(Arc::new(tmdb), Arc::new(omdb)),
        }
    }

    /// Release process-scoped resources.
    pub fn shutdown(&self) {
        self.http.release();
    }
}

/// Year used by the "likely still streaming" note
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
