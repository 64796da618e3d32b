//! Title lookup service
//!
//! Ties the providers, the match resolver and the views together:
//! query text → best candidate, and (candidate id, kind, view) → rendered text.
//! Both the chat handlers and the `--lookup` CLI mode go through here.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::matcher;
use super::omdb::OmdbClient;
use super::tmdb::TmdbClient;
use crate::media::views;
use crate::media::{MediaKind, MediaRecord, SearchCandidate, SecondaryRecord, ViewKind};

/// Lookup failures that are shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The primary provider returned no candidates
    #[error("no results for '{query}'")]
    NoMatch { query: String },

    /// The detail request failed or the title no longer exists
    #[error("details unavailable for {kind} {id}")]
    DetailsUnavailable { id: u64, kind: MediaKind },
}

/// Search, resolve and render titles
pub struct LookupService {
    tmdb: Arc<TmdbClient>,
    omdb: Arc<OmdbClient>,
}

impl LookupService {
    pub fn new(tmdb: Arc<TmdbClient>, omdb: Arc<OmdbClient>) -> Self {
        Self { tmdb, omdb }
    }

    /// Search the primary provider and pick the best candidate for the query
    pub async fn find_best_match(&self, query: &str) -> Result<SearchCandidate, LookupError> {
        let candidates = self.tmdb.search_titles(query).await;

        let best = matcher::resolve(query, &candidates).ok_or_else(|| LookupError::NoMatch {
            query: query.to_string(),
        })?;

        info!(
            query = %query,
            tmdb_id = best.id,
            title = %best.display_title,
            candidates = candidates.len(),
            "Resolved title query"
        );
        Ok(best.clone())
    }

    /// Fetch the detail record for a resolved candidate
    pub async fn details(&self, id: u64, kind: MediaKind) -> Result<MediaRecord, LookupError> {
        self.tmdb
            .fetch_details(id, kind)
            .await
            .ok_or(LookupError::DetailsUnavailable { id, kind })
    }

    /// Secondary-provider data for a record, looked up by title, year and kind
    pub async fn secondary_for(&self, record: &MediaRecord) -> Option<SecondaryRecord> {
        // OMDb indexes original-language titles; the localized one is a fallback
        let Some(title) = record.original_title.as_deref().or(record.title.as_deref()) else {
            warn!(tmdb_id = record.id, "Record has no title, skipping OMDb lookup");
            return None;
        };

        self.omdb.fetch_secondary(title, record.year(), record.kind).await
    }

    /// Fetch what a view needs and render it.
    ///
    /// Only [`ViewKind::Ratings`] consults the secondary provider.
    pub async fn render_view(
        &self,
        view: ViewKind,
        id: u64,
        kind: MediaKind,
        current_year: i32,
    ) -> Result<String, LookupError> {
        let record = self.details(id, kind).await?;

        let secondary = match view {
            ViewKind::Ratings => self.secondary_for(&record).await,
            _ => None,
        };
        debug!(
            tmdb_id = id,
            view = view.action(),
            has_secondary = secondary.is_some(),
            "Rendering view"
        );

        Ok(views::render(view, &record, secondary.as_ref(), current_year))
    }
}
