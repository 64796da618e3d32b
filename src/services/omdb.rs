//! OMDb (Open Movie Database) API client
//!
//! The secondary provider. Looked up by title (plus year and kind when known)
//! for IMDb, Rotten Tomatoes and Metacritic scores and the full plot.
//! Base URL: http://www.omdbapi.com
//!
//! OMDb answers `200 OK` even when nothing matched and signals the outcome in
//! the `Response` field, so only `"True"` produces a record.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error};

use super::http_session::HttpSession;
use crate::media::{CriticRating, MediaKind, SecondaryRecord};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";

/// OMDb API client
pub struct OmdbClient {
    session: Arc<HttpSession>,
    base_url: String,
    api_key: String,
}

/// Title lookup response from OMDb
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbTitle {
    pub response: String,
    pub title: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub ratings: Vec<OmdbRating>,
    pub plot: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbRating {
    pub source: String,
    pub value: String,
}

impl OmdbClient {
    pub fn new(session: Arc<HttpSession>, api_key: String) -> Self {
        Self {
            session,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Point the client at another API root (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Look up a title. Returns `None` on failure or when OMDb has no match.
    pub async fn fetch_secondary(
        &self,
        title: &str,
        year: Option<i32>,
        kind: Option<MediaKind>,
    ) -> Option<SecondaryRecord> {
        debug!(title = %title, year = ?year, kind = ?kind, "Searching OMDb");

        match self.try_fetch(title, year, kind).await {
            Ok(found) => found.into_record(),
            Err(e) => {
                error!(title = %title, error = %e, "Error searching OMDb");
                None
            }
        }
    }

    async fn try_fetch(
        &self,
        title: &str,
        year: Option<i32>,
        kind: Option<MediaKind>,
    ) -> Result<OmdbTitle> {
        let url = format!("{}/", self.base_url);
        let mut params: Vec<(&str, String)> = vec![
            ("apikey", self.api_key.clone()),
            ("t", title.to_string()),
            ("plot", "full".to_string()),
        ];
        if let Some(y) = year {
            params.push(("y", y.to_string()));
        }
        if let Some(k) = kind {
            params.push(("type", k.omdb_name().to_string()));
        }

        let response = self.session.get_with_query(&url, &params).await?;

        if !response.status().is_success() {
            anyhow::bail!("OMDb search failed with status: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse OMDb response")
    }
}

impl OmdbTitle {
    /// Convert to a [`SecondaryRecord`] when OMDb reported a match
    pub fn into_record(self) -> Option<SecondaryRecord> {
        if self.response != "True" {
            debug!(error = ?self.error, "OMDb reported no match");
            return None;
        }

        Some(SecondaryRecord {
            title: self.title,
            year: self.year,
            kind: self.kind.filter(|k| !k.is_empty()),
            imdb_rating: self.imdb_rating,
            ratings: self
                .ratings
                .into_iter()
                .map(|r| CriticRating {
                    source: r.source,
                    value: r.value,
                })
                .collect(),
            plot: self.plot.filter(|p| p != "N/A"),
        })
    }
}
