//! TMDB (The Movie Database) API client
//!
//! TMDB is the primary provider: multi-type title search and per-type details
//! with credits and external ids embedded in the same call.
//! Base URL: https://api.themoviedb.org/3
//!
//! Failures never reach the caller. Non-success statuses, transport errors
//! and undecodable bodies are logged and reported as "no data".

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error, info};

use super::http_session::HttpSession;
use crate::media::{
    CastCredit, CrewCredit, MediaKind, MediaRecord, SearchCandidate, year_from_date,
};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "es-ES";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// TMDB API client
pub struct TmdbClient {
    session: Arc<HttpSession>,
    base_url: String,
    api_key: String,
    language: String,
}

/// Which search endpoint to query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Multi,
    Movie,
    Tv,
}

impl SearchScope {
    fn path(self) -> &'static str {
        match self {
            SearchScope::Multi => "multi",
            SearchScope::Movie => "movie",
            SearchScope::Tv => "tv",
        }
    }
}

/// Search response from TMDB
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbSearchResult>,
}

/// One search hit. Movies carry `title`, series carry `name`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSearchResult {
    pub id: u64,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
}

/// Movie or series details with `credits` and `external_ids` appended
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbDetails {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub runtime: Option<u32>,
    pub episode_run_time: Option<Vec<u32>>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub status: Option<String>,
    pub genres: Option<Vec<TmdbGenre>>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub credits: Option<TmdbCredits>,
    pub created_by: Option<Vec<TmdbCreator>>,
    pub external_ids: Option<TmdbExternalIds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    pub name: String,
    pub character: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCreator {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbExternalIds {
    pub imdb_id: Option<String>,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(session: Arc<HttpSession>, api_key: String) -> Self {
        Self {
            session,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Point the client at another API root (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Full poster URL (w500 size - good for chat previews)
    pub fn poster_url(path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| format!("{}/w500{}", IMAGE_BASE_URL, p))
    }

    /// Search movies and series by title
    pub async fn search_titles(&self, query: &str) -> Vec<SearchCandidate> {
        self.search_titles_of_kind(query, SearchScope::Multi).await
    }

    /// Search one endpoint by title. Returns an empty list on any failure.
    pub async fn search_titles_of_kind(&self, query: &str, scope: SearchScope) -> Vec<SearchCandidate> {
        info!(query = %query, scope = scope.path(), "Searching TMDB");

        match self.try_search(query, scope).await {
            Ok(results) => {
                let candidates: Vec<SearchCandidate> = results
                    .into_iter()
                    .filter_map(|r| r.into_candidate(scope))
                    .collect();
                debug!(count = candidates.len(), "TMDB search returned candidates");
                candidates
            }
            Err(e) => {
                error!(query = %query, error = %e, "Error searching TMDB");
                Vec::new()
            }
        }
    }

    /// Fetch full details for one title. Returns `None` on any failure.
    pub async fn fetch_details(&self, id: u64, kind: MediaKind) -> Option<MediaRecord> {
        debug!(tmdb_id = id, kind = %kind, "Fetching details from TMDB");

        match self.try_fetch_details(id, kind).await {
            Ok(details) => Some(details.into_record(kind)),
            Err(e) => {
                error!(tmdb_id = id, kind = %kind, error = %e, "Error getting TMDB details");
                None
            }
        }
    }

    async fn try_search(&self, query: &str, scope: SearchScope) -> Result<Vec<TmdbSearchResult>> {
        let url = format!("{}/search/{}", self.base_url, scope.path());
        let params = [
            ("api_key", self.api_key.as_str()),
            ("query", query),
            ("language", self.language.as_str()),
        ];

        let response = self.session.get_with_query(&url, &params).await?;

        if !response.status().is_success() {
            anyhow::bail!("TMDB search failed with status: {}", response.status());
        }

        let body: TmdbSearchResponse = response
            .json()
            .await
            .context("Failed to parse TMDB search results")?;

        Ok(body.results)
    }

    async fn try_fetch_details(&self, id: u64, kind: MediaKind) -> Result<TmdbDetails> {
        let url = format!("{}/{}/{}", self.base_url, kind.tmdb_name(), id);
        let params = [
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
            ("append_to_response", "credits,videos,external_ids"),
        ];

        let response = self.session.get_with_query(&url, &params).await?;

        if !response.status().is_success() {
            anyhow::bail!("TMDB get details failed with status: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse TMDB details")
    }
}

/// Treat empty strings the way TMDB means them: absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TmdbSearchResult {
    /// Kind of this hit. Series are tagged `tv` or carry a first-air date.
    pub fn kind(&self, scope: SearchScope) -> MediaKind {
        let has_air_date = self.first_air_date.as_deref().is_some_and(|d| !d.is_empty());
        match (self.media_type.as_deref(), scope) {
            (Some("tv"), _) | (_, SearchScope::Tv) => MediaKind::Series,
            (Some("movie"), _) | (_, SearchScope::Movie) => MediaKind::Movie,
            _ if has_air_date => MediaKind::Series,
            _ => MediaKind::Movie,
        }
    }

    /// Convert to a candidate. People in multi-search results have no title and are skipped.
    pub fn into_candidate(self, scope: SearchScope) -> Option<SearchCandidate> {
        if self.media_type.as_deref() == Some("person") {
            return None;
        }

        let kind = self.kind(scope);
        let (title, original, date) = match kind {
            MediaKind::Series => (self.name, self.original_name, self.first_air_date),
            MediaKind::Movie => (self.title, self.original_title, self.release_date),
        };

        Some(SearchCandidate {
            id: self.id,
            display_title: title.unwrap_or_default(),
            original_title: original.unwrap_or_default(),
            kind,
            release_year: date.as_deref().and_then(year_from_date),
            poster_path: non_empty(self.poster_path),
        })
    }
}

impl TmdbDetails {
    /// Flatten the provider response into a [`MediaRecord`]
    pub fn into_record(self, kind: MediaKind) -> MediaRecord {
        let (title, original_title, release_date) = match kind {
            MediaKind::Series => (self.name, self.original_name, self.first_air_date),
            MediaKind::Movie => (self.title, self.original_title, self.release_date),
        };
        let credits = self.credits.unwrap_or_default();

        MediaRecord {
            id: self.id,
            kind: Some(kind),
            title: non_empty(title),
            original_title: non_empty(original_title),
            release_date: non_empty(release_date),
            runtime: self.runtime.filter(|r| *r > 0),
            episode_run_time: self.episode_run_time.unwrap_or_default(),
            number_of_seasons: self.number_of_seasons,
            number_of_episodes: self.number_of_episodes,
            status: non_empty(self.status),
            genres: self.genres.unwrap_or_default().into_iter().map(|g| g.name).collect(),
            overview: non_empty(self.overview),
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            cast: credits
                .cast
                .into_iter()
                .map(|c| CastCredit {
                    name: c.name,
                    character: non_empty(c.character),
                })
                .collect(),
            crew: credits
                .crew
                .into_iter()
                .map(|c| CrewCredit { name: c.name, job: c.job })
                .collect(),
            creators: self
                .created_by
                .unwrap_or_default()
                .into_iter()
                .map(|c| c.name)
                .collect(),
            imdb_id: self.external_ids.and_then(|e| non_empty(e.imdb_id)),
        }
    }
}
