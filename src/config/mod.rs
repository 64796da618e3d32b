//! Application configuration management

use std::env;

use anyhow::{Context, Result};

use crate::app_mode::RunMode;
use crate::services::{omdb, tmdb};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub telegram_token: String,

    /// TMDB API key (primary provider)
    pub tmdb_api_key: String,

    /// OMDb API key (secondary provider)
    pub omdb_api_key: String,

    /// TMDB API root
    pub tmdb_base_url: String,

    /// OMDb API root
    pub omdb_base_url: String,

    /// Locale sent to TMDB for titles and synopses
    pub tmdb_language: String,

    /// Default run mode when no CLI flag overrides it
    pub run_mode: RunMode,

    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// The three credentials are required; an empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{} is required", key))
        };

        Ok(Self {
            telegram_token: required("TELEGRAM_TOKEN")?,

            tmdb_api_key: required("TMDB_API_KEY")?,

            omdb_api_key: required("OMDB_API_KEY")?,

            tmdb_base_url: lookup("TMDB_BASE_URL")
                .unwrap_or_else(|| tmdb::DEFAULT_BASE_URL.to_string()),

            omdb_base_url: lookup("OMDB_BASE_URL")
                .unwrap_or_else(|| omdb::DEFAULT_BASE_URL.to_string()),

            tmdb_language: lookup("TMDB_LANGUAGE")
                .unwrap_or_else(|| tmdb::DEFAULT_LANGUAGE.to_string()),

            run_mode: lookup("RUN_MODE")
                .and_then(|v| RunMode::from_arg(&v))
                .unwrap_or(RunMode::Bot),

            log_json: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}
