//! Title lookup data model
//!
//! Provider responses are translated into these records at the client boundary.
//! Every optional field has a defined fallback at its point of use, so nothing
//! downstream needs to know about the provider JSON shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Movie or series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// Path segment and callback token used by TMDB (`movie` / `tv`)
    pub fn tmdb_name(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        }
    }

    /// `type` parameter used by OMDb (`movie` / `series`)
    pub fn omdb_name(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
        }
    }

    pub fn from_tmdb(value: &str) -> Option<Self> {
        match value {
            "movie" => Some(MediaKind::Movie),
            "tv" => Some(MediaKind::Series),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tmdb_name())
    }
}

/// One entry of a primary-provider search, not yet detailed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub id: u64,
    pub display_title: String,
    /// Empty when the provider sent no original-language title
    pub original_title: String,
    pub kind: MediaKind,
    pub release_year: Option<i32>,
    pub poster_path: Option<String>,
}

/// Full detail record for one title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: u64,
    pub kind: Option<MediaKind>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    /// `release_date` for movies, `first_air_date` for series
    pub release_date: Option<String>,
    /// Total minutes (movies)
    pub runtime: Option<u32>,
    /// Per-episode minutes (series)
    pub episode_run_time: Vec<u32>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub status: Option<String>,
    pub genres: Vec<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub cast: Vec<CastCredit>,
    pub crew: Vec<CrewCredit>,
    pub creators: Vec<String>,
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastCredit {
    pub name: String,
    pub character: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewCredit {
    pub name: String,
    pub job: String,
}

impl MediaRecord {
    pub fn is_series(&self) -> bool {
        self.kind == Some(MediaKind::Series)
    }

    /// Four-digit year of the release / first-air date
    pub fn year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(year_from_date)
    }

    /// Directors in crew order
    pub fn directors(&self) -> impl Iterator<Item = &str> {
        self.crew
            .iter()
            .filter(|c| c.job == "Director")
            .map(|c| c.name.as_str())
    }
}

/// Supplementary rating and plot data from the secondary provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryRecord {
    pub title: Option<String>,
    pub year: Option<String>,
    /// Raw `Type` value (`movie`, `series`, `episode`)
    pub kind: Option<String>,
    pub imdb_rating: Option<String>,
    pub ratings: Vec<CriticRating>,
    pub plot: Option<String>,
}

/// One critic-aggregator score, e.g. `Rotten Tomatoes` → `94%`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticRating {
    pub source: String,
    pub value: String,
}

/// Which rendering of a record the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    Basic,
    Ratings,
    Cast,
    WhereToWatch,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Basic,
        ViewKind::Ratings,
        ViewKind::Cast,
        ViewKind::WhereToWatch,
    ];

    /// Action token carried in button payloads
    pub fn action(self) -> &'static str {
        match self {
            ViewKind::Basic => "basic",
            ViewKind::Ratings => "ratings",
            ViewKind::Cast => "cast",
            ViewKind::WhereToWatch => "watch",
        }
    }
}

impl FromStr for ViewKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|view| view.action() == s)
            .ok_or(())
    }
}

/// Parse the year out of a `YYYY-MM-DD` date. Empty strings yield `None`.
pub fn year_from_date(date: &str) -> Option<i32> {
    date.get(..4).and_then(|y| y.parse().ok())
}
