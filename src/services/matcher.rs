//! Best-match resolution for free-text title queries
//!
//! Scores every search candidate against the query using both its localized
//! title and its original-language title, and keeps the highest. A candidate
//! only wins on text similarity when it clears [`MATCH_THRESHOLD`]; otherwise
//! the provider's own relevance ranking decides and the first result is used.
//!
//! ```rust,ignore
//! let candidates = tmdb.search_titles("el padrno").await;
//! if let Some(best) = matcher::resolve("el padrno", &candidates) {
//!     println!("{} ({:?})", best.display_title, best.release_year);
//! }
//! ```

use tracing::debug;

use super::text_utils::title_similarity;
use crate::media::SearchCandidate;

/// Score a candidate must exceed to beat the provider ranking
pub const MATCH_THRESHOLD: f64 = 0.6;

/// A candidate with its best per-field similarity score
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a SearchCandidate,
    /// Similarity score (0.0 to 1.0, higher is better)
    pub score: f64,
}

/// Best similarity of the query against either title of the candidate
pub fn candidate_score(query: &str, candidate: &SearchCandidate) -> f64 {
    let display = title_similarity(query, &candidate.display_title);
    let original = title_similarity(query, &candidate.original_title);
    display.max(original)
}

/// Highest-scoring candidate; on equal scores the earlier one is kept.
pub fn best_scored<'a>(query: &str, candidates: &'a [SearchCandidate]) -> Option<ScoredCandidate<'a>> {
    let mut best: Option<ScoredCandidate<'a>> = None;

    for candidate in candidates {
        let score = candidate_score(query, candidate);
        if best.is_none_or(|b| score > b.score) {
            best = Some(ScoredCandidate { candidate, score });
        }
    }

    best
}

/// Pick the candidate that best represents the query.
///
/// Returns `None` only for an empty candidate list. The result is always one
/// of the given candidates.
pub fn resolve<'a>(query: &str, candidates: &'a [SearchCandidate]) -> Option<&'a SearchCandidate> {
    let first = candidates.first()?;
    let best = best_scored(query, candidates)?;

    if best.score > MATCH_THRESHOLD {
        debug!(
            query = %query,
            title = %best.candidate.display_title,
            score = best.score,
            "Resolved query by title similarity"
        );
        Some(best.candidate)
    } else {
        debug!(
            query = %query,
            title = %first.display_title,
            best_score = best.score,
            "No confident title match, using provider ranking"
        );
        Some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn candidate(id: u64, title: &str, original: &str) -> SearchCandidate {
        SearchCandidate {
            id,
            display_title: title.to_string(),
            original_title: original.to_string(),
            kind: MediaKind::Movie,
            release_year: None,
            poster_path: None,
        }
    }

    #[test]
    fn test_empty_candidates() {
        assert!(resolve("el padrino", &[]).is_none());
        assert!(resolve("", &[]).is_none());
    }

    #[test]
    fn test_typo_resolves_to_localized_title() {
        let candidates = vec![
            candidate(1, "Breaking Bad", "Breaking Bad"),
            candidate(238, "El Padrino", "The Godfather"),
            candidate(3, "Padre de familia", "Family Guy"),
        ];
        let best = resolve("el padrno", &candidates).unwrap();
        assert_eq!(best.id, 238);
    }

    #[test]
    fn test_original_title_counts() {
        let candidates = vec![
            candidate(1, "Los Vengadores", "The Avengers"),
            candidate(27205, "Origen", "Inception"),
        ];
        assert_eq!(resolve("inceptoin", &candidates).unwrap().id, 27205);
    }

    #[test]
    fn test_low_scores_fall_back_to_first() {
        let candidates = vec![
            candidate(10, "Breaking Bad", "Breaking Bad"),
            candidate(11, "El Padrino", "The Godfather"),
        ];
        assert_eq!(resolve("zzz", &candidates).unwrap().id, 10);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let candidates = vec![
            candidate(1, "Matrix", ""),
            candidate(2, "Matrix", "Matrix"),
        ];
        assert_eq!(resolve("matrix", &candidates).unwrap().id, 1);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let candidates = vec![candidate(1, "Breaking Bad", ""), candidate(2, "Matrix Reloaded", "")];
        // "matrix" vs "matrix reloaded" scores 12/21 < 0.6
        assert_eq!(resolve("matrix", &candidates).unwrap().id, 1);
    }

    #[test]
    fn test_result_is_always_a_member() {
        let candidates = vec![
            candidate(5, "Avengers: Endgame", "Avengers: Endgame"),
            candidate(6, "Los Vengadores", "The Avengers"),
        ];
        for query in ["avengers", "zzz", "los vengadores", "x"] {
            let best = resolve(query, &candidates).unwrap();
            assert!(candidates.iter().any(|c| std::ptr::eq(c, best)));
        }
    }

    #[test]
    fn test_best_scored_reports_score() {
        let candidates = vec![candidate(1, "Inception", "")];
        let scored = best_scored("INCEPTION", &candidates).unwrap();
        assert!((scored.score - 1.0).abs() < 1e-9);
    }
}
