//! Text normalization and comparison utilities for title matching

/// Normalize a title for comparison: lowercase and collapse whitespace.
///
/// Accents and punctuation are kept; "Padrino" and "Pádrino" are different
/// titles to the similarity ratio, the same way users type them.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Similarity ratio between two strings (0.0 to 1.0).
///
/// Uses the rapidfuzz Indel ratio `2 * LCS / (len(a) + len(b))`, the same
/// matching-characters ratio a longest-matching-blocks comparison produces.
/// An empty side scores 0 so that absent titles never win.
pub fn title_ratio(s1: &str, s2: &str) -> f64 {
    use rapidfuzz::distance::indel;

    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    indel::normalized_similarity(s1.chars(), s2.chars())
}

/// Case-insensitive similarity between a user query and a title.
pub fn title_similarity(query: &str, title: &str) -> f64 {
    title_ratio(&normalize_title(query), &normalize_title(title))
}
