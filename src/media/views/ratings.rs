use teloxide::utils::html;

use super::{bold, group_thousands};
use crate::media::{MediaRecord, SecondaryRecord};

/// Returned when no provider has any score for the title
pub const NO_RATINGS_FOUND: &str = "⭐ No se encontraron calificaciones disponibles.";

/// Critic aggregators shown from the secondary ratings list, matched by source name
const AGGREGATORS: [(&str, &str); 2] = [
    ("Rotten Tomatoes", "🍅"),
    ("Metacritic", "🎯"),
];

/// Primary score, IMDb score and critic aggregator scores
pub fn format_ratings(record: &MediaRecord, secondary: Option<&SecondaryRecord>) -> String {
    let mut lines = Vec::new();

    if let Some(score) = record.vote_average.filter(|s| *s > 0.0) {
        let votes = group_thousands(record.vote_count.unwrap_or(0));
        lines.push(format!("🟢 {} {}/10 ({} votos)", bold("TMDB:"), score, votes));
    }

    if let Some(secondary) = secondary {
        if let Some(imdb) = secondary
            .imdb_rating
            .as_deref()
            .filter(|r| !r.is_empty() && *r != "N/A")
        {
            lines.push(format!("🟡 {} {}/10", bold("IMDb:"), html::escape(imdb)));
        }

        for rating in &secondary.ratings {
            if let Some((label, icon)) = AGGREGATORS
                .iter()
                .find(|(label, _)| rating.source.contains(label))
            {
                lines.push(format!(
                    "{} {} {}",
                    icon,
                    bold(&format!("{}:", label)),
                    html::escape(&rating.value)
                ));
            }
        }
    }

    if lines.is_empty() {
        return NO_RATINGS_FOUND.to_string();
    }

    let mut text = format!("⭐ {}\n\n", bold("CALIFICACIONES"));
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::CriticRating;
    use pretty_assertions::assert_eq;

    fn rating(source: &str, value: &str) -> CriticRating {
        CriticRating {
            source: source.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_no_ratings_at_all() {
        assert_eq!(format_ratings(&MediaRecord::default(), None), NO_RATINGS_FOUND);
    }

    #[test]
    fn test_zero_score_counts_as_absent() {
        let record = MediaRecord {
            vote_average: Some(0.0),
            vote_count: Some(0),
            ..Default::default()
        };
        assert_eq!(format_ratings(&record, None), NO_RATINGS_FOUND);
    }

    #[test]
    fn test_all_sources() {
        let record = MediaRecord {
            vote_average: Some(8.7),
            vote_count: Some(21345),
            ..Default::default()
        };
        let secondary = SecondaryRecord {
            imdb_rating: Some("9.2".into()),
            ratings: vec![
                rating("Internet Movie Database", "9.2/10"),
                rating("Rotten Tomatoes", "97%"),
                rating("Metacritic", "100/100"),
            ],
            ..Default::default()
        };

        let expected = "⭐ <b>CALIFICACIONES</b>\n\n\
                        🟢 <b>TMDB:</b> 8.7/10 (21,345 votos)\n\
                        🟡 <b>IMDb:</b> 9.2/10\n\
                        🍅 <b>Rotten Tomatoes:</b> 97%\n\
                        🎯 <b>Metacritic:</b> 100/100\n";
        assert_eq!(format_ratings(&record, Some(&secondary)), expected);
    }

    #[test]
    fn test_imdb_sentinel_skipped() {
        let secondary = SecondaryRecord {
            imdb_rating: Some("N/A".into()),
            ratings: vec![rating("Internet Movie Database", "N/A")],
            ..Default::default()
        };
        assert_eq!(
            format_ratings(&MediaRecord::default(), Some(&secondary)),
            NO_RATINGS_FOUND
        );
    }

    #[test]
    fn test_secondary_only() {
        let secondary = SecondaryRecord {
            ratings: vec![rating("Metacritic", "74/100")],
            ..Default::default()
        };
        let text = format_ratings(&MediaRecord::default(), Some(&secondary));
        assert!(text.starts_with("⭐ <b>CALIFICACIONES</b>"));
        assert!(text.contains("🎯 <b>Metacritic:</b> 74/100"));
        assert!(!text.contains("TMDB"));
    }
}
