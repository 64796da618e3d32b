use teloxide::utils::html;

use super::{NOT_AVAILABLE, bold, italic};
use crate::media::MediaRecord;

const NO_OVERVIEW: &str = "No disponible";

/// Title, year, kind, runtime, genres and synopsis
pub fn format_basic_info(record: &MediaRecord) -> String {
    let title = record.title.as_deref().unwrap_or(NOT_AVAILABLE);
    let year = record
        .year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut text = format!("🎭 {} ({})\n", bold(title), year);

    if let Some(original) = record.original_title.as_deref()
        && original != title
    {
        text.push_str(&format!("📝 {}\n", italic(&format!("Título original: {}", original))));
    }

    text.push_str(&kind_line(record));
    text.push('\n');
    text.push_str(&format!("⏱️ Duración: {}\n", runtime(record)));
    text.push_str(&format!(
        "🎨 Géneros: {}\n\n",
        html::escape(&record.genres.join(", "))
    ));
    text.push_str(&format!("📖 {}\n", bold("Sinopsis:")));
    text.push_str(&html::escape(record.overview.as_deref().unwrap_or(NO_OVERVIEW)));

    text
}

fn kind_line(record: &MediaRecord) -> String {
    if record.is_series() {
        let seasons = count_or_na(record.number_of_seasons);
        let episodes = count_or_na(record.number_of_episodes);
        format!("📺 Serie TV • {} temporada(s) • {} episodios", seasons, episodes)
    } else {
        "🎬 Película".to_string()
    }
}

fn runtime(record: &MediaRecord) -> String {
    if record.is_series() {
        match record.episode_run_time.first() {
            Some(minutes) => format!("{} min/episodio", minutes),
            None => NOT_AVAILABLE.to_string(),
        }
    } else {
        match record.runtime {
            Some(minutes) if minutes > 0 => format!("{} min", minutes),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

fn count_or_na(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
