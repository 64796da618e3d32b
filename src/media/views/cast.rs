use teloxide::utils::html;

use super::{bold, join_names};
use crate::media::MediaRecord;

/// Returned when a record has neither directors/creators nor cast
pub const NO_CAST_INFO: &str = "🎭 No se encontró información del reparto.";

const MAX_DIRECTORS: usize = 3;
const MAX_CAST: usize = 8;

/// Directors (movies) or creators (series), then the top-billed cast
pub fn format_cast_crew(record: &MediaRecord) -> String {
    let mut body = String::new();

    if record.is_series() {
        if !record.creators.is_empty() {
            let names = join_names(record.creators.iter().map(String::as_str), MAX_DIRECTORS);
            body.push_str(&format!("👨‍💼 {} {}\n\n", bold("Creador(es):"), names));
        }
    } else {
        let names = join_names(record.directors(), MAX_DIRECTORS);
        if !names.is_empty() {
            body.push_str(&format!("🎬 {} {}\n\n", bold("Director(es):"), names));
        }
    }

    if !record.cast.is_empty() {
        body.push_str(&format!("🎭 {}\n", bold("Actores principales:")));
        for actor in record.cast.iter().take(MAX_CAST) {
            match actor.character.as_deref().filter(|c| !c.is_empty()) {
                Some(character) => body.push_str(&format!(
                    "• {} como {}\n",
                    html::escape(&actor.name),
                    html::escape(character)
                )),
                None => body.push_str(&format!("• {}\n", html::escape(&actor.name))),
            }
        }
    }

    if body.is_empty() {
        return NO_CAST_INFO.to_string();
    }

    format!("🎭 {}\n\n{}", bold("REPARTO Y EQUIPO"), body)
}
