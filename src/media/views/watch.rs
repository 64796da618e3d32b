use super::bold;
use crate::media::{MediaRecord, SecondaryRecord};

/// Titles released this many years ago or less get the "still streaming" note
const RECENT_YEARS: i32 = 2;

const PLATFORMS: [&str; 6] = [
    "Netflix",
    "Amazon Prime Video",
    "Disney+",
    "HBO Max",
    "Apple TV+",
    "Paramount+",
];

/// Suggested streaming platforms, with a note for recent releases
pub fn format_where_to_watch(
    record: &MediaRecord,
    secondary: Option<&SecondaryRecord>,
    current_year: i32,
) -> String {
    let mut text = format!("📺 {}\n\n", bold("DÓNDE VER"));

    if let Some(kind) = secondary.and_then(|s| s.kind.as_deref()) {
        let noun = if kind == "movie" { "película" } else { "serie" };
        text.push_str(&format!("🎬 Busca esta {} en:\n", noun));
    }

    text.push_str(&format!("🔍 {}\n", bold("Plataformas sugeridas:")));
    for platform in PLATFORMS {
        text.push_str(&format!("• {}\n", platform));
    }
    text.push_str(&format!(
        "\n💡 {} Usa JustWatch.com para verificar disponibilidad en tu región",
        bold("Tip:")
    ));

    if let Some(year) = record.year()
        && year >= current_year - RECENT_YEARS
    {
        text.push_str(&format!(
            "\n🆕 {} Lanzado en {}, probablemente disponible en streaming",
            bold("Nuevo:"),
            year
        ));
    }

    text
}
