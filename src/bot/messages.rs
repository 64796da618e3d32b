//! User-facing texts (Telegram HTML)

use teloxide::utils::html;

pub const WELCOME: &str = "🎬✨ <b>¡Bienvenido a Cinegram Info Bot!</b> ✨🎭

🎯 <b>¿Qué puedo hacer por ti?</b>
Escribe el nombre de cualquier película o serie y te daré toda la información que necesitas:

🔍 <b>Búsqueda inteligente</b> - Tolero errores tipográficos
📊 <b>Información completa</b> - IMDb, TMDB, Metacritic y más
🎭 <b>Reparto y equipo</b> - Actores, directores, creadores
⭐ <b>Calificaciones</b> - De múltiples fuentes
📺 <b>Dónde ver</b> - Plataformas de streaming

💡 <b>Ejemplos de uso:</b>
• \"Good Fellas\"
• \"breaking bad\"
• \"el padrno\" (sí, con errores)
• \"inception\"
• \"game of trones\"

🚀 <b>¡Pruébame ahora!</b> Escribe el nombre de tu película o serie favorita.";

pub const HELP: &str = "🆘 <b>AYUDA - CINEGRAM INFO BOT</b>

🎯 <b>Cómo usar el bot:</b>
1. Simplemente escribe el nombre de una película o serie
2. No necesitas comandos especiales
3. Puedo entender títulos con errores tipográficos
4. Funciono tanto en chats privados como en grupos

📋 <b>Comandos disponibles:</b>
• /start - Mensaje de bienvenida
• /help - Esta ayuda
• /about - Información sobre el bot

🔍 <b>Ejemplos de búsqueda:</b>
• \"Avengers Endgame\"
• \"la casa de papel\"
• \"stranger things\"
• \"el señor de los anillos\"

🤖 <b>En grupos:</b>
• Respondo automáticamente a títulos de películas/series
• También puedes mencionarme junto al título

❓ <b>¿Problemas?</b> Asegúrate de escribir el título lo más completo posible.";

pub const ABOUT: &str = "ℹ️ <b>SOBRE CINEGRAM INFO BOT</b>

🎬 <b>Versión:</b> 1.0

📊 <b>Fuentes de datos:</b>
• 🎭 The Movie Database (TMDB)
• 🌟 Open Movie Database (OMDb)
• ⭐ IMDb, Rotten Tomatoes, Metacritic

🚀 <b>Características:</b>
• Búsqueda tolerante a errores
• Interfaz con botones interactivos
• Soporte para películas y series
• Funciona en grupos y chats privados";

pub const NEW_SEARCH_PROMPT: &str =
    "🔍 <b>Nueva búsqueda</b>\n\nEscribe el nombre de otra película o serie que quieras buscar.";

pub const PICK_VIEW: &str = "📊 Selecciona qué información quieres ver:";

pub const BUTTON_DATA_ERROR: &str = "❌ Error en los datos del botón.";

pub const DETAILS_UNAVAILABLE: &str = "❌ No se pudieron obtener los detalles.";

pub const MESSAGE_RETRY: &str =
    "❌ Ocurrió un error al procesar tu solicitud. Por favor, inténtalo de nuevo.";

pub const CALLBACK_RETRY: &str = "❌ Ocurrió un error al obtener la información. Inténtalo de nuevo.";

/// Reply for a query with no search results
pub fn not_found(query: &str) -> String {
    format!(
        "🔍 No encontré resultados para '{}'\n\n\
         💡 <b>Consejos:</b>\n\
         • Verifica la ortografía\n\
         • Prueba con el título en inglés\n\
         • Usa títulos más específicos",
        html::escape(query)
    )
}

/// Header shown with the poster and the view buttons
pub fn title_header(title: &str, year: Option<i32>) -> String {
    let title = if title.is_empty() { "Título desconocido" } else { title };
    let mut text = format!("🎬 {}", html::bold(&html::escape(title)));
    if let Some(year) = year {
        text.push_str(&format!(" ({})", year));
    }
    text.push_str("\n\n");
    text.push_str(PICK_VIEW);
    text
}
