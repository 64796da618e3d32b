//! Inline keyboards attached to title replies

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::callback::CallbackAction;
use crate::media::{MediaKind, ViewKind};

fn view_button(label: &str, view: ViewKind, id: u64, kind: MediaKind) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, CallbackAction::view(view, id, kind).to_string())
}

/// Four view buttons plus "new search"
pub fn info_keyboard(id: u64, kind: MediaKind) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            view_button("📽️ Info Básica", ViewKind::Basic, id, kind),
            view_button("⭐ Calificaciones", ViewKind::Ratings, id, kind),
        ],
        vec![
            view_button("🎭 Reparto", ViewKind::Cast, id, kind),
            view_button("📺 Dónde Ver", ViewKind::WhereToWatch, id, kind),
        ],
        vec![InlineKeyboardButton::callback(
            "🔄 Nueva Búsqueda",
            CallbackAction::NewSearch.to_string(),
        )],
    ])
}

/// Single button that replays a failed button press
pub fn retry_keyboard(data: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "🔄 Reintentar",
        data.to_string(),
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("unexpected button kind {:?}", other),
        }
    }

    #[test]
    fn test_info_keyboard_layout() {
        let keyboard = info_keyboard(238, MediaKind::Movie);
        let rows = &keyboard.inline_keyboard;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().map(Vec::len).sum::<usize>(), 5);

        assert_eq!(callback_data(&rows[0][0]), "basic|238|movie");
        assert_eq!(callback_data(&rows[0][1]), "ratings|238|movie");
        assert_eq!(callback_data(&rows[1][0]), "cast|238|movie");
        assert_eq!(callback_data(&rows[1][1]), "watch|238|movie");
        assert_eq!(callback_data(&rows[2][0]), "new_search");
    }

    #[test]
    fn test_every_button_decodes() {
        let keyboard = info_keyboard(1396, MediaKind::Series);
        for button in keyboard.inline_keyboard.iter().flatten() {
            assert!(callback_data(button).parse::<CallbackAction>().is_ok());
        }
    }
}
