//! Decide which chat messages are title queries
//!
//! Private chats treat any reasonable text as a query. Group chats are noisier:
//! the bot answers when it is mentioned, or when the text looks like a title
//! and is not a common short reply.

use once_cell::sync::Lazy;
use regex::Regex;

const MIN_QUERY_CHARS: usize = 2;
const MAX_QUERY_CHARS: usize = 100;
const MIN_GROUP_QUERY_CHARS: usize = 3;

/// Short replies that are never titles
const STOP_WORDS: [&str; 6] = ["si", "no", "ok", "hola", "que", "como"];

static TITLE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[a-zA-ZñÑáéíóúÁÉÍÓÚ0-9\s\-:.,'"]+$"#).expect("valid title pattern")
});

/// Where a message was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatScope {
    Private,
    Group,
}

/// Extract the title query from a message, or `None` when the bot should stay quiet
pub fn extract_query(text: &str, scope: ChatScope, bot_username: Option<&str>) -> Option<String> {
    let text = text.trim();

    if text.starts_with('/') {
        return None;
    }

    let length = text.chars().count();
    if !(MIN_QUERY_CHARS..=MAX_QUERY_CHARS).contains(&length) {
        return None;
    }

    if scope == ChatScope::Private {
        return Some(text.to_string());
    }

    let mention = bot_username.map(|name| format!("@{}", name));
    if let Some(mention) = mention.as_deref()
        && text.contains(mention)
    {
        let query = text.replace(mention, "").trim().to_string();
        return (!query.is_empty()).then_some(query);
    }

    if !TITLE_CHARS.is_match(text) {
        return None;
    }
    if length < MIN_GROUP_QUERY_CHARS || STOP_WORDS.contains(&text.to_lowercase().as_str()) {
        return None;
    }

    Some(text.to_string())
}
