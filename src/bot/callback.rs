//! Button payload codec
//!
//! Inline buttons carry `action|id|kind` (e.g. `ratings|238|movie`) or the bare
//! `new_search` token. Telegram limits callback data to 64 bytes, which these
//! payloads stay well under.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::media::{MediaKind, ViewKind};

pub const NEW_SEARCH: &str = "new_search";

/// Decoded button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Show one view of a title
    View {
        view: ViewKind,
        id: u64,
        kind: MediaKind,
    },
    /// Reset and prompt for another title
    NewSearch,
}

/// Why a payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackError {
    #[error("expected 3 '|'-separated fields, got {0}")]
    FieldCount(usize),

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("invalid id '{0}'")]
    InvalidId(String),

    #[error("unknown media kind '{0}'")]
    UnknownKind(String),
}

impl CallbackAction {
    pub fn view(view: ViewKind, id: u64, kind: MediaKind) -> Self {
        CallbackAction::View { view, id, kind }
    }
}

impl FromStr for CallbackAction {
    type Err = CallbackError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        if data == NEW_SEARCH {
            return Ok(CallbackAction::NewSearch);
        }

        let parts: Vec<&str> = data.split('|').collect();
        let [action, id, kind] = parts.as_slice() else {
            return Err(CallbackError::FieldCount(parts.len()));
        };

        let view = action
            .parse::<ViewKind>()
            .map_err(|_| CallbackError::UnknownAction(action.to_string()))?;
        let id = id
            .parse::<u64>()
            .map_err(|_| CallbackError::InvalidId(id.to_string()))?;
        let kind =
            MediaKind::from_tmdb(kind).ok_or_else(|| CallbackError::UnknownKind(kind.to_string()))?;

        Ok(CallbackAction::View { view, id, kind })
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackAction::View { view, id, kind } => {
                write!(f, "{}|{}|{}", view.action(), id, kind.tmdb_name())
            }
            CallbackAction::NewSearch => f.write_str(NEW_SEARCH),
        }
    }
}
