//! Application run modes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Long-poll Telegram and answer chats
    Bot,
    /// Resolve one title, print every view and exit
    Lookup,
}

impl RunMode {
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "bot" => Some(RunMode::Bot),
            "lookup" => Some(RunMode::Lookup),
            _ => None,
        }
    }
}
