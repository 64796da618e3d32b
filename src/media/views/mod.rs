//! Textual views over a detailed title record
//!
//! Each view is a pure function of the record (plus the secondary record for
//! the views that use it). Output is Telegram HTML; every provider string is
//! escaped before it is embedded. Missing fields render as `N/A` or are left
//! out, never as an error.

mod basic;
mod cast;
mod ratings;
mod watch;

pub use basic::format_basic_info;
pub use cast::{NO_CAST_INFO, format_cast_crew};
pub use ratings::{NO_RATINGS_FOUND, format_ratings};
pub use watch::format_where_to_watch;

use teloxide::utils::html;

use super::models::{MediaRecord, SecondaryRecord, ViewKind};

/// Placeholder for missing scalar fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Render one view. `current_year` only affects [`ViewKind::WhereToWatch`].
pub fn render(
    view: ViewKind,
    record: &MediaRecord,
    secondary: Option<&SecondaryRecord>,
    current_year: i32,
) -> String {
    match view {
        ViewKind::Basic => format_basic_info(record),
        ViewKind::Ratings => format_ratings(record, secondary),
        ViewKind::Cast => format_cast_crew(record),
        ViewKind::WhereToWatch => format_where_to_watch(record, secondary, current_year),
    }
}

/// Escaped bold text
fn bold(text: &str) -> String {
    html::bold(&html::escape(text))
}

/// Escaped italic text
fn italic(text: &str) -> String {
    html::italic(&html::escape(text))
}

/// Join escaped names with ", ", keeping at most `limit`
fn join_names<'a>(names: impl IntoIterator<Item = &'a str>, limit: usize) -> String {
    names
        .into_iter()
        .take(limit)
        .map(html::escape)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Group digits in thousands: 14000 → "14,000"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Strip the HTML markup from a rendered view for plain-text output
pub fn to_plain_text(rendered: &str) -> String {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[a-z]+>").expect("valid tag pattern"));

    TAG.replace_all(rendered, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
