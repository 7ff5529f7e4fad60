use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static HTML_TAG: OnceLock<Regex> = OnceLock::new();

fn html_tag() -> &'static Regex {
    HTML_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("static tag pattern compiles"))
}

/// Cut `text` to `max_chars` characters and append an ellipsis when it is longer
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim())
}

/// Strip markup from catalog summaries, which arrive as HTML fragments
pub fn remove_html_tags(html: &str) -> String {
    html_tag().replace_all(html, "").into_owned()
}

pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub fn format_genres<S: AsRef<str>>(genres: &[S]) -> String {
    genres
        .iter()
        .map(|g| g.as_ref())
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Base letters only: canonical decomposition with combining marks dropped, lowercased
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Alphabetical ordering for display names
///
/// Compares base letters ignoring accents and case, so "Élite" files under E.
/// Ties break unaccented before accented, then lowercase before uppercase.
/// Identical names compare equal so stable sorts keep insertion order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}
