//! Canonical display form for extracted cabin labels.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static LEADING_FILLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:cabaña|cabin|house|villa|property)\b\s*").unwrap());

static TRAILING_FILLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*\b(?:house|cabin|villa|cottage|lodge|property|unit)$").unwrap()
});

/// Words kept lowercase unless they open the name.
const CONNECTORS: &[&str] = &[
    "de", "del", "la", "el", "y", "e", "o", "u", "a", "an", "the", "and", "or", "of", "at", "in",
    "on",
];

/// Clean a raw cabin label into its display form.
///
/// Collapses whitespace, strips one leading filler word ("Cabaña", "Villa", ...)
/// and one trailing one ("House", "Lodge", ...), then title-cases what is left.
///
/// ```
/// use cabin_sync_core::cabin::clean;
///
/// assert_eq!(clean("  Cabaña   Regional   Uno  "), "Regional Uno");
/// assert_eq!(clean("Teja Dos House"), "Teja Dos");
/// ```
pub fn clean(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    if collapsed.is_empty() {
        return String::new();
    }

    let stripped = LEADING_FILLER.replace(&collapsed, "");
    let stripped = TRAILING_FILLER.replace(stripped.trim(), "");

    title_case(stripped.trim())
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && CONNECTORS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first letter, skipping leading punctuation like `(` or `"`.
fn capitalize(word: &str) -> String {
    match word.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, first)) => {
            let rest = &word[i + first.len_utf8()..];
            format!("{}{}{}", &word[..i], first.to_uppercase(), rest)
        }
        None => word.to_string(),
    }
}
