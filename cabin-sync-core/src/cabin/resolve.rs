//! Guessing a cabin name from the free-text fields of a calendar event.
//!
//! Feeds put the cabin identity wherever they like: the location, the
//! summary, or buried in the description. Resolution first tries the
//! [`PATTERNS`] table over every non-empty field, then falls back to the
//! leading chunk of the location or title.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::normalize::clean;

/// Label used when nothing in the event looks like a cabin name.
pub const DEFAULT_CABIN: &str = "External Cabin";

/// Which resolution stage produced a cabin name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedVia {
    Pattern,
    Location,
    Title,
    Description,
    Default,
}

/// A resolved cabin name and the stage that found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub name: String,
    pub matched_via: MatchedVia,
}

/// An extraction rule: a regex and the capture group holding the cabin name.
struct ExtractionPattern {
    regex: Regex,
    group: usize,
}

impl ExtractionPattern {
    fn new(pattern: &str, group: usize) -> Self {
        ExtractionPattern {
            regex: Regex::new(pattern).unwrap(),
            group,
        }
    }

    fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str())
    }
}

/// Extraction rules, tried in order. Append new rules here.
static PATTERNS: Lazy<Vec<ExtractionPattern>> = Lazy::new(|| {
    vec![
        // "Regional Tres", "Teja 2", "regional iv"
        ExtractionPattern::new(
            r"(?i)\b((?:regional|teja)\s*(?:uno|dos|tres|cuatro|cinco|seis|[1-9]|iv|v|i{1,3}))\b",
            1,
        ),
        // "Property: Teja Uno", "listing: ...", "unit: ..."
        ExtractionPattern::new(r"(?i)\b(?:property|listing|unit)\s*:\s*([^\n,;]+)", 1),
        // "Pine Ridge Cabin", "Casa Azul Villa"
        ExtractionPattern::new(
            r"\b(\p{Lu}[\p{L}'-]*(?:\s+\p{Lu}[\p{L}'-]*)*)\s+(?:Villa|House|Cottage|Lodge|Cabin)\b",
            1,
        ),
        // "Entire cabin at Los Alerces", "Private room at ..."
        ExtractionPattern::new(r"(?i)\b(?:entire|private)\b[^\n]*?\bat\s+([^\n,(]+)", 1),
        // "Room in Casa Alerce"
        ExtractionPattern::new(r"(?i)\broom\s+in\s+([^\n,(]+)", 1),
        // "Los Coihues - Pucón"
        ExtractionPattern::new(r"^\s*(\p{Lu}[^\n,–—-]*?)\s*[-–—,]", 1),
    ]
});

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-–—,]").unwrap());

/// Resolve a cabin name from an event's location, title (summary) and description.
pub fn resolve(
    location: Option<&str>,
    title: Option<&str>,
    description: Option<&str>,
) -> Resolution {
    let sources = [location, title, description]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty());

    for source in sources {
        for pattern in PATTERNS.iter() {
            let Some(captured) = pattern.extract(source) else {
                continue;
            };

            let name = clean(captured);
            if !name.is_empty() {
                return Resolution {
                    name,
                    matched_via: MatchedVia::Pattern,
                };
            }
        }
    }

    if let Some(name) = location.and_then(leading_segment) {
        return Resolution {
            name,
            matched_via: MatchedVia::Location,
        };
    }

    if let Some(name) = title.and_then(leading_segment) {
        return Resolution {
            name,
            matched_via: MatchedVia::Title,
        };
    }

    Resolution {
        name: DEFAULT_CABIN.to_string(),
        matched_via: MatchedVia::Default,
    }
}

/// Text before the first dash or comma, cleaned. Rejects results of two
/// characters or fewer.
fn leading_segment(field: &str) -> Option<String> {
    let head = SEPARATOR.split(field).next().unwrap_or(field);
    let name = clean(head);

    (name.chars().count() > 2).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_entire_cabin_title() {
        let res = resolve(Some(""), Some("Entire cabin at Regional Tres"), Some(""));
        assert_eq!(res.name, "Regional Tres");
        assert_eq!(res.matched_via, MatchedVia::Pattern);
    }

    #[test]
    fn test_resolve_regional_digit_kept_for_later_mapping() {
        let res = resolve(None, Some("Reserved - regional 2"), None);
        assert_eq!(res.name, "Regional 2");
        assert_eq!(res.matched_via, MatchedVia::Pattern);
    }

    #[test]
    fn test_resolve_property_label_in_description() {
        let res = resolve(
            None,
            Some("Reserved"),
            Some("Check-in 15:00\nProperty: casa del bosque\nCheckout 11:00"),
        );
        assert_eq!(res.name, "Casa del Bosque");
        assert_eq!(res.matched_via, MatchedVia::Pattern);
    }

    #[test]
    fn test_resolve_capitalized_phrase_before_building_word() {
        let res = resolve(None, Some("Stay at Pine Ridge Cabin"), None);
        assert_eq!(res.name, "Pine Ridge");
    }

    #[test]
    fn test_resolve_private_room_at() {
        let res = resolve(None, None, Some("Private room at Casa Alerce (2 guests)"));
        assert_eq!(res.name, "Casa Alerce");
        assert_eq!(res.matched_via, MatchedVia::Pattern);
    }

    #[test]
    fn test_resolve_room_in() {
        let res = resolve(None, Some("room in los maitenes"), None);
        assert_eq!(res.name, "Los Maitenes");
    }

    #[test]
    fn test_resolve_location_wins_over_title() {
        let res = resolve(
            Some("Los Coihues - Pucón"),
            Some("Entire cabin at Regional Tres"),
            None,
        );
        assert_eq!(res.name, "Los Coihues");
        assert_eq!(res.matched_via, MatchedVia::Pattern);
    }

    #[test]
    fn test_resolve_falls_back_to_location_prefix() {
        let res = resolve(Some("lago ranco"), Some("Reserved"), None);
        assert_eq!(res.name, "Lago Ranco");
        assert_eq!(res.matched_via, MatchedVia::Location);
    }

    #[test]
    fn test_resolve_falls_back_to_title_when_location_too_short() {
        let res = resolve(Some("ab"), Some("reserved"), None);
        assert_eq!(res.name, "Reserved");
        assert_eq!(res.matched_via, MatchedVia::Title);
    }

    #[test]
    fn test_resolve_title_with_parenthesized_words() {
        let res = resolve(None, Some("Airbnb (Not available)"), None);
        assert_eq!(res.name, "Airbnb (Not Available)");
        assert_eq!(res.matched_via, MatchedVia::Title);
    }

    #[test]
    fn test_resolve_default_when_nothing_usable() {
        let res = resolve(None, Some("X"), Some("   "));
        assert_eq!(res.name, DEFAULT_CABIN);
        assert_eq!(res.matched_via, MatchedVia::Default);

        let res = resolve(None, None, None);
        assert_eq!(res.matched_via, MatchedVia::Default);
    }
}
