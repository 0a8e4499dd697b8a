//! Mapping extracted cabin names onto the host's known cabins.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::similarity::similarity;

/// Minimum similarity (exclusive) for a fuzzy match to be accepted.
pub const MIN_SIMILARITY: f64 = 0.6;

/// Abbreviations feeds commonly use for the Regional and Teja cabins,
/// keyed by their lowercase, whitespace-free form.
static ABBREVIATIONS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    const ORDINALS: [(&str, &str, &str); 4] = [
        ("1", "i", "Uno"),
        ("2", "ii", "Dos"),
        ("3", "iii", "Tres"),
        ("4", "iv", "Cuatro"),
    ];

    let mut map = HashMap::new();
    for (prefix, display) in [("regional", "Regional"), ("teja", "Teja")] {
        for (digit, roman, word) in ORDINALS {
            let canonical = format!("{display} {word}");
            map.insert(format!("{prefix}{digit}"), canonical.clone());
            map.insert(format!("{prefix}{roman}"), canonical);
        }
    }
    map
});

fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Map an extracted cabin name to a known cabin.
///
/// Explicit abbreviations win outright. Otherwise the most similar known
/// name is chosen if it scores above [`MIN_SIMILARITY`]; the first of equally
/// similar names wins. When nothing qualifies the extracted name is
/// returned as given.
pub fn map_to_known(extracted: &str, known_cabins: &[String]) -> String {
    let key = normalize_key(extracted);

    if let Some(canonical) = ABBREVIATIONS.get(&key) {
        return canonical.clone();
    }

    let mut best: Option<(&String, f64)> = None;
    for cabin in known_cabins {
        let score = similarity(&key, &normalize_key(cabin));
        if score > MIN_SIMILARITY && best.is_none_or(|(_, s)| score > s) {
            best = Some((cabin, score));
        }
    }

    match best {
        Some((cabin, score)) => {
            log::debug!("Matched cabin '{extracted}' to '{cabin}' (similarity {score:.2})");
            cabin.clone()
        }
        None => extracted.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabins(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_abbreviation_needs_no_known_list() {
        assert_eq!(map_to_known("regional 1", &[]), "Regional Uno");
        assert_eq!(map_to_known("Regional I", &[]), "Regional Uno");
        assert_eq!(map_to_known("TEJA iv", &[]), "Teja Cuatro");
        assert_eq!(map_to_known("teja2", &[]), "Teja Dos");
    }

    #[test]
    fn test_regional_three_against_known_list() {
        let known = cabins(&["Regional Uno", "Regional Tres"]);
        assert_eq!(map_to_known("regional3", &known), "Regional Tres");
    }

    #[test]
    fn test_fuzzy_match_picks_most_similar() {
        let known = cabins(&["Los Alerces", "Los Coihues", "El Mirador"]);
        assert_eq!(map_to_known("Los Coigues", &known), "Los Coihues");
        assert_eq!(map_to_known("el mirado", &known), "El Mirador");
    }

    #[test]
    fn test_fuzzy_match_ties_keep_first_known() {
        let known = cabins(&["Casa Ab", "Casa Ba"]);
        // "casaaa" is one substitution away from both
        assert_eq!(map_to_known("casa aa", &known), "Casa Ab");
    }

    #[test]
    fn test_no_match_returns_extracted_unchanged() {
        let known = cabins(&["Regional Uno", "Teja Dos"]);
        assert_eq!(map_to_known("Lago Ranco", &known), "Lago Ranco");
        assert_eq!(map_to_known("External Cabin", &[]), "External Cabin");
    }

    #[test]
    fn test_exact_known_name_is_stable() {
        let known = cabins(&["Regional Uno", "Teja Dos"]);
        assert_eq!(map_to_known("Teja Dos", &known), "Teja Dos");
    }
}
