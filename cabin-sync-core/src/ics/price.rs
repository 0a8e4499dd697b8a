//! Nightly price estimation from reservation descriptions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Price patterns, most specific first. Group 1 holds the amount with
/// its thousands separators.
static PRICE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"\$\s*(\d[\d.,]*)").unwrap(),
        Regex::new(r"(?i)\bCLP\s*\$?\s*(\d[\d.,]*)").unwrap(),
        Regex::new(r"(?i)(\d[\d.,]*)\s*pesos\b").unwrap(),
    ]
});

/// Estimate the nightly price in whole currency units. Returns 0 when the
/// text carries no recognizable amount.
pub fn estimate_nightly_price(text: &str) -> u64 {
    let Some(amount) = PRICE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
    else {
        return 0;
    };

    // Amounts too large for u64 saturate instead of falling through
    amount
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .try_fold(0u64, |acc, c| {
            acc.checked_mul(10)?
                .checked_add(u64::from(c.to_digit(10)?))
        })
        .unwrap_or(u64::MAX)
}
