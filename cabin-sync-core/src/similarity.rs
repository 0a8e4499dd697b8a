//! Edit-distance scoring used to match extracted cabin names.
//!
//! Neither function normalizes its input; callers lowercase and strip
//! whitespace first when they want case-insensitive matching.

/// Levenshtein distance (unit cost insertions, deletions, substitutions),
/// counted over Unicode scalar values.
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    (max_len - distance(a, b)) as f64 / max_len as f64
}
