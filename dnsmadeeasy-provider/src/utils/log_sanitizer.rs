//! Log sanitization utilities
//!
//! Keeps response bodies and credentials from being fully exposed in
//! debug/error logs.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a credential left visible.
const VISIBLE_PREFIX: usize = 4;

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the longest
/// prefix ending on a char boundary at or below `TRUNCATE_LIMIT` bytes, with a
/// suffix giving the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let end = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// Mask a credential, keeping only a short prefix.
///
/// `"1c1a3c91-4770"` becomes `"1c1a****"`. Values no longer than the prefix
/// are masked entirely.
pub fn mask_credential(s: &str) -> String {
    if s.chars().count() <= VISIBLE_PREFIX {
        return "****".to_string();
    }
    let prefix: String = s.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}
