//! Free-text hygiene for everything that ends up inside a query string
//! or a saved record, plus the final safety screen a query must pass
//! before it is embedded in a URL.
//!
//! Nothing here fails: unusable input degrades to an empty string
//! (keywords) or `None` (names), and the query screen is a blocklist,
//! deliberately permissive of arbitrary search syntax.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_KEYWORD_LEN: usize = 200;
pub const MAX_NAME_LEN: usize = 100;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// URL-scheme and script-injection patterns a query string must not
/// carry into a URL. Blocklist, not allowlist.
static DANGEROUS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)javascript:",
        r"(?i)data:",
        r"(?i)vbscript:",
        r"(?i)<script",
        r"(?i)on\w+\s*=",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Clean a keyword for use in a search query: strip HTML-tag-like
/// spans and control characters, collapse whitespace, trim, and cap at
/// [`MAX_KEYWORD_LEN`] characters. Unusable input degrades to `""`.
pub fn sanitize_keyword(input: &str) -> String {
    let stripped = HTML_TAG.replace_all(input, "");

    // Drop control characters but keep standard whitespace so the
    // collapse below still sees word boundaries.
    let cleaned: String = stripped
        .chars()
        .filter(|&c| !c.is_control() || c == '\t' || c == '\n' || c == '\r')
        .collect();

    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    truncate_chars(&collapsed, MAX_KEYWORD_LEN)
}

/// Clean a favorite name. Stricter than [`sanitize_keyword`]: also
/// strips structurally troublesome characters and signals rejection
/// with `None` instead of degrading to an empty string.
pub fn sanitize_name(input: &str) -> Option<String> {
    let stripped = HTML_TAG.replace_all(input, "");

    let cleaned: String = stripped
        .chars()
        .filter(|&c| !c.is_control())
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | '\\'))
        .collect();

    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }

    Some(truncate_chars(&collapsed, MAX_NAME_LEN))
}

/// Screen a finished query string before it is opened as a URL.
/// Empty strings are rejected too; there is nothing to search for.
pub fn is_valid_query_string(query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    !DANGEROUS.iter().any(|pattern| pattern.is_match(query))
}

/// Map [`sanitize_keyword`] over a list, dropping terms that clean to
/// nothing and deduplicating case-insensitively while preserving the
/// first-seen casing and order.
pub fn sanitize_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();

    for keyword in keywords {
        let cleaned = sanitize_keyword(keyword);
        if cleaned.is_empty() {
            continue;
        }
        if seen.insert(cleaned.to_lowercase()) {
            result.push(cleaned);
        }
    }

    result
}

/// Truncate to `max` characters without splitting a code point.
fn truncate_chars(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((idx, _)) => input[..idx].to_string(),
        None => input.to_string(),
    }
}
