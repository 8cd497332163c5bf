use super::params::{ExcludeType, IncludeType, KeywordMode, MediaType, QueryParams};

/// Serialize structured params into a single search query string.
///
/// Total: no input can fail. Field groups are emitted in a fixed order
/// and joined with single spaces; empty groups are skipped. The result
/// is whitespace-normalized and trimmed.
pub fn build_query(params: &QueryParams) -> String {
    let mut parts: Vec<String> = Vec::new();

    // Required keywords, joined per keyword_mode. OR only parenthesizes
    // groups of two or more.
    let keywords = quoted_terms(&params.keywords);
    if !keywords.is_empty() {
        match params.keyword_mode {
            KeywordMode::Or if keywords.len() > 1 => {
                parts.push(format!("({})", keywords.join(" OR ")));
            }
            _ => parts.push(keywords.join(" ")),
        }
    }

    // Optional OR-group, parenthesized even for a single term.
    let any = quoted_terms(&params.any_keywords);
    if !any.is_empty() {
        parts.push(format!("({})", any.join(" OR ")));
    }

    for term in quoted_terms(&params.exclude_keywords) {
        parts.push(format!("-{term}"));
    }

    let phrase = params.exact_phrase.trim();
    if !phrase.is_empty() {
        parts.push(quote_always(phrase));
    }

    if let Some(handle) = clean_account(&params.from_account) {
        parts.push(format!("from:{handle}"));
    }
    if let Some(handle) = clean_account(&params.to_account) {
        parts.push(format!("to:{handle}"));
    }
    if let Some(handle) = clean_account(&params.mention_account) {
        parts.push(format!("@{handle}"));
    }

    let since = params.since_date.trim();
    if !since.is_empty() {
        parts.push(format!("since:{since}"));
    }
    let until = params.until_date.trim();
    if !until.is_empty() {
        parts.push(format!("until:{until}"));
    }

    let near = params.near_location.trim();
    if !near.is_empty() {
        parts.push(format!("near:{}", quote_if_needed(near)));
    }
    let within = params.within_distance.trim();
    if !within.is_empty() {
        parts.push(format!("within:{within}"));
    }

    if let Some(code) = params.language.code() {
        parts.push(format!("lang:{code}"));
    }
    if let Some(value) = params.time_range.value() {
        parts.push(format!("within_time:{value}"));
    }

    if params.min_faves > 0 {
        parts.push(format!("min_faves:{}", params.min_faves));
    }
    if params.min_retweets > 0 {
        parts.push(format!("min_retweets:{}", params.min_retweets));
    }
    if params.min_replies > 0 {
        parts.push(format!("min_replies:{}", params.min_replies));
    }

    for media in [MediaType::Images, MediaType::Videos, MediaType::Links] {
        if params.media_type.contains(&media) {
            parts.push(
                match media {
                    MediaType::Images => "filter:images",
                    MediaType::Videos => "filter:videos",
                    MediaType::Links => "filter:links",
                }
                .to_string(),
            );
        }
    }

    for inc in [
        IncludeType::Replies,
        IncludeType::Verified,
        IncludeType::Spaces,
    ] {
        if params.include.contains(&inc) {
            parts.push(
                match inc {
                    IncludeType::Replies => "is:reply",
                    IncludeType::Verified => "is:verified",
                    IncludeType::Spaces => "filter:spaces",
                }
                .to_string(),
            );
        }
    }

    for exc in [
        ExcludeType::Retweets,
        ExcludeType::Replies,
        ExcludeType::Links,
    ] {
        if params.exclude.contains(&exc) {
            parts.push(
                match exc {
                    ExcludeType::Retweets => "-is:retweet",
                    ExcludeType::Replies => "-is:reply",
                    ExcludeType::Links => "-filter:links",
                }
                .to_string(),
            );
        }
    }

    if params.question_only {
        parts.push("?".to_string());
    }

    for op in &params.custom_operators {
        let op = op.trim();
        if !op.is_empty() {
            parts.push(op.to_string());
        }
    }

    // Collapse whitespace runs and trim. Custom operators may carry
    // arbitrary internal spacing.
    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim terms, drop empties, and quote the ones that need it.
fn quoted_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(quote_if_needed)
        .collect()
}

fn is_quoted(term: &str) -> bool {
    term.len() >= 2 && term.starts_with('"') && term.ends_with('"')
}

/// Wrap a term in double quotes when it contains whitespace and is not
/// already wrapped in a matching pair.
fn quote_if_needed(term: &str) -> String {
    if term.contains(char::is_whitespace) && !is_quoted(term) {
        format!("\"{term}\"")
    } else {
        term.to_string()
    }
}

/// Exact phrases are always emitted as one double-quoted token.
fn quote_always(phrase: &str) -> String {
    if is_quoted(phrase) {
        phrase.to_string()
    } else {
        format!("\"{phrase}\"")
    }
}

/// Strip leading `@`s and surrounding whitespace from an account field.
/// Returns `None` when nothing usable remains.
fn clean_account(input: &str) -> Option<String> {
    let handle = input.trim().trim_start_matches('@').trim();
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}
