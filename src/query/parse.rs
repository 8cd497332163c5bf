use super::params::{
    ExcludeType, IncludeType, KeywordMode, Language, MediaType, QueryParams, TimeRange,
};

/// Decompose a query string back into structured params.
///
/// Total and tolerant: nothing throws, nothing is dropped. Tokens the
/// matcher table does not recognize degrade to keywords, or to
/// `custom_operators` when they carry operator syntax (`:` or a leading
/// `-`) so unknown operators survive a round trip untouched.
pub fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::default();

    for token in tokenize(query) {
        classify(&token, &mut params);
    }

    params
}

/// Split on whitespace, but never inside a double-quoted span. Quotes
/// may open mid-token (`source:"Twitter Web App"` is one token); an
/// unterminated quote runs to end of input.
fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        tokens.push(read_token(&chars, &mut i));
    }

    tokens
}

fn read_token(chars: &[char], i: &mut usize) -> String {
    let mut token = String::new();
    let mut in_quotes = false;

    while *i < chars.len() {
        let c = chars[*i];
        if c == '"' {
            in_quotes = !in_quotes;
            token.push(c);
            *i += 1;
            continue;
        }
        if c.is_whitespace() && !in_quotes {
            break;
        }
        token.push(c);
        *i += 1;
    }

    token
}

/// Ordered matcher table, first match wins. The order is load-bearing:
/// several operators share the `filter:` / `is:` / `-` prefixes, and the
/// catch-all keyword/custom routing must come last.
fn classify(token: &str, params: &mut QueryParams) {
    if let Some(code) = token.strip_prefix("lang:") {
        if let Some(language) = Language::from_code(code) {
            params.language = language;
            return;
        }
        log::debug!("unknown lang value {code:?}, keeping as custom operator");
        push_unique(&mut params.custom_operators, token);
        return;
    }

    if let Some(value) = token.strip_prefix("within_time:") {
        if let Some(time_range) = TimeRange::from_value(value) {
            params.time_range = time_range;
            return;
        }
        log::debug!("unknown within_time value {value:?}, keeping as custom operator");
        push_unique(&mut params.custom_operators, token);
        return;
    }

    if let Some(date) = nonempty_suffix(token, "since:") {
        params.since_date = date.to_string();
        return;
    }
    if let Some(date) = nonempty_suffix(token, "until:") {
        params.until_date = date.to_string();
        return;
    }

    if let Some(n) = numeric_suffix(token, "min_faves:") {
        params.min_faves = n;
        return;
    }
    if let Some(n) = numeric_suffix(token, "min_retweets:") {
        params.min_retweets = n;
        return;
    }
    if let Some(n) = numeric_suffix(token, "min_replies:") {
        params.min_replies = n;
        return;
    }

    match token {
        "filter:images" => {
            push_unique(&mut params.media_type, MediaType::Images);
            return;
        }
        // Both the current and the legacy spelling decode to Videos.
        "filter:videos" | "filter:native_video" => {
            push_unique(&mut params.media_type, MediaType::Videos);
            return;
        }
        "filter:links" => {
            push_unique(&mut params.media_type, MediaType::Links);
            return;
        }
        "is:reply" => {
            push_unique(&mut params.include, IncludeType::Replies);
            return;
        }
        "is:verified" => {
            push_unique(&mut params.include, IncludeType::Verified);
            return;
        }
        "filter:spaces" => {
            push_unique(&mut params.include, IncludeType::Spaces);
            return;
        }
        "-is:retweet" => {
            push_unique(&mut params.exclude, ExcludeType::Retweets);
            return;
        }
        "-is:reply" | "-filter:replies" => {
            push_unique(&mut params.exclude, ExcludeType::Replies);
            return;
        }
        "-filter:links" => {
            push_unique(&mut params.exclude, ExcludeType::Links);
            return;
        }
        _ => {}
    }

    if let Some(handle) = nonempty_suffix(token, "from:") {
        params.from_account = handle.trim_start_matches('@').to_string();
        return;
    }
    if let Some(handle) = nonempty_suffix(token, "to:") {
        params.to_account = handle.trim_start_matches('@').to_string();
        return;
    }
    if let Some(handle) = nonempty_suffix(token, "@") {
        params.mention_account = handle.to_string();
        return;
    }

    if let Some(location) = nonempty_suffix(token, "near:") {
        params.near_location = strip_quotes(location).to_string();
        return;
    }
    if let Some(distance) = nonempty_suffix(token, "within:") {
        params.within_distance = distance.to_string();
        return;
    }

    if token == "?" {
        params.question_only = true;
        return;
    }

    // Bare OR switches keyword mode but contributes no token.
    if token == "OR" {
        params.keyword_mode = KeywordMode::Or;
        return;
    }

    // Group parentheses stick to the first and last token of an OR group
    // during tokenization; shed them before the keyword/custom split.
    let bare = token.trim_matches(|c| c == '(' || c == ')');

    // Quoted tokens are always keywords, with one quote layer stripped.
    if bare.starts_with('"') {
        let keyword = strip_quotes(bare);
        if !keyword.is_empty() {
            push_unique(&mut params.keywords, keyword);
        }
        return;
    }

    // Bare tokens with operator-ish syntax the table does not know are
    // preserved in custom_operators instead of being corrupted into a
    // search term.
    if bare.contains(':') || bare.starts_with('-') {
        push_unique(&mut params.custom_operators, token);
        return;
    }

    if !bare.is_empty() {
        push_unique(&mut params.keywords, bare);
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: impl Into<T>) {
    let item = item.into();
    if !list.contains(&item) {
        list.push(item);
    }
}

/// `strip_prefix`, but only when something non-empty follows.
fn nonempty_suffix<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    match token.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => Some(rest),
        _ => None,
    }
}

fn numeric_suffix(token: &str, prefix: &str) -> Option<u32> {
    token.strip_prefix(prefix)?.parse().ok()
}

/// Remove one layer of surrounding double quotes. A lone leading or
/// trailing quote (unterminated input) is stripped on its own.
fn strip_quotes(token: &str) -> &str {
    let token = token.strip_prefix('"').unwrap_or(token);
    token.strip_suffix('"').unwrap_or(token)
}
