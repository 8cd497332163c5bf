use super::*;

fn params(mutate: impl FnOnce(&mut QueryParams)) -> QueryParams {
    let mut p = QueryParams::default();
    mutate(&mut p);
    p
}

fn words(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|s| s.to_string()).collect()
}

// --- Serializer ---

#[test]
fn test_default_params_serialize_empty() {
    assert_eq!(build_query(&QueryParams::default()), "");
}

#[test]
fn test_keywords_and_mode() {
    let p = params(|p| p.keywords = words(&["AI", "ChatGPT"]));
    assert_eq!(build_query(&p), "AI ChatGPT");
}

#[test]
fn test_keywords_or_mode() {
    let p = params(|p| {
        p.keywords = words(&["AI", "ChatGPT"]);
        p.keyword_mode = KeywordMode::Or;
    });
    assert_eq!(build_query(&p), "(AI OR ChatGPT)");
}

#[test]
fn test_single_keyword_never_parenthesized() {
    let p = params(|p| {
        p.keywords = words(&["AI"]);
        p.keyword_mode = KeywordMode::Or;
    });
    assert_eq!(build_query(&p), "AI");
}

#[test]
fn test_any_keywords_always_parenthesized() {
    let p = params(|p| p.any_keywords = words(&["thread"]));
    assert_eq!(build_query(&p), "(thread)");

    let p = params(|p| p.any_keywords = words(&["thread", "tutorial"]));
    assert_eq!(build_query(&p), "(thread OR tutorial)");
}

#[test]
fn test_multiword_terms_are_quoted() {
    let p = params(|p| p.keywords = words(&["machine learning", "rust"]));
    assert_eq!(build_query(&p), "\"machine learning\" rust");

    // already-quoted terms are not double-wrapped
    let p = params(|p| p.keywords = words(&["\"machine learning\""]));
    assert_eq!(build_query(&p), "\"machine learning\"");
}

#[test]
fn test_exclude_keywords_emit_standalone_tokens() {
    let p = params(|p| p.exclude_keywords = words(&["giveaway", "air drop"]));
    assert_eq!(build_query(&p), "-giveaway -\"air drop\"");
}

#[test]
fn test_exact_phrase_quoted_even_single_word() {
    let p = params(|p| p.exact_phrase = "rustlang".to_string());
    assert_eq!(build_query(&p), "\"rustlang\"");
}

#[test]
fn test_account_operators_strip_at() {
    let p = params(|p| {
        p.from_account = "@OpenAI".to_string();
        p.to_account = " sama ".to_string();
        p.mention_account = "@@Apple".to_string();
    });
    assert_eq!(build_query(&p), "from:OpenAI to:sama @Apple");
}

#[test]
fn test_all_at_account_is_omitted() {
    let p = params(|p| p.from_account = "@@@".to_string());
    assert_eq!(build_query(&p), "");
}

#[test]
fn test_dates_and_geo() {
    let p = params(|p| {
        p.since_date = "2024-01-01".to_string();
        p.until_date = "2024-12-31".to_string();
        p.near_location = "New York".to_string();
        p.within_distance = "10km".to_string();
    });
    assert_eq!(
        build_query(&p),
        "since:2024-01-01 until:2024-12-31 near:\"New York\" within:10km"
    );
}

#[test]
fn test_language_and_time_range() {
    let p = params(|p| {
        p.language = Language::En;
        p.time_range = TimeRange::Hour24;
    });
    assert_eq!(build_query(&p), "lang:en within_time:24h");

    // All emits nothing for either enum
    let p = params(|p| {
        p.language = Language::All;
        p.time_range = TimeRange::All;
    });
    assert_eq!(build_query(&p), "");
}

#[test]
fn test_engagement_thresholds() {
    let p = params(|p| {
        p.min_faves = 500;
        p.min_retweets = 50;
        p.min_replies = 20;
    });
    assert_eq!(
        build_query(&p),
        "min_faves:500 min_retweets:50 min_replies:20"
    );
}

#[test]
fn test_zero_thresholds_are_omitted() {
    let p = params(|p| p.min_faves = 0);
    assert_eq!(build_query(&p), "");
}

#[test]
fn test_media_include_exclude_tokens() {
    let p = params(|p| {
        p.media_type = vec![MediaType::Links, MediaType::Images];
        p.include = vec![IncludeType::Verified, IncludeType::Replies];
        p.exclude = vec![
            ExcludeType::Retweets,
            ExcludeType::Replies,
            ExcludeType::Links,
        ];
    });
    let q = build_query(&p);
    assert!(q.contains("filter:images"));
    assert!(q.contains("filter:links"));
    assert!(q.contains("is:reply"));
    assert!(q.contains("is:verified"));
    assert!(q.contains("-is:retweet"));
    assert!(q.contains("-is:reply"));
    assert!(q.contains("-filter:links"));
}

#[test]
fn test_question_only_token() {
    let p = params(|p| p.question_only = true);
    assert_eq!(build_query(&p), "?");
}

#[test]
fn test_custom_operators_appended_verbatim_in_order() {
    let p = params(|p| {
        p.keywords = words(&["AI"]);
        p.custom_operators = words(&["url:github", "filter:follows", "source:\"Twitter Web App\""]);
    });
    assert_eq!(
        build_query(&p),
        "AI url:github filter:follows source:\"Twitter Web App\""
    );
}

#[test]
fn test_whitespace_is_normalized() {
    let p = params(|p| {
        p.keywords = words(&["  AI  "]);
        p.custom_operators = words(&["  url:github  "]);
    });
    assert_eq!(build_query(&p), "AI url:github");
}

#[test]
fn test_field_order_is_stable() {
    let p = params(|p| {
        p.keywords = words(&["prompt"]);
        p.any_keywords = words(&["ChatGPT", "Claude"]);
        p.exclude_keywords = words(&["giveaway"]);
        p.exact_phrase = "machine learning".to_string();
        p.from_account = "OpenAI".to_string();
        p.language = Language::En;
        p.time_range = TimeRange::Hour24;
        p.min_faves = 100;
        p.media_type = vec![MediaType::Images];
        p.include = vec![IncludeType::Verified];
        p.exclude = vec![ExcludeType::Retweets];
        p.question_only = true;
        p.custom_operators = words(&["url:github"]);
    });
    assert_eq!(
        build_query(&p),
        "prompt (ChatGPT OR Claude) -giveaway \"machine learning\" from:OpenAI \
         lang:en within_time:24h min_faves:100 filter:images is:verified -is:retweet ? url:github"
    );
}

// --- Parser ---

#[test]
fn test_parse_empty() {
    assert_eq!(parse_query(""), QueryParams::default());
    assert_eq!(parse_query("   \t  "), QueryParams::default());
}

#[test]
fn test_parse_keywords_and_operators() {
    let p = parse_query("AI ChatGPT lang:en min_faves:100");
    assert_eq!(p.keywords, words(&["AI", "ChatGPT"]));
    assert_eq!(p.language, Language::En);
    assert_eq!(p.min_faves, 100);
}

#[test]
fn test_parse_or_sets_mode_without_token() {
    let p = parse_query("AI OR ChatGPT");
    assert_eq!(p.keywords, words(&["AI", "ChatGPT"]));
    assert_eq!(p.keyword_mode, KeywordMode::Or);
}

#[test]
fn test_parse_sheds_group_parens() {
    let p = parse_query("(AI OR ChatGPT)");
    assert_eq!(p.keywords, words(&["AI", "ChatGPT"]));
    assert_eq!(p.keyword_mode, KeywordMode::Or);
}

#[test]
fn test_parse_quoted_phrase_is_one_keyword() {
    let p = parse_query("\"machine learning\" rust");
    assert_eq!(p.keywords, words(&["machine learning", "rust"]));
}

#[test]
fn test_parse_unterminated_quote_runs_to_end() {
    let p = parse_query("\"machine learning rust");
    assert_eq!(p.keywords, words(&["machine learning rust"]));
}

#[test]
fn test_parse_unknown_operator_syntax_routes_to_custom() {
    let p = parse_query("custom:thing -unknownop");
    assert!(p.keywords.is_empty());
    assert_eq!(p.custom_operators, words(&["custom:thing", "-unknownop"]));
}

#[test]
fn test_parse_quoted_colon_token_stays_keyword() {
    let p = parse_query("\"re: hello\"");
    assert_eq!(p.keywords, words(&["re: hello"]));
    assert!(p.custom_operators.is_empty());
}

#[test]
fn test_parse_accounts() {
    let p = parse_query("from:OpenAI to:@sama @Apple");
    assert_eq!(p.from_account, "OpenAI");
    assert_eq!(p.to_account, "sama");
    assert_eq!(p.mention_account, "Apple");
}

#[test]
fn test_parse_dates_geo_and_question() {
    let p = parse_query("since:2024-01-01 until:2024-12-31 near:\"New York\" within:10km ?");
    assert_eq!(p.since_date, "2024-01-01");
    assert_eq!(p.until_date, "2024-12-31");
    assert_eq!(p.near_location, "New York");
    assert_eq!(p.within_distance, "10km");
    assert!(p.question_only);
}

#[test]
fn test_parse_media_include_exclude() {
    let p = parse_query(
        "filter:images filter:native_video filter:links is:reply is:verified filter:spaces \
         -is:retweet -filter:replies -filter:links",
    );
    assert_eq!(
        p.media_type,
        vec![MediaType::Images, MediaType::Videos, MediaType::Links]
    );
    assert_eq!(
        p.include,
        vec![
            IncludeType::Replies,
            IncludeType::Verified,
            IncludeType::Spaces
        ]
    );
    assert_eq!(
        p.exclude,
        vec![
            ExcludeType::Retweets,
            ExcludeType::Replies,
            ExcludeType::Links
        ]
    );
}

#[test]
fn test_parse_legacy_video_spelling() {
    let p = parse_query("filter:native_video");
    assert_eq!(p.media_type, vec![MediaType::Videos]);
}

#[test]
fn test_parse_duplicate_tokens_collapse() {
    let p = parse_query("filter:images filter:images AI AI");
    assert_eq!(p.media_type, vec![MediaType::Images]);
    assert_eq!(p.keywords, words(&["AI"]));
}

#[test]
fn test_parse_unknown_lang_value_preserved() {
    let p = parse_query("lang:tlh");
    assert_eq!(p.language, Language::All);
    assert_eq!(p.custom_operators, words(&["lang:tlh"]));
}

#[test]
fn test_parse_non_numeric_threshold_preserved() {
    let p = parse_query("min_faves:lots");
    assert_eq!(p.min_faves, 0);
    assert_eq!(p.custom_operators, words(&["min_faves:lots"]));
}

#[test]
fn test_parse_bare_prefix_is_custom() {
    // "since:" with nothing after it is unknown operator syntax, not a date
    let p = parse_query("since:");
    assert!(p.since_date.is_empty());
    assert_eq!(p.custom_operators, words(&["since:"]));
}

#[test]
fn test_parse_mid_token_quotes() {
    let p = parse_query("source:\"Twitter Web App\" AI");
    assert_eq!(p.custom_operators, words(&["source:\"Twitter Web App\""]));
    assert_eq!(p.keywords, words(&["AI"]));
}

// --- Round trip ---

fn token_set(query: &str) -> std::collections::BTreeSet<String> {
    query.split(' ').map(str::to_string).collect()
}

#[test]
fn test_serialize_parse_serialize_is_token_stable() {
    let p = params(|p| {
        p.keywords = words(&["prompt", "machine learning"]);
        p.keyword_mode = KeywordMode::Or;
        p.from_account = "OpenAI".to_string();
        p.to_account = "sama".to_string();
        p.mention_account = "Apple".to_string();
        p.since_date = "2024-01-01".to_string();
        p.until_date = "2024-12-31".to_string();
        p.near_location = "New York".to_string();
        p.within_distance = "10km".to_string();
        p.language = Language::Ja;
        p.time_range = TimeRange::Day7;
        p.min_faves = 100;
        p.min_retweets = 20;
        p.min_replies = 10;
        p.media_type = vec![MediaType::Images, MediaType::Videos];
        p.include = vec![IncludeType::Verified];
        p.exclude = vec![ExcludeType::Retweets, ExcludeType::Links];
        p.question_only = true;
        p.custom_operators = words(&["url:github"]);
    });

    let first = build_query(&p);
    let second = build_query(&parse_query(&first));
    assert_eq!(token_set(&first), token_set(&second));
}

#[test]
fn test_reparse_is_a_fixed_point() {
    // After one serialize→parse hop, further hops change nothing at all.
    let q = "prompt (ChatGPT OR Claude) -filter:links from:OpenAI min_faves:100 url:github";
    let once = build_query(&parse_query(q));
    let twice = build_query(&parse_query(&once));
    assert_eq!(once, twice);
}

// --- Sparse updates ---

#[test]
fn test_apply_update_merges_field_by_field() {
    let mut p = params(|p| {
        p.keywords = words(&["AI"]);
        p.min_faves = 10;
    });

    p.apply(QueryParamsUpdate {
        min_faves: Some(300),
        exclude: Some(vec![ExcludeType::Retweets]),
        ..Default::default()
    });

    assert_eq!(p.keywords, words(&["AI"])); // untouched
    assert_eq!(p.min_faves, 300);
    assert_eq!(p.exclude, vec![ExcludeType::Retweets]);
}

#[test]
fn test_split_custom_operators() {
    assert_eq!(
        split_custom_operators("url:github, filter:follows\n min_quotes:5 ,,\n"),
        words(&["url:github", "filter:follows", "min_quotes:5"])
    );
    assert!(split_custom_operators("").is_empty());
}
