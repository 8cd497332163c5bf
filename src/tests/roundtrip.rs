use std::collections::BTreeSet;

use crate::query::{build_query, parse_query, KeywordMode, Language, QueryParams, TimeRange};
use crate::sanitize::is_valid_query_string;
use crate::search_url::{build_search_url, build_search_url_on};
use crate::templates::TEMPLATES;

// --- URL builder ---

#[test]
fn test_url_encodes_spaces_as_percent20() {
    assert_eq!(
        build_search_url("AI OR ChatGPT"),
        "https://x.com/search?q=AI%20OR%20ChatGPT&src=typed_query&f=live"
    );
}

#[test]
fn test_url_component_encoding() {
    // parens survive; quotes, colons, at-signs, hashes, question marks do not
    assert_eq!(
        build_search_url("(\"a b\" OR #tag) from:x @y ?"),
        "https://x.com/search?q=(%22a%20b%22%20OR%20%23tag)%20from%3Ax%20%40y%20%3F&src=typed_query&f=live"
    );
}

#[test]
fn test_url_encodes_utf8() {
    assert_eq!(
        build_search_url("大模型"),
        "https://x.com/search?q=%E5%A4%A7%E6%A8%A1%E5%9E%8B&src=typed_query&f=live"
    );
}

#[test]
fn test_url_alternate_domain() {
    assert_eq!(
        build_search_url_on("twitter.com", "AI"),
        "https://twitter.com/search?q=AI&src=typed_query&f=live"
    );
}

// --- end-to-end: build → screen → url ---

#[test]
fn test_built_queries_pass_the_screen() {
    let mut params = QueryParams::default();
    params.keywords = vec!["AI".to_string(), "deep learning".to_string()];
    params.keyword_mode = KeywordMode::Or;
    params.language = Language::En;
    params.time_range = TimeRange::Hour24;
    params.min_faves = 100;

    let query = build_query(&params);
    assert!(is_valid_query_string(&query));

    let url = build_search_url(&query);
    assert!(url.starts_with("https://x.com/search?q="));
}

// --- template catalog integrity ---

#[test]
fn test_template_ids_are_unique() {
    let ids: BTreeSet<&str> = TEMPLATES.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), TEMPLATES.len());
}

#[test]
fn test_template_queries_pass_the_screen() {
    for template in TEMPLATES {
        assert!(
            is_valid_query_string(template.query),
            "template {} failed the safety screen",
            template.id
        );
    }
}

#[test]
fn test_template_queries_decompose_and_rebuild() {
    for template in TEMPLATES {
        let params = parse_query(template.query);
        let rebuilt = build_query(&params);
        assert!(
            !rebuilt.is_empty(),
            "template {} decomposed to nothing",
            template.id
        );
        // nothing may leak into an error state; a second hop is stable
        assert_eq!(rebuilt, build_query(&parse_query(&rebuilt)));
    }
}

#[test]
fn test_known_template_decomposition() {
    let params = parse_query("lang:zh-cn min_faves:300 within_time:4h");
    assert_eq!(params.language, Language::ZhCn);
    assert_eq!(params.min_faves, 300);
    assert_eq!(params.time_range, TimeRange::Hour4);
    assert!(params.keywords.is_empty());
}
