use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Query-component encode set: everything except ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`. Matches what the platform's own search box
/// produces, so saved URLs compare byte-for-byte.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_DOMAIN: &str = "x.com";

/// Percent-encode a finished query and embed it in the platform's
/// live-search URL. No validation happens here; callers that care run
/// the query through `sanitize::is_valid_query_string` first.
pub fn build_search_url(query: &str) -> String {
    build_search_url_on(DEFAULT_DOMAIN, query)
}

pub fn build_search_url_on(domain: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query, QUERY_COMPONENT);
    format!("https://{domain}/search?q={encoded}&src=typed_query&f=live")
}
