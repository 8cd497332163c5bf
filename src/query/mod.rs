//! Bidirectional translation between structured search filters and the
//! flat, operator-based query syntax X uses for advanced search.
//!
//! Behavior contract:
//! - `build_query` and `parse_query` are pure and total; neither fails.
//! - serialize → parse → serialize is token-set stable for every field
//!   the parser's matcher table recognizes.
//! - Unknown operator syntax survives parsing in `custom_operators`
//!   rather than being dropped or demoted to a keyword.

mod build;
mod params;
mod parse;

pub use build::build_query;
pub use params::{
    split_custom_operators, ExcludeType, IncludeType, KeywordMode, Language, MediaType,
    QueryParams, QueryParamsUpdate, TimeRange,
};
pub use parse::parse_query;

#[cfg(test)]
mod tests;
