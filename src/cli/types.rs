use clap::{Args as ClapArgs, Subcommand};

use crate::cli::errors::CliResult;
use crate::cli::validation;
use crate::query::{
    split_custom_operators, ExcludeType, IncludeType, KeywordMode, QueryParams, QueryParamsUpdate,
};
use crate::sanitize::sanitize_keywords;

/// Structured filter flags shared by `build`. Every flag maps onto one
/// field of the structured query record.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Required keyword; repeat for several
    #[clap(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// How required keywords combine: and | or
    #[clap(long, default_value = "and", value_parser = ["and", "or"])]
    pub mode: String,

    /// Any-of keyword; the group is ORed and parenthesized
    #[clap(long = "any")]
    pub any_keywords: Vec<String>,

    /// Keyword to exclude (emitted as -term)
    #[clap(long = "exclude-word", allow_hyphen_values = true)]
    pub exclude_keywords: Vec<String>,

    /// Exact phrase (emitted double-quoted)
    #[clap(long)]
    pub phrase: Option<String>,

    /// Posts authored by this account (leading @ is fine)
    #[clap(long)]
    pub from: Option<String>,

    /// Replies to this account
    #[clap(long)]
    pub to: Option<String>,

    /// Posts mentioning this account
    #[clap(long)]
    pub mention: Option<String>,

    /// Posted on or after this date (YYYY-MM-DD)
    #[clap(long)]
    pub since: Option<String>,

    /// Posted before this date (YYYY-MM-DD)
    #[clap(long)]
    pub until: Option<String>,

    /// Geo filter center, e.g. Tokyo or "New York"
    #[clap(long)]
    pub near: Option<String>,

    /// Geo filter radius, e.g. 10km or 5mi
    #[clap(long)]
    pub within: Option<String>,

    /// Language code (zh, zh-cn, en, ja, ko, es, fr, de, ru, th, ar, hi)
    #[clap(long)]
    pub lang: Option<String>,

    /// Relative time window (1h, 4h, 12h, 24h, 2d, 7d, 30d)
    #[clap(long = "time")]
    pub time_range: Option<String>,

    /// Minimum likes
    #[clap(long, default_value = "0")]
    pub min_faves: u32,

    /// Minimum retweets
    #[clap(long, default_value = "0")]
    pub min_retweets: u32,

    /// Minimum replies
    #[clap(long, default_value = "0")]
    pub min_replies: u32,

    /// Content-type filter: images | videos | links; repeatable
    #[clap(long)]
    pub media: Vec<String>,

    /// Inclusion flag: replies | verified | spaces; repeatable
    #[clap(long)]
    pub include: Vec<String>,

    /// Exclusion flag: retweets | replies | links; repeatable
    #[clap(long)]
    pub exclude: Vec<String>,

    /// Only posts containing a question mark
    #[clap(long, default_value = "false")]
    pub question: bool,

    /// Raw operator(s) appended verbatim; splits on commas/newlines
    #[clap(long, allow_hyphen_values = true)]
    pub custom: Vec<String>,

    /// Start from a named preset: quality | customer | resource | visual
    #[clap(long)]
    pub preset: Option<String>,
}

impl QueryArgs {
    /// Validate the flags and assemble the structured record. Keyword
    /// lists go through the sanitizer; a preset (if any) is applied
    /// first so explicit flags win over it.
    pub fn into_params(self) -> CliResult<QueryParams> {
        validation::validate_query_args(&self)?;

        let mut params = QueryParams::default();

        if let Some(ref name) = self.preset {
            // validated above, so the lookup cannot miss
            if let Some(update) = preset_update(name) {
                params.apply(update);
            }
        }

        params.keywords = sanitize_keywords(&self.keywords);
        params.keyword_mode = KeywordMode::from_name(&self.mode).unwrap_or_default();
        params.any_keywords = sanitize_keywords(&self.any_keywords);
        params.exclude_keywords = sanitize_keywords(&self.exclude_keywords);

        if let Some(phrase) = self.phrase {
            params.exact_phrase = crate::sanitize::sanitize_keyword(&phrase);
        }
        if let Some(from) = self.from {
            params.from_account = from;
        }
        if let Some(to) = self.to {
            params.to_account = to;
        }
        if let Some(mention) = self.mention {
            params.mention_account = mention;
        }
        if let Some(since) = self.since {
            params.since_date = since;
        }
        if let Some(until) = self.until {
            params.until_date = until;
        }
        if let Some(near) = self.near {
            params.near_location = near;
        }
        if let Some(within) = self.within {
            params.within_distance = within;
        }
        if let Some(ref lang) = self.lang {
            params.language = validation::parse_language(lang)?;
        }
        if let Some(ref time) = self.time_range {
            params.time_range = validation::parse_time_range(time)?;
        }

        if self.min_faves > 0 {
            params.min_faves = self.min_faves;
        }
        if self.min_retweets > 0 {
            params.min_retweets = self.min_retweets;
        }
        if self.min_replies > 0 {
            params.min_replies = self.min_replies;
        }

        for name in &self.media {
            let media = validation::parse_media(name)?;
            if !params.media_type.contains(&media) {
                params.media_type.push(media);
            }
        }
        for name in &self.include {
            let include = validation::parse_include(name)?;
            if !params.include.contains(&include) {
                params.include.push(include);
            }
        }
        for name in &self.exclude {
            let exclude = validation::parse_exclude(name)?;
            if !params.exclude.contains(&exclude) {
                params.exclude.push(exclude);
            }
        }

        if self.question {
            params.question_only = true;
        }

        for chunk in &self.custom {
            params
                .custom_operators
                .extend(split_custom_operators(chunk));
        }

        Ok(params)
    }
}

/// The preset cards from the query builder panel, as sparse updates.
pub fn preset_update(name: &str) -> Option<QueryParamsUpdate> {
    match name {
        // high-quality originals
        "quality" => Some(QueryParamsUpdate {
            min_faves: Some(300),
            exclude: Some(vec![
                ExcludeType::Retweets,
                ExcludeType::Replies,
                ExcludeType::Links,
            ]),
            include: Some(vec![]),
            ..Default::default()
        }),
        // brand feedback mining
        "customer" => Some(QueryParamsUpdate {
            include: Some(vec![IncludeType::Replies]),
            exclude: Some(vec![ExcludeType::Links]),
            min_replies: Some(3),
            question_only: Some(false),
            ..Default::default()
        }),
        // link/resource digging
        "resource" => Some(QueryParamsUpdate {
            media_type: Some(vec![crate::query::MediaType::Links]),
            min_faves: Some(20),
            min_retweets: Some(10),
            exclude: Some(vec![ExcludeType::Retweets]),
            ..Default::default()
        }),
        // image virality
        "visual" => Some(QueryParamsUpdate {
            media_type: Some(vec![crate::query::MediaType::Images]),
            min_faves: Some(100),
            exclude: Some(vec![ExcludeType::Retweets]),
            include: Some(vec![]),
            ..Default::default()
        }),
        _ => None,
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavArgs {
    /// Save a query under a name
    Add {
        /// Display name for the favorite
        name: String,
        /// The finished query string
        query: String,
    },
    /// List saved favorites
    List {
        /// Print as JSON
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// Delete a favorite by id
    Rm {
        id: String,

        /// Auto confirm
        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
    /// Rename a favorite or replace its query
    Update {
        id: String,

        #[clap(short, long)]
        name: Option<String>,

        #[clap(short, long)]
        query: Option<String>,
    },
    /// Print the search URL for a favorite
    Url { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum HistoryArgs {
    /// List recorded searches, newest first
    List {
        /// Print as JSON
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// Delete one entry by id
    Rm { id: String },
    /// Delete all history
    Clear {
        /// Auto confirm
        #[clap(short, long, default_value = "false")]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplateArgs {
    /// List templates for a region
    List {
        /// zh | ja | es | en | global (defaults to the configured region)
        #[clap(long)]
        region: Option<String>,

        /// Print as JSON
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// Show one template, decomposed into structured params
    Show { id: String },
    /// Print the search URL for a template
    Url { id: String },
}
