use serde::{Deserialize, Serialize};

/// How required keywords are joined in the final query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMode {
    #[default]
    And,
    Or,
}

impl KeywordMode {
    pub fn from_name(name: &str) -> Option<KeywordMode> {
        match name {
            "and" => Some(KeywordMode::And),
            "or" => Some(KeywordMode::Or),
            _ => None,
        }
    }
}

/// `lang:` operator values. `All` emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    All,
    Zh,
    #[serde(rename = "zh-cn")]
    ZhCn,
    En,
    Ja,
    Ko,
    Es,
    Fr,
    De,
    Ru,
    Th,
    Ar,
    Hi,
}

impl Language {
    /// The operator value, or `None` for `All`.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Language::All => None,
            Language::Zh => Some("zh"),
            Language::ZhCn => Some("zh-cn"),
            Language::En => Some("en"),
            Language::Ja => Some("ja"),
            Language::Ko => Some("ko"),
            Language::Es => Some("es"),
            Language::Fr => Some("fr"),
            Language::De => Some("de"),
            Language::Ru => Some("ru"),
            Language::Th => Some("th"),
            Language::Ar => Some("ar"),
            Language::Hi => Some("hi"),
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "all" => Some(Language::All),
            "zh" => Some(Language::Zh),
            "zh-cn" => Some(Language::ZhCn),
            "en" => Some(Language::En),
            "ja" => Some(Language::Ja),
            "ko" => Some(Language::Ko),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "de" => Some(Language::De),
            "ru" => Some(Language::Ru),
            "th" => Some(Language::Th),
            "ar" => Some(Language::Ar),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }
}

/// `within_time:` operator values. `All` emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "12h")]
    Hour12,
    #[serde(rename = "24h")]
    Hour24,
    #[serde(rename = "2d")]
    Day2,
    #[serde(rename = "7d")]
    Day7,
    #[serde(rename = "30d")]
    Day30,
}

impl TimeRange {
    /// The operator value, or `None` for `All`.
    pub fn value(&self) -> Option<&'static str> {
        match self {
            TimeRange::All => None,
            TimeRange::Hour1 => Some("1h"),
            TimeRange::Hour4 => Some("4h"),
            TimeRange::Hour12 => Some("12h"),
            TimeRange::Hour24 => Some("24h"),
            TimeRange::Day2 => Some("2d"),
            TimeRange::Day7 => Some("7d"),
            TimeRange::Day30 => Some("30d"),
        }
    }

    pub fn from_value(value: &str) -> Option<TimeRange> {
        match value {
            "all" => Some(TimeRange::All),
            "1h" => Some(TimeRange::Hour1),
            "4h" => Some(TimeRange::Hour4),
            "12h" => Some(TimeRange::Hour12),
            "24h" => Some(TimeRange::Hour24),
            "2d" => Some(TimeRange::Day2),
            "7d" => Some(TimeRange::Day7),
            "30d" => Some(TimeRange::Day30),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Images,
    Videos,
    Links,
}

impl MediaType {
    pub fn from_name(name: &str) -> Option<MediaType> {
        match name {
            "images" => Some(MediaType::Images),
            "videos" => Some(MediaType::Videos),
            "links" => Some(MediaType::Links),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludeType {
    Replies,
    Verified,
    Spaces,
}

impl IncludeType {
    pub fn from_name(name: &str) -> Option<IncludeType> {
        match name {
            "replies" => Some(IncludeType::Replies),
            "verified" => Some(IncludeType::Verified),
            "spaces" => Some(IncludeType::Spaces),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcludeType {
    Retweets,
    Replies,
    Links,
}

impl ExcludeType {
    pub fn from_name(name: &str) -> Option<ExcludeType> {
        match name {
            "retweets" => Some(ExcludeType::Retweets),
            "replies" => Some(ExcludeType::Replies),
            "links" => Some(ExcludeType::Links),
            _ => None,
        }
    }
}

/// The structured side of the translation. `Default` is the all-empty
/// record, which serializes to the empty query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub keyword_mode: KeywordMode,
    /// Optional OR-group, parenthesized whenever non-empty.
    #[serde(default)]
    pub any_keywords: Vec<String>,
    /// Each term emitted as a standalone `-term` token.
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub exact_phrase: String,
    #[serde(default)]
    pub from_account: String,
    #[serde(default)]
    pub to_account: String,
    #[serde(default)]
    pub mention_account: String,
    #[serde(default)]
    pub since_date: String,
    #[serde(default)]
    pub until_date: String,
    #[serde(default)]
    pub near_location: String,
    #[serde(default)]
    pub within_distance: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub time_range: TimeRange,
    /// 0 means "no filter" for all three thresholds.
    #[serde(default)]
    pub min_faves: u32,
    #[serde(default)]
    pub min_retweets: u32,
    #[serde(default)]
    pub min_replies: u32,
    #[serde(default)]
    pub media_type: Vec<MediaType>,
    #[serde(default)]
    pub include: Vec<IncludeType>,
    #[serde(default)]
    pub exclude: Vec<ExcludeType>,
    #[serde(default)]
    pub question_only: bool,
    /// Escape hatch: appended verbatim after everything else.
    #[serde(default)]
    pub custom_operators: Vec<String>,
}

impl QueryParams {
    /// Merge a sparse update into the full record, field by field.
    /// `None` fields leave the current value untouched.
    pub fn apply(&mut self, update: QueryParamsUpdate) {
        if let Some(keywords) = update.keywords {
            self.keywords = keywords;
        }
        if let Some(keyword_mode) = update.keyword_mode {
            self.keyword_mode = keyword_mode;
        }
        if let Some(any_keywords) = update.any_keywords {
            self.any_keywords = any_keywords;
        }
        if let Some(exclude_keywords) = update.exclude_keywords {
            self.exclude_keywords = exclude_keywords;
        }
        if let Some(exact_phrase) = update.exact_phrase {
            self.exact_phrase = exact_phrase;
        }
        if let Some(from_account) = update.from_account {
            self.from_account = from_account;
        }
        if let Some(to_account) = update.to_account {
            self.to_account = to_account;
        }
        if let Some(mention_account) = update.mention_account {
            self.mention_account = mention_account;
        }
        if let Some(since_date) = update.since_date {
            self.since_date = since_date;
        }
        if let Some(until_date) = update.until_date {
            self.until_date = until_date;
        }
        if let Some(near_location) = update.near_location {
            self.near_location = near_location;
        }
        if let Some(within_distance) = update.within_distance {
            self.within_distance = within_distance;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(time_range) = update.time_range {
            self.time_range = time_range;
        }
        if let Some(min_faves) = update.min_faves {
            self.min_faves = min_faves;
        }
        if let Some(min_retweets) = update.min_retweets {
            self.min_retweets = min_retweets;
        }
        if let Some(min_replies) = update.min_replies {
            self.min_replies = min_replies;
        }
        if let Some(media_type) = update.media_type {
            self.media_type = media_type;
        }
        if let Some(include) = update.include {
            self.include = include;
        }
        if let Some(exclude) = update.exclude {
            self.exclude = exclude;
        }
        if let Some(question_only) = update.question_only {
            self.question_only = question_only;
        }
        if let Some(custom_operators) = update.custom_operators {
            self.custom_operators = custom_operators;
        }
    }
}

/// Sparse counterpart of [`QueryParams`]: every field optional.
/// Used for preset application and partial edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryParamsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_mode: Option<KeywordMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_faves: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_retweets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_replies: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<Vec<MediaType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<IncludeType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<ExcludeType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_operators: Option<Vec<String>>,
}

/// Split free-form custom-operator input on newlines and commas,
/// trimming each piece and dropping empties. The split is lossy on
/// purpose; pieces are appended to the query verbatim.
pub fn split_custom_operators(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
