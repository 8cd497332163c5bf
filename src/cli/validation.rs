use once_cell::sync::Lazy;
use regex::Regex;

use crate::cli::errors::{CliError, CliResult};
use crate::cli::types::{preset_update, QueryArgs};
use crate::query::{ExcludeType, IncludeType, Language, MediaType, TimeRange};

static DISTANCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(km|mi)$").unwrap());

/// Validates a YYYY-MM-DD date operand
pub fn validate_date(field: &str, date: &str) -> CliResult<()> {
    if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(CliError::validation(
            field,
            format!("expected YYYY-MM-DD, got {date:?}"),
        ));
    }
    Ok(())
}

/// Validates a within: radius like 10km or 5mi
pub fn validate_distance(distance: &str) -> CliResult<()> {
    if !DISTANCE.is_match(distance) {
        return Err(CliError::validation(
            "within",
            format!("expected a radius like 10km or 5mi, got {distance:?}"),
        ));
    }
    Ok(())
}

/// Validates an account handle: something must remain after stripping
/// leading @s, and handles never contain whitespace
pub fn validate_account(field: &str, handle: &str) -> CliResult<()> {
    let stripped = handle.trim().trim_start_matches('@').trim();
    if stripped.is_empty() {
        return Err(CliError::validation(field, "handle is empty"));
    }
    if stripped.contains(char::is_whitespace) {
        return Err(CliError::validation(field, "handles cannot contain spaces"));
    }
    Ok(())
}

pub fn parse_language(code: &str) -> CliResult<Language> {
    Language::from_code(code)
        .ok_or_else(|| CliError::validation("lang", format!("unknown language code {code:?}")))
}

pub fn parse_time_range(value: &str) -> CliResult<TimeRange> {
    TimeRange::from_value(value)
        .ok_or_else(|| CliError::validation("time", format!("unknown time window {value:?}")))
}

pub fn parse_media(name: &str) -> CliResult<MediaType> {
    MediaType::from_name(name).ok_or_else(|| {
        CliError::validation("media", format!("expected images|videos|links, got {name:?}"))
    })
}

pub fn parse_include(name: &str) -> CliResult<IncludeType> {
    IncludeType::from_name(name).ok_or_else(|| {
        CliError::validation(
            "include",
            format!("expected replies|verified|spaces, got {name:?}"),
        )
    })
}

pub fn parse_exclude(name: &str) -> CliResult<ExcludeType> {
    ExcludeType::from_name(name).ok_or_else(|| {
        CliError::validation(
            "exclude",
            format!("expected retweets|replies|links, got {name:?}"),
        )
    })
}

/// Validates everything in one pass so the user sees the first problem
/// before any output is produced
pub fn validate_query_args(args: &QueryArgs) -> CliResult<()> {
    if let Some(ref since) = args.since {
        validate_date("since", since)?;
    }
    if let Some(ref until) = args.until {
        validate_date("until", until)?;
    }
    if let Some(ref within) = args.within {
        validate_distance(within)?;
    }
    if let Some(ref from) = args.from {
        validate_account("from", from)?;
    }
    if let Some(ref to) = args.to {
        validate_account("to", to)?;
    }
    if let Some(ref mention) = args.mention {
        validate_account("mention", mention)?;
    }
    if let Some(ref lang) = args.lang {
        parse_language(lang)?;
    }
    if let Some(ref time) = args.time_range {
        parse_time_range(time)?;
    }
    for name in &args.media {
        parse_media(name)?;
    }
    for name in &args.include {
        parse_include(name)?;
    }
    for name in &args.exclude {
        parse_exclude(name)?;
    }
    if let Some(ref preset) = args.preset {
        if preset_update(preset).is_none() {
            return Err(CliError::validation(
                "preset",
                format!("expected quality|customer|resource|visual, got {preset:?}"),
            ));
        }
    }

    Ok(())
}
