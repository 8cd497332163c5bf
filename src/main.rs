use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use inquire::error::InquireResult;

mod cli;
mod config;
mod eid;
mod favorites;
mod history;
mod query;
mod sanitize;
mod search_url;
mod storage;
mod templates;
#[cfg(test)]
mod tests;
mod timefmt;

use cli::{CliError, Command, FavArgs, HistoryArgs, TemplateArgs};
use config::Config;
use eid::Eid;
use favorites::FavoriteStore;
use history::HistoryStore;
use query::{build_query, parse_query};
use sanitize::{is_valid_query_string, sanitize_name};
use search_url::build_search_url_on;
use storage::{BackendLocal, StorageManager};
use templates::Region;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();

    let config = Config::load()?;
    log::debug!("data dir: {}", config.base_path());

    let storage: Arc<dyn StorageManager> = Arc::new(BackendLocal::new(config.base_path())?);
    let favorites = FavoriteStore::load(storage.clone())?;
    let history = HistoryStore::load(storage.clone(), config.history_limit)?;

    match args.command {
        Command::Build {
            filters,
            url,
            json,
            save,
        } => {
            let params = filters.into_params()?;
            let query = build_query(&params);

            if let Some(name) = save {
                let name = sanitize_name(&name)
                    .ok_or_else(|| CliError::validation("name", "unusable after sanitization"))?;
                screen_query(&query)?;
                let favorite = favorites.add(&name, &query)?;
                println!("{}", serde_json::to_string_pretty(&favorite).unwrap());
                return Ok(());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&params).unwrap());
            } else if url {
                screen_query(&query)?;
                println!("{}", build_search_url_on(&config.platform_domain, &query));
            } else {
                println!("{query}");
            }
            Ok(())
        }

        Command::Parse { query } => {
            let params = parse_query(&query);
            println!("{}", serde_json::to_string_pretty(&params).unwrap());
            Ok(())
        }

        Command::Url { query } => {
            screen_query(&query)?;
            println!("{}", build_search_url_on(&config.platform_domain, &query));
            history.record(&query)?;
            Ok(())
        }

        Command::Fav { action } => match action {
            FavArgs::Add { name, query } => {
                let name = sanitize_name(&name)
                    .ok_or_else(|| CliError::validation("name", "unusable after sanitization"))?;
                screen_query(&query)?;
                let favorite = favorites.add(&name, &query)?;
                println!("{}", serde_json::to_string_pretty(&favorite).unwrap());
                Ok(())
            }

            FavArgs::List { json } => {
                let list = favorites.list();
                if json {
                    println!("{}", serde_json::to_string_pretty(&list).unwrap());
                    return Ok(());
                }
                if list.is_empty() {
                    println!("No favorites saved yet");
                    return Ok(());
                }
                for favorite in list {
                    println!(
                        "{}  {} ({})",
                        favorite.id,
                        favorite.name,
                        timefmt::format_relative(favorite.updated_at)
                    );
                    println!("    {}", favorite.query);
                }
                Ok(())
            }

            FavArgs::Rm { id, yes } => {
                let id = Eid::from(id);
                let favorite = favorites
                    .find(&id)
                    .ok_or_else(|| CliError::not_found("favorite", id.to_string()))?;

                if !yes {
                    match inquire::prompt_confirmation(format!(
                        "Are you sure you want to delete \"{}\"?",
                        favorite.name
                    )) {
                        InquireResult::Ok(true) => {}
                        InquireResult::Ok(false) => return Ok(()),
                        InquireResult::Err(err) => bail!("An error occurred: {}", err),
                    }
                }

                favorites.remove(&id)?;
                println!("1 favorite removed");
                Ok(())
            }

            FavArgs::Update { id, name, query } => {
                if name.is_none() && query.is_none() {
                    println!("This update request does nothing");
                    return Ok(());
                }

                let name = match name {
                    Some(raw) => Some(sanitize_name(&raw).ok_or_else(|| {
                        CliError::validation("name", "unusable after sanitization")
                    })?),
                    None => None,
                };
                if let Some(ref query) = query {
                    screen_query(query)?;
                }

                let id = Eid::from(id);
                let favorite = favorites
                    .update(&id, name, query)?
                    .ok_or_else(|| CliError::not_found("favorite", id.to_string()))?;
                println!("{}", serde_json::to_string_pretty(&favorite).unwrap());
                Ok(())
            }

            FavArgs::Url { id } => {
                let id = Eid::from(id);
                let favorite = favorites
                    .find(&id)
                    .ok_or_else(|| CliError::not_found("favorite", id.to_string()))?;
                screen_query(&favorite.query)?;
                println!(
                    "{}",
                    build_search_url_on(&config.platform_domain, &favorite.query)
                );
                Ok(())
            }
        },

        Command::History { action } => match action {
            HistoryArgs::List { json } => {
                let list = history.list();
                if json {
                    println!("{}", serde_json::to_string_pretty(&list).unwrap());
                    return Ok(());
                }
                if list.is_empty() {
                    println!("No search history yet");
                    return Ok(());
                }
                for entry in list {
                    println!(
                        "{}  ({})",
                        entry.id,
                        timefmt::format_relative(entry.searched_at)
                    );
                    println!("    {}", entry.query);
                }
                Ok(())
            }

            HistoryArgs::Rm { id } => {
                let id = Eid::from(id);
                if !history.remove(&id)? {
                    return Err(CliError::not_found("history entry", id.to_string()).into());
                }
                println!("1 entry removed");
                Ok(())
            }

            HistoryArgs::Clear { yes } => {
                if !yes {
                    match inquire::prompt_confirmation(
                        "Are you sure you want to clear all search history?",
                    ) {
                        InquireResult::Ok(true) => {}
                        InquireResult::Ok(false) => return Ok(()),
                        InquireResult::Err(err) => bail!("An error occurred: {}", err),
                    }
                }

                let count = history.clear()?;
                println!("{count} entries removed");
                Ok(())
            }
        },

        Command::Template { action } => match action {
            TemplateArgs::List { region, json } => {
                let region = match region {
                    Some(ref name) => Region::from_name(name).ok_or_else(|| {
                        CliError::validation(
                            "region",
                            format!("expected zh|ja|es|en|global, got {name:?}"),
                        )
                    })?,
                    None => config.default_region,
                };

                let list = templates::by_region(region);
                if json {
                    println!("{}", serde_json::to_string_pretty(&list).unwrap());
                    return Ok(());
                }
                println!("{} templates — {}", list.len(), region.label());
                for template in list {
                    println!("{}  {} — {}", template.id, template.name, template.description);
                    println!("    {}", template.query);
                }
                Ok(())
            }

            TemplateArgs::Show { id } => {
                let template = templates::find(&id)
                    .ok_or_else(|| CliError::not_found("template", id))?;
                let output = serde_json::json!({
                    "template": template,
                    "params": parse_query(template.query),
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
                Ok(())
            }

            TemplateArgs::Url { id } => {
                let template = templates::find(&id)
                    .ok_or_else(|| CliError::not_found("template", id))?;
                println!(
                    "{}",
                    build_search_url_on(&config.platform_domain, template.query)
                );
                Ok(())
            }
        },
    }
}

/// Gate every URL-bound query behind the sanitizer's blocklist.
fn screen_query(query: &str) -> Result<(), CliError> {
    if query.trim().is_empty() {
        return Err(CliError::invalid_input(
            "query is empty; add keywords or filters",
        ));
    }
    if !is_valid_query_string(query) {
        return Err(CliError::UnsafeQuery {
            query: query.to_string(),
        });
    }
    Ok(())
}
