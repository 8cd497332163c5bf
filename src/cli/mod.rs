use clap::{Parser, Subcommand};

mod errors;
mod types;
mod validation;

pub use errors::{CliError, CliResult};
pub use types::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a query string from structured filter flags
    Build {
        #[clap(flatten)]
        filters: QueryArgs,

        /// Print the full search URL instead of the bare query
        #[clap(long, default_value = "false")]
        url: bool,

        /// Print the structured params as JSON instead of the query
        #[clap(long, default_value = "false")]
        json: bool,

        /// Also save the result as a favorite with this name
        #[clap(long)]
        save: Option<String>,
    },

    /// Decompose a query string back into structured params
    Parse {
        /// A query string, saved or hand-written
        query: String,
    },

    /// Screen a query and print its search URL; records history
    Url {
        /// The finished query string
        query: String,
    },

    /// Manage saved favorite queries
    Fav {
        #[clap(subcommand)]
        action: FavArgs,
    },

    /// Inspect or prune search history
    History {
        #[clap(subcommand)]
        action: HistoryArgs,
    },

    /// Browse the built-in template catalog
    Template {
        #[clap(subcommand)]
        action: TemplateArgs,
    },
}
