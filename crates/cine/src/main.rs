//! Cine Search - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cine` / `cine serve` | Run the HTTP search API |
//! | `cine search <QUERY>` | Run one search and print the movies as JSON |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

/// Command line interface for Cine Search
#[derive(Parser, Debug)]
#[command(name = "cine")]
#[command(about = "Cine Search - Semantic movie search over Elasticsearch")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP search API (default)
    Serve,
    /// Run a single search and print the ranked movies as JSON
    Search {
        /// Free-text query
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cine::run_server(config)
            .await
            .context("Search server failed")?,
        Command::Search { query } => {
            let movies = cine::run_search(config, &query)
                .await
                .context("Search failed")?;
            let output =
                serde_json::to_string_pretty(&movies).context("Failed to render movies")?;
            println!("{output}");
        }
    }

    Ok(())
}
