//! # termdeck CLI
//!
//! The `termdeck` binary curates the search-term settings document from the
//! shell and starts the HTTP server used by the browser operator page.
//!
//! ## Usage
//!
//! ```bash
//! termdeck --config ./config/termdeck.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `termdeck list` | Print the configured search terms |
//! | `termdeck add <term>` | Append a search term |
//! | `termdeck update <index> <term>` | Replace the term at an index |
//! | `termdeck remove <index>` | Remove the term at an index |
//! | `termdeck serve` | Start the HTTP server |
//!
//! Every mutating command validates its input, backs up the settings file,
//! and replaces it atomically. It is the same transaction the HTTP API runs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use termdeck::config;
use termdeck::server;
use termdeck::store::SettingsStore;

/// termdeck curates the search-term settings document with validated,
/// backed-up writes.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/termdeck.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "termdeck",
    about = "termdeck — curate search-term settings with validated, backed-up writes",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/termdeck.toml`. The settings file location,
    /// backup directory, and server bind address are read from this file.
    #[arg(long, global = true, default_value = "./config/termdeck.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the configured search terms.
    ///
    /// Shows each term with its index, plus the effective base URL external
    /// consumers use to build search queries.
    List,

    /// Append a search term.
    ///
    /// The term must be 1–100 characters of ASCII letters, digits, and
    /// single interior hyphens, and must not already be configured.
    Add {
        /// The search term to append (e.g., `Python-Engineer`).
        term: String,
    },

    /// Replace the search term at an index.
    Update {
        /// Zero-based index of the term to replace.
        index: usize,
        /// The replacement term.
        term: String,
    },

    /// Remove the search term at an index.
    ///
    /// Later terms shift left; their relative order is preserved.
    Remove {
        /// Zero-based index of the term to remove.
        index: usize,
    },

    /// Start the HTTP server.
    ///
    /// Binds to `[server].bind` and serves the settings API until the
    /// process is terminated.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;
    let store = SettingsStore::new(&cfg.settings.path, &cfg.settings.backup_dir);

    match cli.command {
        Commands::List => {
            let list = store.list()?;
            for (i, term) in list.search_terms.iter().enumerate() {
                println!("{:3}  {}", i, term);
            }
            println!("{} search terms, base URL: {}", list.count, list.base_url);
        }
        Commands::Add { term } => {
            let added = store.add(&term)?;
            println!("Added \"{}\" (backup: {})", added.term, added.backup);
        }
        Commands::Update { index, term } => {
            let updated = store.update(index, &term)?;
            println!(
                "Replaced \"{}\" with \"{}\" (backup: {})",
                updated.old_term, updated.new_term, updated.backup
            );
        }
        Commands::Remove { index } => {
            let removed = store.remove(index)?;
            println!("Removed \"{}\" (backup: {})", removed.term, removed.backup);
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
