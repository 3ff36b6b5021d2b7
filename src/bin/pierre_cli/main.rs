// ABOUTME: Command-line interface for the Pierre activity log
// ABOUTME: Classifies free-text entries and reads or writes the local activity log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # pierre-cli
//!
//! ## Usage
//!
//! ```bash
//! # Classify entries (JSON per line)
//! cargo run --bin pierre-cli -- classify "ran 5k in 25 minutes" "slept 8 hours"
//!
//! # One-line summaries from stdin
//! cat entries.txt | cargo run --bin pierre-cli -- classify --stdin --summary
//!
//! # Store an entry, then list the latest sleep entries
//! cargo run --bin pierre-cli -- log "slept 7 hours"
//! cargo run --bin pierre-cli -- list --type sleep --limit 5
//! ```

mod commands;

use std::env;
use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_activity_server::constants::{defaults, env_vars};

use commands::classify::OutputMode;

#[derive(Parser)]
#[command(
    name = "pierre-cli",
    version,
    about = "Pierre Activity Log CLI",
    long_about = "Classify natural-language fitness entries and manage the local activity log"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify entries without storing them
    Classify {
        /// Entries to classify
        texts: Vec<String>,

        /// Read one entry per line from stdin instead
        #[arg(long, conflicts_with = "texts")]
        stdin: bool,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// Print one summary line per entry instead of JSON
        #[arg(long, conflicts_with = "pretty")]
        summary: bool,
    },

    /// Classify one entry and store it in the activity log
    Log {
        /// Entry text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Database URL override
        #[arg(long)]
        database_url: Option<String>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the most recent activity log entries
    List {
        /// Maximum entries to print (1-100)
        #[arg(long)]
        limit: Option<u32>,

        /// Only entries of this type
        #[arg(long = "type")]
        activity_type: Option<String>,

        /// Database URL override
        #[arg(long)]
        database_url: Option<String>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn resolve_database_url(database_url: Option<String>) -> String {
    database_url
        .or_else(|| env::var(env_vars::DATABASE_URL).ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Classify {
            texts,
            stdin,
            pretty,
            summary,
        } => {
            let mode = if summary {
                OutputMode::Summary
            } else if pretty {
                OutputMode::Pretty
            } else {
                OutputMode::Json
            };
            commands::classify::run(texts, stdin, mode)?;
        }
        Command::Log {
            text,
            database_url,
            pretty,
        } => {
            let database_url = resolve_database_url(database_url);
            commands::activity_log::log(&database_url, &text.join(" "), pretty).await?;
        }
        Command::List {
            limit,
            activity_type,
            database_url,
            pretty,
        } => {
            let database_url = resolve_database_url(database_url);
            commands::activity_log::list(&database_url, limit, activity_type.as_deref(), pretty)
                .await?;
        }
    }

    Ok(())
}
