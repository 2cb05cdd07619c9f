//! CLI frontend for the Night City deduction game.

mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(
    name = "clue",
    about = "Clue: Night City Protocol, a single-player deduction game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive investigation
    Play {
        /// RNG seed for a reproducible case
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of probes before the accusation is forced
        #[arg(short, long, default_value_t = clue_case::config::DEFAULT_TURN_LIMIT)]
        turns: u32,

        /// JSON catalog file (default: built-in Night City catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Scatter a randomized number of clues
        #[arg(long)]
        varied: bool,

        /// Questioning and tracing remove the clues they find
        #[arg(long)]
        consume_leads: bool,

        /// Match leads by entity tag instead of text search
        #[arg(long)]
        tagged: bool,
    },

    /// List suspects, weapons, and locations
    Catalog {
        /// JSON catalog file (default: built-in Night City catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Print a generated case with its solution and every clue (spoilers)
    Inspect {
        /// RNG seed of the case to generate
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON catalog file (default: built-in Night City catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Scatter a randomized number of clues
        #[arg(long)]
        varied: bool,

        /// Output format: table, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            turns,
            catalog,
            varied,
            consume_leads,
            tagged,
        } => commands::play::run(
            catalog.as_deref(),
            commands::Rules {
                seed,
                turns,
                varied,
                consume_leads,
                tagged,
            },
        ),
        Commands::Catalog { catalog } => commands::catalog::run(catalog.as_deref()),
        Commands::Inspect {
            seed,
            catalog,
            varied,
            format,
        } => commands::inspect::run(catalog.as_deref(), seed, varied, &format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `CLUE_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_env("CLUE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
