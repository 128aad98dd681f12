//! reelmatch - content-based movie recommendations
//!
//! Usage:
//!   reelmatch prepare                       # Build data/processed_data.csv
//!   reelmatch prepare --min-votes 500       # Loosen the popularity filter
//!   reelmatch recommend                     # Interactive prompt
//!   reelmatch recommend --query "heist"     # One-shot query

use clap::{Parser, Subcommand};
use colored::Colorize;
use reelmatch::config::{self, PipelineConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

/// reelmatch - recommend movies from a free-text description
#[derive(Parser)]
#[command(name = "reelmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean and merge the raw tables into a processed dataset
    Prepare {
        /// Movie metadata CSV
        #[arg(long, value_name = "FILE", env = "REELMATCH_METADATA", default_value = config::DEFAULT_METADATA_PATH)]
        metadata: PathBuf,

        /// Keywords CSV
        #[arg(long, value_name = "FILE", env = "REELMATCH_KEYWORDS", default_value = config::DEFAULT_KEYWORDS_PATH)]
        keywords: PathBuf,

        /// Processed output CSV
        #[arg(short, long, value_name = "FILE", env = "REELMATCH_DATA", default_value = config::DEFAULT_PROCESSED_PATH)]
        output: PathBuf,

        /// Keep movies with strictly more votes than this
        #[arg(long, default_value_t = config::MIN_VOTE_COUNT)]
        min_votes: f64,

        /// Number of best-rated movies to keep
        #[arg(long, default_value_t = config::TOP_RATED_LIMIT)]
        limit: usize,
    },

    /// Recommend movies for a description
    Recommend {
        /// Processed dataset CSV
        #[arg(long, value_name = "FILE", env = "REELMATCH_DATA", default_value = config::DEFAULT_PROCESSED_PATH)]
        data: PathBuf,

        /// Number of movies to recommend
        #[arg(short = 'n', long, default_value_t = config::DEFAULT_TOP_N)]
        top: usize,

        /// Answer a single query instead of prompting
        #[arg(long)]
        query: Option<String>,

        /// Show similarity scores
        #[arg(long)]
        scores: bool,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "warn,reelmatch=debug,reelmatch_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Prepare {
            metadata,
            keywords,
            output,
            min_votes,
            limit,
        } => {
            let config = PipelineConfig::default()
                .with_metadata_path(metadata)
                .with_keywords_path(keywords)
                .with_output_path(output)
                .with_min_vote_count(min_votes)
                .with_top_rated_limit(limit);
            commands::prepare::run(&config, cli.quiet)
        }

        Commands::Recommend {
            data,
            top,
            query,
            scores,
        } => commands::recommend::run(&data, top, query.as_deref(), scores, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            e.exit_code()
        }
    }
}
