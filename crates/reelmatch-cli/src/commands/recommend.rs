//! `reelmatch recommend`: query the processed dataset.

use super::require_file;
use crate::error::{CliError, Result};
use crate::output;
use reelmatch::config::EXIT_COMMAND;
use reelmatch::data;
use reelmatch::recommend::ContentRecommender;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Prompt shown before every query in interactive mode.
pub(crate) const PROMPT: &str =
    "Please describe the movies your like, or type \"Exit\" to leave: ";

/// Load the dataset, then answer one query or run the prompt loop.
pub(crate) fn run(
    data_path: &Path,
    top: usize,
    query: Option<&str>,
    scores: bool,
    quiet: bool,
) -> Result<()> {
    if top == 0 {
        return Err(CliError::InvalidArgument(
            "--top must be at least 1".to_string(),
        ));
    }
    require_file(data_path)?;

    if !quiet {
        println!("Loading dataset...");
    }
    let movies = data::read_processed(data_path)?;
    let recommender = ContentRecommender::fit(movies)?;
    if !quiet {
        println!("Dataset loading complete!");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match query {
        Some(text) => answer(&recommender, text, top, scores, &mut out),
        None => {
            let stdin = io::stdin();
            run_session(&recommender, top, scores, stdin.lock(), &mut out)
        }
    }
}

/// Prompt loop: read a line, answer it, repeat until `Exit` or end of input.
pub(crate) fn run_session<R: BufRead, W: Write>(
    recommender: &ContentRecommender,
    top: usize,
    scores: bool,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let text = line.trim();
        if text == EXIT_COMMAND {
            break;
        }
        answer(recommender, text, top, scores, out)?;
    }
    debug!("prompt loop finished");
    Ok(())
}

fn answer<W: Write>(
    recommender: &ContentRecommender,
    query: &str,
    top: usize,
    scores: bool,
    out: &mut W,
) -> Result<()> {
    let recommendations = recommender.recommend(query, top)?;
    output::write_recommendations(out, &recommendations, scores)?;
    Ok(())
}
