//! Output formatting utilities

use colored::Colorize;
use reelmatch::recommend::Recommendation;
use std::io::{self, Write};

/// Heading printed above every recommendation list.
pub(crate) const RESULTS_HEADER: &str = "Here's a list of movies tailored to your interests:";

/// Print a status line
pub(crate) fn status(message: &str) {
    println!("{}", message.cyan());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Write a numbered recommendation list.
pub(crate) fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    show_scores: bool,
) -> io::Result<()> {
    writeln!(out, "{}", RESULTS_HEADER.green().bold())?;
    for rec in recommendations {
        if show_scores {
            writeln!(out, "{rec} {}", format!("({:.3})", rec.score).dimmed())?;
        } else {
            writeln!(out, "{rec}")?;
        }
    }
    Ok(())
}
