//! Movie dataset preparation.
//!
//! Turns the raw metadata and keywords tables into one `title,description`
//! row per movie:
//!
//! 1. [`read_metadata`]: vote-count filter, rating sort, top-N cut, id coercion
//! 2. [`read_keywords`]: deduplicate by id
//! 3. [`combine`]: inner join on id and build descriptions
//! 4. [`write_processed`]: persist the result
//!
//! [`prepare`] runs the whole pipeline from a [`PipelineConfig`].

mod clean;
mod keywords;
mod merge;
mod metadata;
mod processed;

pub use clean::{clean_genres, clean_keywords, extract_names};
pub use keywords::read_keywords;
pub use merge::{build_description, combine};
pub use metadata::read_metadata;
pub use processed::{read_processed, write_processed};

use crate::config::PipelineConfig;
use crate::error::{RecommendError, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One row of the metadata table after filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    /// Numeric movie id.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Serialized dictionary list of genres.
    pub genres: String,
    /// Plot summary.
    pub overview: String,
    /// Mean rating, if present.
    pub vote_average: Option<f64>,
    /// Number of ratings.
    pub vote_count: f64,
}

/// One row of the keywords table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRecord {
    /// Numeric movie id.
    pub id: i64,
    /// Serialized dictionary list of keywords.
    pub keywords: String,
}

/// A processed movie: the unit the recommender ranks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title.
    pub title: String,
    /// `genres. keywords. overview`
    pub description: String,
}

/// Run the full preparation pipeline and write the processed table.
///
/// # Errors
///
/// Fails if either input cannot be read or the output cannot be written.
pub fn prepare(config: &PipelineConfig) -> Result<Vec<Movie>> {
    let metadata = read_metadata(&config.metadata_path, config)?;
    let keywords = read_keywords(&config.keywords_path)?;
    let movies = combine(&metadata, &keywords);
    write_processed(&config.output_path, &movies)?;

    info!(
        metadata = metadata.len(),
        keywords = keywords.len(),
        movies = movies.len(),
        output = %config.output_path.display(),
        "prepared movie dataset"
    );
    Ok(movies)
}

/// Locate named columns in a header row.
fn column_indices<const N: usize>(
    headers: &StringRecord,
    names: [&str; N],
    path: &Path,
) -> Result<[usize; N]> {
    let mut indices = [0usize; N];
    for (slot, name) in indices.iter_mut().zip(names) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| RecommendError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })?;
    }
    Ok(indices)
}

/// Text of field `idx`, empty when the row is short.
fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

/// Parse a number the way a lenient numeric coercion would: surrounding
/// whitespace ignored, anything unparsable or non-finite becomes `None`.
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an identifier; only integral numbers are valid ids.
fn parse_id(text: &str) -> Option<i64> {
    let value = parse_number(text)?;
    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
