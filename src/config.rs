//! Default configuration for the recommender.
//!
//! Thresholds, file locations and patterns are compile-time constants;
//! runtime overrides come from CLI arguments and environment variables,
//! gathered into a [`PipelineConfig`].

use std::path::{Path, PathBuf};

/// Movies need strictly more votes than this to be considered.
pub const MIN_VOTE_COUNT: f64 = 1000.0;

/// Number of best-rated movies kept after filtering by vote count.
pub const TOP_RATED_LIMIT: usize = 500;

/// Number of recommendations returned per query.
pub const DEFAULT_TOP_N: usize = 5;

/// Default location of the raw movie metadata table.
pub const DEFAULT_METADATA_PATH: &str = "data/movies_metadata.csv";

/// Default location of the raw keywords table.
pub const DEFAULT_KEYWORDS_PATH: &str = "data/keywords.csv";

/// Default location of the processed `title,description` table.
pub const DEFAULT_PROCESSED_PATH: &str = "data/processed_data.csv";

/// Line that ends the interactive prompt loop (compared after trimming).
pub const EXIT_COMMAND: &str = "Exit";

/// Extracts the `name` values from a serialized dictionary list such as
/// `[{'id': 18, 'name': 'Drama'}]`.
pub const NAME_PATTERN: &str = r"'name': '([^']+)'";

/// Tokens are runs of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Paths and thresholds for the data preparation pipeline.
///
/// # Examples
///
/// ```
/// use reelmatch::config::PipelineConfig;
///
/// let config = PipelineConfig::default()
///     .with_min_vote_count(50.0)
///     .with_top_rated_limit(10);
/// assert_eq!(config.top_rated_limit, 10);
/// assert!(config.output_path.ends_with("processed_data.csv"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Raw movie metadata CSV.
    pub metadata_path: PathBuf,
    /// Raw keywords CSV.
    pub keywords_path: PathBuf,
    /// Destination of the processed CSV.
    pub output_path: PathBuf,
    /// Exclusive lower bound on `vote_count`.
    pub min_vote_count: f64,
    /// Rows kept after sorting by `vote_average`.
    pub top_rated_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            keywords_path: PathBuf::from(DEFAULT_KEYWORDS_PATH),
            output_path: PathBuf::from(DEFAULT_PROCESSED_PATH),
            min_vote_count: MIN_VOTE_COUNT,
            top_rated_limit: TOP_RATED_LIMIT,
        }
    }
}

impl PipelineConfig {
    /// Set the metadata input path.
    #[must_use]
    pub fn with_metadata_path(mut self, path: impl AsRef<Path>) -> Self {
        self.metadata_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the keywords input path.
    #[must_use]
    pub fn with_keywords_path(mut self, path: impl AsRef<Path>) -> Self {
        self.keywords_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the processed output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the vote count threshold.
    #[must_use]
    pub fn with_min_vote_count(mut self, min_vote_count: f64) -> Self {
        self.min_vote_count = min_vote_count;
        self
    }

    /// Set how many top-rated movies are kept.
    #[must_use]
    pub fn with_top_rated_limit(mut self, limit: usize) -> Self {
        self.top_rated_limit = limit;
        self
    }
}
