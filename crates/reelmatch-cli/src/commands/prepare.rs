//! `reelmatch prepare`: build the processed dataset.

use super::require_file;
use crate::error::Result;
use crate::output;
use reelmatch::config::PipelineConfig;
use reelmatch::data;

/// Run the cleaning and merge pipeline.
pub(crate) fn run(config: &PipelineConfig, quiet: bool) -> Result<()> {
    require_file(&config.metadata_path)?;
    require_file(&config.keywords_path)?;

    let movies = data::prepare(config)?;

    if !quiet {
        output::status("Processed dataset written");
        output::kv("Movies", movies.len());
        output::kv("Output", config.output_path.display());
    }
    Ok(())
}
