//! Subcommand implementations.

pub(crate) mod prepare;
pub(crate) mod recommend;

use crate::error::{CliError, Result};
use std::path::Path;

/// Fail early with a dedicated error when an input file is absent.
pub(crate) fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.to_path_buf()))
    }
}
