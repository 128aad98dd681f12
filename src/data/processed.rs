use super::Movie;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write processed movies as a `title,description` CSV.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Fails if the directory or file cannot be created or written.
pub fn write_processed(path: impl AsRef<Path>, movies: &[Movie]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    if movies.is_empty() {
        writer.write_record(["title", "description"])?;
    }
    for movie in movies {
        writer.serialize(movie)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = movies.len(), "wrote processed dataset");
    Ok(())
}

/// Read a processed `title,description` CSV.
///
/// # Errors
///
/// Fails if the file cannot be read or a row lacks either column.
pub fn read_processed(path: impl AsRef<Path>) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let movies = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Movie>, csv::Error>>()?;

    info!(path = %path.display(), rows = movies.len(), "loaded processed dataset");
    Ok(movies)
}
