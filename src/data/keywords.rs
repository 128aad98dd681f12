use super::{column_indices, field, parse_id, KeywordRecord};
use crate::error::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Read the keywords table, keeping the first row for each id.
///
/// Rows whose id is not an integer are skipped.
///
/// # Errors
///
/// Fails if the file cannot be read, a row is malformed CSV, or the `id` or
/// `keywords` column is missing.
pub fn read_keywords(path: impl AsRef<Path>) -> Result<Vec<KeywordRecord>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let [id, keywords] = column_indices(&headers, ["id", "keywords"], path)?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut duplicates = 0usize;
    let mut invalid = 0usize;

    for record in reader.records() {
        let record = record?;
        let Some(movie_id) = parse_id(field(&record, id)) else {
            invalid += 1;
            continue;
        };
        if !seen.insert(movie_id) {
            duplicates += 1;
            continue;
        }
        records.push(KeywordRecord {
            id: movie_id,
            keywords: field(&record, keywords).to_string(),
        });
    }

    if invalid > 0 {
        warn!(invalid, "skipped keyword rows with non-numeric ids");
    }
    info!(
        path = %path.display(),
        rows = records.len(),
        duplicates,
        "loaded keywords"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_keeps_first_duplicate() {
        let file = write_csv(
            "id,keywords\n\
             1,\"[{'id': 1, 'name': 'first'}]\"\n\
             2,[]\n\
             1,\"[{'id': 2, 'name': 'second'}]\"\n",
        );
        let rows = read_keywords(file.path()).expect("read keywords");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert!(rows[0].keywords.contains("first"));
        assert_eq!(rows[1].id, 2);
    }

    #[test]
    fn test_skips_invalid_ids() {
        let file = write_csv("id,keywords\nabc,[]\n7,[]\n");
        let rows = read_keywords(file.path()).expect("read keywords");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 7);
    }

    #[test]
    fn test_column_order_independent() {
        let file = write_csv("keywords,id\n[],3\n");
        let rows = read_keywords(file.path()).expect("read keywords");
        assert_eq!(rows[0].id, 3);
        assert_eq!(rows[0].keywords, "[]");
    }

    #[test]
    fn test_missing_keywords_column() {
        let file = write_csv("id,tags\n1,[]\n");
        assert!(read_keywords(file.path()).is_err());
    }
}
