use super::{column_indices, field, parse_id, parse_number, MetadataRecord};
use crate::config::PipelineConfig;
use crate::error::Result;
use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, info, warn};

const COLUMNS: [&str; 6] = ["id", "title", "genres", "overview", "vote_average", "vote_count"];

/// Candidate row before id coercion.
struct Candidate {
    id: String,
    title: String,
    genres: String,
    overview: String,
    vote_average: Option<f64>,
    vote_count: f64,
}

/// Read the metadata table and keep the best-rated, widely-voted movies.
///
/// Rows need `vote_count > config.min_vote_count`; survivors are sorted by
/// `vote_average` (descending, stable, missing last), cut to
/// `config.top_rated_limit`, and finally rows whose id is not an integer
/// are dropped. Columns other than the six used are ignored.
///
/// # Errors
///
/// Fails if the file cannot be read, a row is malformed CSV, or a required
/// column is missing.
pub fn read_metadata(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<Vec<MetadataRecord>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let [id, title, genres, overview, vote_average, vote_count] =
        column_indices(&headers, COLUMNS, path)?;

    let mut total = 0usize;
    let mut candidates = Vec::new();
    for record in reader.records() {
        let record = record?;
        total += 1;

        let Some(votes) = parse_number(field(&record, vote_count)) else {
            continue;
        };
        if votes <= config.min_vote_count {
            continue;
        }

        candidates.push(Candidate {
            id: field(&record, id).to_string(),
            title: field(&record, title).to_string(),
            genres: field(&record, genres).to_string(),
            overview: field(&record, overview).to_string(),
            vote_average: parse_number(field(&record, vote_average)),
            vote_count: votes,
        });
    }
    debug!(total, kept = candidates.len(), "filtered metadata by vote count");

    candidates.sort_by(|a, b| compare_rating(a.vote_average, b.vote_average));
    candidates.truncate(config.top_rated_limit);

    let before = candidates.len();
    let records: Vec<MetadataRecord> = candidates
        .into_iter()
        .filter_map(|c| {
            Some(MetadataRecord {
                id: parse_id(&c.id)?,
                title: c.title,
                genres: c.genres,
                overview: c.overview,
                vote_average: c.vote_average,
                vote_count: c.vote_count,
            })
        })
        .collect();

    if records.len() < before {
        warn!(
            dropped = before - records.len(),
            "dropped metadata rows with non-numeric ids"
        );
    }
    info!(path = %path.display(), rows = records.len(), "loaded movie metadata");
    Ok(records)
}

/// Higher ratings first; missing ratings sort last.
fn compare_rating(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
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

    const HEADER: &str = "adult,id,title,genres,overview,vote_average,vote_count\n";

    #[test]
    fn test_filters_by_vote_count() {
        let file = write_csv(&format!(
            "{HEADER}False,1,Popular,[],Plot,7.0,1500\n\
             False,2,Obscure,[],Plot,9.5,20\n\
             False,3,Borderline,[],Plot,8.0,1000\n"
        ));
        let rows = read_metadata(file.path(), &PipelineConfig::default()).expect("read metadata");
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Popular"]);
    }

    #[test]
    fn test_sorts_by_rating_and_truncates() {
        let file = write_csv(&format!(
            "{HEADER}False,1,Good,[],a,7.0,2000\n\
             False,2,Best,[],b,9.0,2000\n\
             False,3,Fine,[],c,6.0,2000\n\
             False,4,Great,[],d,8.0,2000\n"
        ));
        let config = PipelineConfig::default().with_top_rated_limit(3);
        let rows = read_metadata(file.path(), &config).expect("read metadata");
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[test]
    fn test_equal_ratings_keep_file_order() {
        let file = write_csv(&format!(
            "{HEADER}False,10,First,[],a,8.0,2000\n\
             False,11,Second,[],b,8.0,2000\n"
        ));
        let rows = read_metadata(file.path(), &PipelineConfig::default()).expect("read metadata");
        assert_eq!(rows[0].id, 10);
        assert_eq!(rows[1].id, 11);
    }

    #[test]
    fn test_drops_non_numeric_ids_after_truncation() {
        let file = write_csv(&format!(
            "{HEADER}False,1997-08-20,Broken,[],a,9.0,2000\n\
             False,5,Kept,[],b,8.0,2000\n\
             False,6,CutOff,[],c,7.0,2000\n"
        ));
        let config = PipelineConfig::default().with_top_rated_limit(2);
        let rows = read_metadata(file.path(), &config).expect("read metadata");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 5);
    }

    #[test]
    fn test_missing_vote_count_is_dropped() {
        let file = write_csv(&format!(
            "{HEADER}False,1,NoVotes,[],a,9.0,\n\
             False,2,Voted,[],b,5.0,5000\n"
        ));
        let rows = read_metadata(file.path(), &PipelineConfig::default()).expect("read metadata");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Voted");
    }

    #[test]
    fn test_missing_rating_sorts_last() {
        let file = write_csv(&format!(
            "{HEADER}False,1,Unrated,[],a,,5000\n\
             False,2,Rated,[],b,3.0,5000\n"
        ));
        let rows = read_metadata(file.path(), &PipelineConfig::default()).expect("read metadata");
        assert_eq!(rows[0].title, "Rated");
        assert_eq!(rows[1].vote_average, None);
    }

    #[test]
    fn test_quoted_fields() {
        let file = write_csv(&format!(
            "{HEADER}False,862,Toy Story,\"[{{'id': 16, 'name': 'Animation'}}]\",\"Woody, a cowboy doll.\",7.7,5415\n"
        ));
        let rows = read_metadata(file.path(), &PipelineConfig::default()).expect("read metadata");
        assert_eq!(rows[0].genres, "[{'id': 16, 'name': 'Animation'}]");
        assert_eq!(rows[0].overview, "Woody, a cowboy doll.");
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("id,title\n1,Alone\n");
        let err = read_metadata(file.path(), &PipelineConfig::default())
            .expect_err("genres column is missing");
        assert!(err.to_string().contains("genres"));
    }

    #[test]
    fn test_missing_file() {
        let result = read_metadata("/nonexistent/movies.csv", &PipelineConfig::default());
        assert!(result.is_err());
    }
}
