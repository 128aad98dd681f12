use super::{clean_genres, clean_keywords, KeywordRecord, MetadataRecord, Movie};
use std::collections::HashMap;
use tracing::debug;

/// Inner-join metadata and keywords on id, in metadata order.
///
/// Each joined row becomes a [`Movie`] whose description is
/// `genres. keywords. overview` with genre and keyword names extracted.
///
/// # Examples
///
/// ```
/// use reelmatch::data::{combine, KeywordRecord, MetadataRecord};
///
/// let metadata = vec![MetadataRecord {
///     id: 862,
///     title: "Toy Story".to_string(),
///     genres: "[{'id': 16, 'name': 'Animation'}]".to_string(),
///     overview: "Toys come to life.".to_string(),
///     vote_average: Some(7.7),
///     vote_count: 5415.0,
/// }];
/// let keywords = vec![KeywordRecord {
///     id: 862,
///     keywords: "[{'id': 931, 'name': 'jealousy'}, {'id': 4290, 'name': 'toy'}]".to_string(),
/// }];
///
/// let movies = combine(&metadata, &keywords);
/// assert_eq!(movies[0].description, "Animation. jealousy, toy. Toys come to life.");
/// ```
#[must_use]
pub fn combine(metadata: &[MetadataRecord], keywords: &[KeywordRecord]) -> Vec<Movie> {
    let mut by_id: HashMap<i64, &KeywordRecord> = HashMap::with_capacity(keywords.len());
    for record in keywords {
        by_id.entry(record.id).or_insert(record);
    }

    let movies: Vec<Movie> = metadata
        .iter()
        .filter_map(|meta| {
            let kw = by_id.get(&meta.id)?;
            Some(Movie {
                title: meta.title.clone(),
                description: build_description(
                    &clean_genres(&meta.genres),
                    &clean_keywords(&kw.keywords),
                    &meta.overview,
                ),
            })
        })
        .collect();

    debug!(
        metadata = metadata.len(),
        joined = movies.len(),
        "joined metadata with keywords"
    );
    movies
}

/// Concatenate the three text fields into one description.
///
/// Missing fields arrive as empty strings and stay empty; they are never
/// rendered as a `nan` placeholder, so `build_description("", "", "")` is `". . "`.
#[must_use]
pub fn build_description(genres: &str, keywords: &str, overview: &str) -> String {
    format!("{genres}. {keywords}. {overview}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: i64, title: &str) -> MetadataRecord {
        MetadataRecord {
            id,
            title: title.to_string(),
            genres: "[{'id': 18, 'name': 'Drama'}]".to_string(),
            overview: format!("{title} overview"),
            vote_average: Some(7.0),
            vote_count: 2000.0,
        }
    }

    fn kw(id: i64, name: &str) -> KeywordRecord {
        KeywordRecord {
            id,
            keywords: format!("[{{'id': 1, 'name': '{name}'}}]"),
        }
    }

    #[test]
    fn test_inner_join_drops_unmatched() {
        let metadata = vec![meta(1, "One"), meta(2, "Two"), meta(3, "Three")];
        let keywords = vec![kw(3, "three"), kw(1, "one"), kw(99, "orphan")];
        let movies = combine(&metadata, &keywords);

        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Three"]);
    }

    #[test]
    fn test_description_format() {
        let movies = combine(&[meta(1, "One")], &[kw(1, "courtroom")]);
        assert_eq!(movies[0].description, "Drama. courtroom. One overview");
    }

    #[test]
    fn test_empty_fields() {
        let mut record = meta(1, "Blank");
        record.genres = "[]".to_string();
        record.overview = String::new();
        let keywords = vec![KeywordRecord {
            id: 1,
            keywords: "[]".to_string(),
        }];
        let movies = combine(&[record], &keywords);
        assert_eq!(movies[0].description, ". . ");
    }

    #[test]
    fn test_missing_overview_is_not_nan() {
        let mut record = meta(1, "Silent");
        record.overview = String::new();
        let movies = combine(&[record], &[kw(1, "quiet")]);
        assert!(movies[0].description.ends_with(". "));
        assert!(!movies[0].description.contains("nan"));
        assert_eq!(build_description("Drama", "quiet", ""), "Drama. quiet. ");
    }

    #[test]
    fn test_duplicate_keyword_ids_use_first() {
        let movies = combine(&[meta(1, "One")], &[kw(1, "first"), kw(1, "second")]);
        assert_eq!(movies.len(), 1);
        assert!(movies[0].description.contains("first"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(combine(&[], &[kw(1, "x")]).is_empty());
        assert!(combine(&[meta(1, "One")], &[]).is_empty());
    }
}
