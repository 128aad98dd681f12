//! TF-IDF content recommender over processed movie descriptions.

use crate::data::Movie;
use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::similarity::top_k_rows;
use crate::text::tokenize::RegexTokenizer;
use crate::text::vectorize::TfidfVectorizer;
use std::fmt;
use tracing::{debug, info};

/// A ranked recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// 1-based position in the result list.
    pub rank: usize,
    /// Movie title.
    pub title: String,
    /// Cosine similarity to the query, in `[0, 1]`.
    pub score: f64,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.rank, self.title)
    }
}

/// Recommender holding the fitted vectorizer and document matrix.
///
/// All movies are scored on every query; there is no index.
#[allow(missing_debug_implementations)]
pub struct ContentRecommender {
    movies: Vec<Movie>,
    vectorizer: TfidfVectorizer,
    matrix: Matrix<f64>,
}

impl ContentRecommender {
    /// Fit TF-IDF weights on every movie description.
    ///
    /// Descriptions are tokenized into words of two or more characters,
    /// lowercased, and stripped of English stop words.
    ///
    /// # Errors
    ///
    /// Fails when `movies` is empty or no description contains a usable term.
    pub fn fit(movies: Vec<Movie>) -> Result<Self> {
        if movies.is_empty() {
            return Err(RecommendError::InvalidInput(
                "Cannot build a recommender from an empty movie list".to_string(),
            ));
        }

        let mut vectorizer = TfidfVectorizer::new()
            .with_tokenizer(Box::new(RegexTokenizer::default()))
            .with_stop_words_english();

        let descriptions: Vec<&str> = movies.iter().map(|m| m.description.as_str()).collect();
        let matrix = vectorizer.fit_transform(&descriptions)?;

        info!(
            movies = movies.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "fitted content recommender"
        );
        Ok(Self {
            movies,
            vectorizer,
            matrix,
        })
    }

    /// Return the `top_n` movies closest to `query`, best first.
    ///
    /// Equal scores keep dataset order (lowest index first). This differs
    /// from a reversed ascending argsort, which would list the last of the
    /// tied rows first. Queries that share no vocabulary with the corpus
    /// still return `top_n` movies, all scored zero, in dataset order.
    ///
    /// # Errors
    ///
    /// Propagates vectorizer failures.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        let query_vector = self.vectorizer.transform_one(query)?;
        debug!(
            query,
            known_terms = query_vector.as_slice().iter().filter(|&&w| w > 0.0).count(),
            "scoring query"
        );

        let ranked = top_k_rows(&query_vector, &self.matrix, top_n)?;
        Ok(ranked
            .into_iter()
            .enumerate()
            .map(|(pos, (idx, score))| Recommendation {
                rank: pos + 1,
                title: self.movies[idx].title.clone(),
                score,
            })
            .collect())
    }

    /// Number of movies that can be recommended.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Always false for a fitted recommender.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Titles in dataset order.
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.movies.iter().map(|m| m.title.as_str())
    }

    /// Size of the learned vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, description: &str) -> Movie {
        Movie {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn catalogue() -> Vec<Movie> {
        vec![
            movie(
                "The Godfather",
                "Drama, Crime. italy, mafia, patriarch. The aging patriarch of an organized crime dynasty transfers control.",
            ),
            movie(
                "Toy Story",
                "Animation, Comedy, Family. jealousy, toy, boy. Led by Woody, Andy's toys live happily in his room.",
            ),
            movie(
                "Interstellar",
                "Adventure, Drama, Science Fiction. saving the world, space travel, wormhole. Explorers travel through a wormhole in space.",
            ),
            movie(
                "Goodfellas",
                "Drama, Crime. mafia, gangster. The true story of Henry Hill and his life in the mob.",
            ),
        ]
    }

    #[test]
    fn test_recommend_best_match_first() {
        let recommender = ContentRecommender::fit(catalogue()).expect("fit should succeed");
        let picks = recommender
            .recommend("space travel through a wormhole", 2)
            .expect("recommend should succeed");
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].title, "Interstellar");
        assert_eq!(picks[0].rank, 1);
        assert_eq!(picks[1].rank, 2);
        assert!(picks[0].score > picks[1].score);
    }

    #[test]
    fn test_recommend_mafia() {
        let recommender = ContentRecommender::fit(catalogue()).expect("fit should succeed");
        let picks = recommender
            .recommend("MAFIA crime family", 2)
            .expect("recommend should succeed");
        let titles: Vec<&str> = picks.iter().map(|p| p.title.as_str()).collect();
        assert!(titles.contains(&"The Godfather"));
        assert!(titles.contains(&"Goodfellas"));
    }

    #[test]
    fn test_top_n_larger_than_catalogue() {
        let recommender = ContentRecommender::fit(catalogue()).expect("fit should succeed");
        let picks = recommender.recommend("toy", 10).expect("recommend should succeed");
        assert_eq!(picks.len(), 4);
        assert_eq!(picks[0].title, "Toy Story");
    }

    #[test]
    fn test_unknown_query_returns_dataset_order() {
        let recommender = ContentRecommender::fit(catalogue()).expect("fit should succeed");
        let picks = recommender
            .recommend("zzzz qqqq", 3)
            .expect("recommend should succeed");
        let titles: Vec<&str> = picks.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["The Godfather", "Toy Story", "Interstellar"]);
        assert!(picks.iter().all(|p| p.score == 0.0));
    }

    #[test]
    fn test_tied_scores_keep_dataset_order() {
        let tied = vec![
            movie("A", "Western. desert, outlaw. A lone rider."),
            movie("B", "Western. desert, outlaw. A lone rider."),
            movie("C", "Western. desert, outlaw. A lone rider."),
        ];
        let recommender = ContentRecommender::fit(tied).expect("fit should succeed");

        let matched = recommender
            .recommend("desert outlaw", 2)
            .expect("recommend should succeed");
        let titles: Vec<&str> = matched.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);

        let unmatched = recommender
            .recommend("zzz", 2)
            .expect("recommend should succeed");
        let titles: Vec<&str> = unmatched.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_zero_top_n() {
        let recommender = ContentRecommender::fit(catalogue()).expect("fit should succeed");
        assert!(recommender.recommend("mafia", 0).expect("recommend should succeed").is_empty());
    }

    #[test]
    fn test_scores_are_bounded() {
        let recommender = ContentRecommender::fit(catalogue()).expect("fit should succeed");
        let picks = recommender
            .recommend("drama about a family", 4)
            .expect("recommend should succeed");
        assert!(picks.iter().all(|p| (0.0..=1.0 + 1e-9).contains(&p.score)));
    }

    #[test]
    fn test_empty_catalogue() {
        assert!(ContentRecommender::fit(Vec::new()).is_err());
    }

    #[test]
    fn test_metadata_accessors() {
        let recommender = ContentRecommender::fit(catalogue()).expect("fit should succeed");
        assert_eq!(recommender.len(), 4);
        assert!(!recommender.is_empty());
        assert!(recommender.vocabulary_size() > 10);
        assert_eq!(recommender.titles().next(), Some("The Godfather"));
    }

    #[test]
    fn test_display() {
        let rec = Recommendation {
            rank: 1,
            title: "Heat".to_string(),
            score: 0.5,
        };
        assert_eq!(rec.to_string(), "1. Heat");
    }
}
