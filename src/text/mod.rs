//! Text processing for content-based recommendation.
//!
//! - [`tokenize`]: whitespace and pattern-based tokenizers
//! - [`stopwords`]: English stop word filtering
//! - [`vectorize`]: count and TF-IDF document vectorizers
//! - [`similarity`]: cosine similarity and top-k ranking
//!
//! # Quick Start
//!
//! ```
//! use reelmatch::text::vectorize::TfidfVectorizer;
//! use reelmatch::text::tokenize::RegexTokenizer;
//!
//! let docs = vec!["space opera with aliens", "courtroom drama"];
//! let mut vectorizer = TfidfVectorizer::new()
//!     .with_tokenizer(Box::new(RegexTokenizer::default()))
//!     .with_stop_words_english();
//!
//! let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//! assert_eq!(matrix.n_rows(), 2);
//! ```

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Splits text into tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same tokens, so a vocabulary learned at fit time can be reused for queries.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text` into owned tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be tokenized.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
