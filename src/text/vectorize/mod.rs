//! Text vectorization: documents to numeric matrices.
//!
//! - [`CountVectorizer`]: bag-of-words term counts
//! - [`TfidfVectorizer`]: TF-IDF weighted, optionally L2-normalised counts
//!
//! Both learn a vocabulary with `fit` and reuse it in `transform`, so a query
//! vectorized after fitting lives in the same space as the corpus.

mod tfidf_vectorizer;

pub use tfidf_vectorizer::{Norm, TfidfVectorizer};

use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::Tokenizer;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Bag-of-words vectorizer that converts text to a term-count matrix.
///
/// Tokens are lowercased (by default), stop words removed, and n-grams joined
/// with `_`. Vocabulary indices follow sorted term order.
///
/// # Examples
///
/// ```
/// use reelmatch::text::vectorize::CountVectorizer;
/// use reelmatch::text::tokenize::WhitespaceTokenizer;
///
/// let docs = vec!["cat dog", "dog bird"];
/// let mut vectorizer = CountVectorizer::new()
///     .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
///
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.shape(), (2, 3));
/// assert_eq!(vectorizer.vocabulary()["bird"], 0);
/// ```
#[allow(missing_debug_implementations)]
pub struct CountVectorizer {
    tokenizer: Option<Box<dyn Tokenizer>>,
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
    max_features: Option<usize>,
    ngram_range: (usize, usize),
    min_df: usize,
    max_df: f32,
    stop_words: Option<StopWordsFilter>,
}

impl CountVectorizer {
    /// Create a new `CountVectorizer`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: None,
            vocabulary: HashMap::new(),
            lowercase: true,
            max_features: None,
            ngram_range: (1, 1),
            min_df: 1,
            max_df: 1.0,
            stop_words: None,
        }
    }

    /// Use English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Set n-gram range for feature extraction.
    ///
    /// ```
    /// use reelmatch::text::vectorize::CountVectorizer;
    ///
    /// // Extract unigrams and bigrams
    /// let vectorizer = CountVectorizer::new().with_ngram_range(1, 2);
    /// ```
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.ngram_range = (min_n, max_n.max(min_n));
        self
    }

    /// Terms appearing in fewer than `min_df` documents are ignored.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Terms appearing in more than `max_df` fraction of documents are ignored.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f32) -> Self {
        self.max_df = max_df.clamp(0.0, 1.0);
        self
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set whether to convert to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Keep only the `max_features` most frequent terms.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Learn vocabulary from documents and transform to count matrix.
    ///
    /// # Errors
    ///
    /// Fails when `documents` is empty, no tokenizer is set, or no term
    /// survives the stop word and document frequency filters.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learn vocabulary from documents.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CountVectorizer::fit_transform`].
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecommendError::InvalidInput(
                "Cannot fit on empty documents".to_string(),
            ));
        }

        let n_docs = documents.len();
        let mut term_freq: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = self.analyze(doc.as_ref())?;
            let mut doc_terms: HashSet<&str> = HashSet::new();
            for term in &terms {
                *term_freq.entry(term.clone()).or_insert(0) += 1;
                doc_terms.insert(term.as_str());
            }
            for term in doc_terms {
                *doc_freq.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let max_df_count = (f64::from(self.max_df) * n_docs as f64).ceil() as usize;
        let mut kept: Vec<(String, usize)> = term_freq
            .into_iter()
            .filter(|(term, _)| {
                let df = doc_freq.get(term).copied().unwrap_or(0);
                df >= self.min_df && df <= max_df_count
            })
            .collect();

        if let Some(max_features) = self.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            kept.truncate(max_features);
        }

        let mut terms: Vec<String> = kept.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();

        if terms.is_empty() {
            return Err(RecommendError::InvalidInput(
                "Empty vocabulary; documents contain only stop words".to_string(),
            ));
        }

        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        debug!(
            documents = n_docs,
            vocabulary = self.vocabulary.len(),
            "fitted count vectorizer"
        );
        Ok(())
    }

    /// Transform documents to count matrix using learned vocabulary.
    ///
    /// Terms unseen at fit time are ignored.
    ///
    /// # Errors
    ///
    /// Fails when `documents` is empty or `fit` has not been called.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        if documents.is_empty() {
            return Err(RecommendError::InvalidInput(
                "Cannot transform empty documents".to_string(),
            ));
        }

        if self.vocabulary.is_empty() {
            return Err(RecommendError::NotFitted(
                "Vocabulary is empty. Call fit() first".to_string(),
            ));
        }

        let n_docs = documents.len();
        let vocab_size = self.vocabulary.len();
        let mut matrix = Matrix::zeros(n_docs, vocab_size);

        for (doc_idx, doc) in documents.iter().enumerate() {
            for term in self.analyze(doc.as_ref())? {
                if let Some(&word_idx) = self.vocabulary.get(&term) {
                    matrix.set(doc_idx, word_idx, matrix.get(doc_idx, word_idx) + 1.0);
                }
            }
        }

        Ok(matrix)
    }

    /// Tokenize, normalise, drop stop words and expand to n-grams.
    fn analyze(&self, text: &str) -> Result<Vec<String>> {
        let tokenizer = self.tokenizer.as_ref().ok_or_else(|| {
            RecommendError::InvalidInput("Tokenizer not set. Use with_tokenizer()".to_string())
        })?;

        let tokens: Vec<String> = tokenizer
            .tokenize(text)?
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect();

        let (min_n, max_n) = self.ngram_range;
        if min_n == 1 && max_n == 1 {
            return Ok(tokens);
        }

        let mut terms = Vec::new();
        for n in min_n..=max_n {
            terms.extend(tokens.windows(n).map(|ngram| ngram.join("_")));
        }
        Ok(terms)
    }

    /// Get the learned vocabulary (term to column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
