use super::CountVectorizer;
use crate::error::{RecommendError, Result};
use crate::primitives::{Matrix, Vector};
use crate::text::Tokenizer;
use std::collections::HashMap;

/// Row normalisation applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Norm {
    /// Scale every row to unit Euclidean length.
    #[default]
    L2,
    /// Leave rows unscaled.
    None,
}

/// TF-IDF vectorizer that converts text to a TF-IDF weighted matrix.
///
/// **TF-IDF Formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of term t in document d   (1 + ln(tf) when sublinear)
/// idf(t)      = ln((1 + N) / (1 + df(t))) + 1   (smooth, default)
/// idf(t)      = ln(N / df(t)) + 1               (not smooth)
/// where N = total documents, df(t) = documents containing term t
/// ```
///
/// Rows are L2-normalised by default, so the dot product of two rows is
/// their cosine similarity.
///
/// # Examples
///
/// ```
/// use reelmatch::text::vectorize::TfidfVectorizer;
/// use reelmatch::text::tokenize::WhitespaceTokenizer;
///
/// let docs = vec![
///     "the cat sat on the mat",
///     "the dog sat on the log",
/// ];
///
/// let mut vectorizer = TfidfVectorizer::new()
///     .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
///
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    /// Count vectorizer for term frequencies
    count_vectorizer: CountVectorizer,
    /// Inverse document frequencies, indexed like the vocabulary
    idf_values: Vec<f64>,
    /// Use sublinear TF scaling: tf = 1 + ln(tf) if tf > 0
    sublinear_tf: bool,
    /// Add one to document frequencies as if an extra document held every term
    smooth_idf: bool,
    norm: Norm,
}

impl TfidfVectorizer {
    /// Create a new `TfidfVectorizer` with smooth IDF and L2 rows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count_vectorizer: CountVectorizer::new(),
            idf_values: Vec::new(),
            sublinear_tf: false,
            smooth_idf: true,
            norm: Norm::L2,
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_tokenizer(tokenizer);
        self
    }

    /// Set whether to convert to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_lowercase(lowercase);
        self
    }

    /// Use English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words_english();
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words(words);
        self
    }

    /// Set n-gram range for feature extraction.
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_ngram_range(min_n, max_n);
        self
    }

    /// Set minimum document frequency threshold.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_min_df(min_df);
        self
    }

    /// Set maximum document frequency threshold (0.0-1.0).
    #[must_use]
    pub fn with_max_df(mut self, max_df: f32) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_max_df(max_df);
        self
    }

    /// Set maximum vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_max_features(max_features);
        self
    }

    /// Enable sublinear TF scaling.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    /// Toggle IDF smoothing.
    #[must_use]
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Select row normalisation.
    #[must_use]
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Learn vocabulary and IDF, return the TF-IDF matrix of `documents`.
    ///
    /// # Errors
    ///
    /// Propagates [`CountVectorizer::fit`] failures.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.count_vectorizer.fit(documents)?;
        let counts = self.count_vectorizer.transform(documents)?;
        self.idf_values = self.compute_idf(&counts);
        Ok(self.weight(counts))
    }

    /// Learn vocabulary and IDF values from documents.
    ///
    /// # Errors
    ///
    /// Propagates [`CountVectorizer::fit`] failures.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.fit_transform(documents).map(|_| ())
    }

    /// Transform documents using the learned vocabulary and IDF values.
    ///
    /// # Errors
    ///
    /// Fails when `documents` is empty or the vectorizer is not fitted.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        if self.idf_values.is_empty() {
            return Err(RecommendError::NotFitted(
                "IDF values are empty. Call fit() first".to_string(),
            ));
        }
        let counts = self.count_vectorizer.transform(documents)?;
        Ok(self.weight(counts))
    }

    /// Transform a single text (typically a user query) into a TF-IDF row.
    ///
    /// ```
    /// use reelmatch::text::vectorize::TfidfVectorizer;
    /// use reelmatch::text::tokenize::WhitespaceTokenizer;
    ///
    /// let mut vectorizer = TfidfVectorizer::new()
    ///     .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    /// vectorizer.fit(&["heist thriller", "space opera"]).expect("fit should succeed");
    ///
    /// let query = vectorizer.transform_one("space western").expect("transform should succeed");
    /// assert_eq!(query.len(), 4);
    /// assert!((query.norm() - 1.0).abs() < 1e-9);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when the vectorizer is not fitted.
    pub fn transform_one(&self, text: &str) -> Result<Vector<f64>> {
        let matrix = self.transform(&[text])?;
        Ok(matrix.row(0))
    }

    /// Inverse document frequencies, indexed like the vocabulary.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf_values
    }

    /// Get the learned vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        self.count_vectorizer.vocabulary()
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.count_vectorizer.vocabulary_size()
    }

    fn compute_idf(&self, counts: &Matrix<f64>) -> Vec<f64> {
        let (n_docs, vocab_size) = counts.shape();
        let mut doc_freq = vec![0usize; vocab_size];
        for row in counts.rows() {
            for (df, &count) in doc_freq.iter_mut().zip(row) {
                if count > 0.0 {
                    *df += 1;
                }
            }
        }

        let smooth = usize::from(self.smooth_idf) as f64;
        let n = n_docs as f64 + smooth;
        doc_freq
            .into_iter()
            .map(|df| (n / (df as f64 + smooth)).ln() + 1.0)
            .collect()
    }

    fn weight(&self, mut counts: Matrix<f64>) -> Matrix<f64> {
        let idf = &self.idf_values;
        let sublinear = self.sublinear_tf;
        let norm = self.norm;

        counts.map_rows_mut(|row| {
            for (value, &weight) in row.iter_mut().zip(idf) {
                if *value > 0.0 {
                    let tf = if sublinear { 1.0 + value.ln() } else { *value };
                    *value = tf * weight;
                }
            }
            if norm == Norm::L2 {
                let length = row.iter().map(|x| x * x).sum::<f64>().sqrt();
                if length > 0.0 {
                    row.iter_mut().for_each(|x| *x /= length);
                }
            }
        });
        counts
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
