//! Tokenization strategies for text preprocessing.
//!
//! - Whitespace tokenization (splits on Unicode whitespace)
//! - Pattern tokenization (every match of a regular expression)
//!
//! All tokenizers implement the [`Tokenizer`] trait.

use crate::config::DEFAULT_TOKEN_PATTERN;
use crate::error::Result;
use crate::text::Tokenizer;
use regex::Regex;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Punctuation attached to words is preserved.
///
/// # Examples
///
/// ```
/// use reelmatch::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello,   world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}

/// Tokenizer that emits every match of a regular expression.
///
/// The default pattern `(?u)\b\w\w+\b` keeps runs of two or more word
/// characters, so punctuation and single letters are dropped.
///
/// # Examples
///
/// ```
/// use reelmatch::text::{Tokenizer, tokenize::RegexTokenizer};
///
/// let tokenizer = RegexTokenizer::default();
/// let tokens = tokenizer.tokenize("Drama, Crime. A mob-boss's heir").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Drama", "Crime", "mob", "boss", "heir"]);
/// ```
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Create a tokenizer from a custom pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The pattern this tokenizer matches.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        let pattern = Regex::new(DEFAULT_TOKEN_PATTERN).expect("valid token pattern literal");
        Self { pattern }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }
}
