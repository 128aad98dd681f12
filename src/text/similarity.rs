//! Document similarity metrics.
//!
//! Cosine similarity between TF-IDF vectors and top-k ranking of a corpus
//! against a query.
//!
//! # Quick Start
//!
//! ```
//! use reelmatch::text::similarity::cosine_similarity;
//! use reelmatch::primitives::Vector;
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let v2 = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let similarity = cosine_similarity(&v1, &v2).expect("cosine similarity should succeed");
//! assert!(similarity > 0.9);
//! ```

use crate::error::{RecommendError, Result};
use crate::primitives::{Matrix, Vector};
use std::cmp::Ordering;

/// Compute cosine similarity between two vectors.
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// A zero vector is orthogonal to everything and scores `0.0`.
///
/// # Errors
///
/// Fails when the vectors differ in length or are empty.
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64> {
    cosine_similarity_slices(a.as_slice(), b.as_slice())
}

/// Cosine similarity over raw slices, used when scoring matrix rows in place.
///
/// # Errors
///
/// Fails when the slices differ in length or are empty.
pub fn cosine_similarity_slices(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecommendError::DimensionMismatch {
            expected: a.len().to_string(),
            actual: b.len().to_string(),
        });
    }

    if a.is_empty() {
        return Err(RecommendError::InvalidInput(
            "Vectors cannot be empty".to_string(),
        ));
    }

    let dot_product: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Find the top-k documents most similar to a query.
///
/// Returns `(index, similarity)` pairs, highest similarity first. Equal
/// scores keep corpus order.
///
/// # Examples
///
/// ```
/// use reelmatch::text::similarity::top_k_similar;
/// use reelmatch::primitives::Vector;
///
/// let query = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let docs = vec![
///     Vector::from_slice(&[2.0, 3.0, 4.0]),
///     Vector::from_slice(&[0.0, 0.0, 1.0]),
///     Vector::from_slice(&[1.0, 2.0, 2.9]),
/// ];
///
/// let top = top_k_similar(&query, &docs, 2).expect("top_k_similar should succeed");
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[0].0, 2);
/// ```
///
/// # Errors
///
/// Fails when a document's length differs from the query's.
pub fn top_k_similar(
    query: &Vector<f64>,
    documents: &[Vector<f64>],
    k: usize,
) -> Result<Vec<(usize, f64)>> {
    let scores = documents
        .iter()
        .map(|doc| cosine_similarity(query, doc))
        .collect::<Result<Vec<f64>>>()?;
    Ok(select_top_k(scores, k))
}

/// Rank the rows of a document matrix against a query.
///
/// Same ordering rules as [`top_k_similar`], without copying rows.
///
/// # Errors
///
/// Fails when the query length differs from the matrix width.
pub fn top_k_rows(query: &Vector<f64>, documents: &Matrix<f64>, k: usize) -> Result<Vec<(usize, f64)>> {
    if query.len() != documents.n_cols() {
        return Err(RecommendError::DimensionMismatch {
            expected: documents.n_cols().to_string(),
            actual: query.len().to_string(),
        });
    }
    let scores = documents
        .rows()
        .map(|row| cosine_similarity_slices(query.as_slice(), row))
        .collect::<Result<Vec<f64>>>()?;
    Ok(select_top_k(scores, k))
}

fn select_top_k(scores: Vec<f64>, k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
