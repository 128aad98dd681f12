pub(crate) use super::*;
use proptest::prelude::*;

#[test]
fn test_cosine_similarity_identical() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let sim = cosine_similarity(&v, &v).expect("should succeed");
    assert!((sim - 1.0).abs() < 1e-10);
}

#[test]
fn test_cosine_similarity_orthogonal() {
    let v1 = Vector::from_slice(&[1.0, 0.0, 0.0]);
    let v2 = Vector::from_slice(&[0.0, 1.0, 0.0]);
    let sim = cosine_similarity(&v1, &v2).expect("should succeed");
    assert!(sim.abs() < 1e-10);
}

#[test]
fn test_cosine_similarity_different_lengths() {
    let v1 = Vector::from_slice(&[1.0, 2.0]);
    let v2 = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        cosine_similarity(&v1, &v2),
        Err(RecommendError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_cosine_similarity_empty() {
    let v1 = Vector::from_slice(&[]);
    let v2 = Vector::from_slice(&[]);
    assert!(cosine_similarity(&v1, &v2).is_err());
}

#[test]
fn test_cosine_similarity_zero_vector() {
    let v1 = Vector::from_slice(&[0.0, 0.0, 0.0]);
    let v2 = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let sim = cosine_similarity(&v1, &v2).expect("should succeed");
    assert_eq!(sim, 0.0);
}

#[test]
fn test_top_k_similar_sorted() {
    let query = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let docs = vec![
        Vector::from_slice(&[2.0, 3.0, 4.0]),
        Vector::from_slice(&[0.0, 0.0, 1.0]),
        Vector::from_slice(&[1.0, 2.0, 2.9]),
    ];

    let top = top_k_similar(&query, &docs, 2).expect("should succeed");
    assert_eq!(top.len(), 2);
    assert!(top[0].1 > top[1].1);
}

#[test]
fn test_top_k_larger_than_corpus() {
    let query = Vector::from_slice(&[1.0, 0.0]);
    let docs = vec![Vector::from_slice(&[1.0, 0.0])];
    let top = top_k_similar(&query, &docs, 10).expect("should succeed");
    assert_eq!(top.len(), 1);
}

#[test]
fn test_top_k_zero() {
    let query = Vector::from_slice(&[1.0, 0.0]);
    let docs = vec![Vector::from_slice(&[1.0, 0.0])];
    assert!(top_k_similar(&query, &docs, 0).expect("should succeed").is_empty());
}

#[test]
fn test_top_k_empty_corpus() {
    let query = Vector::from_slice(&[1.0]);
    assert!(top_k_similar(&query, &[], 3).expect("should succeed").is_empty());
}

#[test]
fn test_top_k_ties_keep_corpus_order() {
    let query = Vector::from_slice(&[0.0, 0.0]);
    let docs = vec![
        Vector::from_slice(&[1.0, 0.0]),
        Vector::from_slice(&[0.0, 1.0]),
        Vector::from_slice(&[1.0, 1.0]),
    ];
    let top = top_k_similar(&query, &docs, 3).expect("should succeed");
    let order: Vec<usize> = top.iter().map(|(i, _)| *i).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_top_k_length_mismatch() {
    let query = Vector::from_slice(&[1.0, 0.0]);
    let docs = vec![Vector::from_slice(&[1.0, 0.0, 0.0])];
    assert!(top_k_similar(&query, &docs, 1).is_err());
}

#[test]
fn test_top_k_rows_matches_top_k_similar() {
    let matrix = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.6, 0.8, 0.0, 1.0])
        .expect("test data has correct dimensions");
    let query = Vector::from_slice(&[0.0, 1.0]);
    let rows: Vec<Vector<f64>> = (0..3).map(|i| matrix.row(i)).collect();

    let from_rows = top_k_rows(&query, &matrix, 3).expect("should succeed");
    let from_vectors = top_k_similar(&query, &rows, 3).expect("should succeed");
    assert_eq!(from_rows, from_vectors);
    assert_eq!(from_rows[0].0, 2);
}

#[test]
fn test_top_k_rows_dimension_mismatch() {
    let matrix = Matrix::zeros(2, 3);
    let query = Vector::from_slice(&[1.0]);
    assert!(matches!(
        top_k_rows(&query, &matrix, 1),
        Err(RecommendError::DimensionMismatch { .. })
    ));
}

proptest! {
    #[test]
    fn prop_cosine_bounded(
        a in proptest::collection::vec(-100.0f64..100.0, 1..16),
        b in proptest::collection::vec(-100.0f64..100.0, 1..16),
    ) {
        let n = a.len().min(b.len());
        let va = Vector::from_slice(&a[..n]);
        let vb = Vector::from_slice(&b[..n]);
        let sim = cosine_similarity(&va, &vb).expect("equal lengths");
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim));
    }

    #[test]
    fn prop_cosine_symmetric(
        a in proptest::collection::vec(-10.0f64..10.0, 4),
        b in proptest::collection::vec(-10.0f64..10.0, 4),
    ) {
        let va = Vector::from_vec(a);
        let vb = Vector::from_vec(b);
        let ab = cosine_similarity(&va, &vb).expect("equal lengths");
        let ba = cosine_similarity(&vb, &va).expect("equal lengths");
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn prop_top_k_descending(
        docs in proptest::collection::vec(proptest::collection::vec(0.0f64..5.0, 3), 0..20),
        k in 0usize..25,
    ) {
        let query = Vector::from_slice(&[1.0, 2.0, 0.5]);
        let docs: Vec<Vector<f64>> = docs.into_iter().map(Vector::from_vec).collect();
        let top = top_k_similar(&query, &docs, k).expect("equal lengths");
        prop_assert_eq!(top.len(), k.min(docs.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }
}
