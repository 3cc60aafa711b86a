//! All-pairs cosine similarity over encoded feature rows.
//!
//! A row with zero norm has no direction, so any pair involving it scores
//! `0.0`, including the row against itself. Every other diagonal entry is
//! exactly `1.0`. Each unordered pair is computed once and mirrored, so the
//! result is exactly symmetric.

#![forbid(unsafe_code)]

use log::{debug, warn};
use mentor_core::{DenseMatrix, SimilarityMatrix};

/// Cosine similarity of two equal-length vectors.
///
/// Returns `0.0` when either vector has zero norm. The result is clamped into
/// `-1.0..=1.0` to absorb rounding.
///
/// # Examples
/// ```
/// use mentor_scorer::cosine_similarity;
///
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 1.0]), 0.0);
/// assert!((cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    cosine_from_norms(a, b, norm(a), norm(b))
}

/// Build the `n x n` cosine similarity matrix for the rows of `features`.
#[must_use]
pub fn cosine_similarity_matrix(features: &DenseMatrix) -> SimilarityMatrix {
    let rows: Vec<&[f64]> = features.iter_rows().collect();
    let norms: Vec<f64> = rows.iter().map(|row| norm(row)).collect();
    let zero_rows = norms.iter().filter(|&&n| n == 0.0).count();
    if zero_rows > 0 {
        warn!("{zero_rows} people have an all-zero feature vector; their similarity is 0.0");
    }

    let n = rows.len();
    let mut matrix = SimilarityMatrix::zeros(n);
    for (i, (row_i, &norm_i)) in rows.iter().zip(&norms).enumerate() {
        if norm_i == 0.0 {
            continue;
        }
        store(&mut matrix, i, i, 1.0);
        for (j, (row_j, &norm_j)) in rows.iter().zip(&norms).enumerate().skip(i.saturating_add(1)) {
            let value = cosine_from_norms(row_i, row_j, norm_i, norm_j);
            store(&mut matrix, i, j, value);
            store(&mut matrix, j, i, value);
        }
    }
    debug!("computed {n}x{n} cosine similarity matrix");
    matrix
}

#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity divides the dot product by both norms"
)]
fn cosine_from_norms(a: &[f64], b: &[f64], norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[expect(clippy::float_arithmetic, reason = "dot products multiply and sum")]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}

fn store(matrix: &mut SimilarityMatrix, i: usize, j: usize, value: f64) {
    if let Some(entry) = matrix.get_mut(i, j) {
        *entry = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matrix(cols: usize, values: &[f64]) -> DenseMatrix {
        DenseMatrix::from_rows(cols, values.to_vec()).expect("valid shape")
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tests compare floating point values")]
    fn matches_hand_computed_cosine() {
        let features = matrix(3, &[1.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        let similarity = cosine_similarity_matrix(&features);
        let value = similarity.get(0, 1).expect("entry");
        assert!((value - 0.5).abs() < 1e-12, "expected 0.5, got {value}");
    }

    #[rstest]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let features = matrix(3, &[1.0, 0.2, 0.0, 0.3, 0.0, 1.0, 0.7, 0.7, 0.7]);
        let similarity = cosine_similarity_matrix(&features);
        assert!(similarity.is_symmetric(0.0));
        assert_eq!(similarity.diagonal(), vec![1.0, 1.0, 1.0]);
    }

    #[rstest]
    fn zero_row_scores_zero_everywhere_including_itself() {
        let features = matrix(2, &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]);
        let similarity = cosine_similarity_matrix(&features);
        assert_eq!(similarity.row(0), Some(&[0.0, 0.0, 0.0][..]));
        assert_eq!(similarity.get(1, 0), Some(0.0));
        assert_eq!(similarity.get(1, 1), Some(1.0));
    }

    #[rstest]
    fn empty_features_yield_empty_matrix() {
        let features = DenseMatrix::zeros(0, 4).expect("shape");
        assert!(cosine_similarity_matrix(&features).is_empty());
    }
}
