//! Dense row-major matrices used by the scoring pipeline.
//!
//! [`DenseMatrix`] holds the encoded feature rows (`n x d`) and
//! [`SimilarityMatrix`] holds pairwise scores (`n x n`). Entry `(i, j)` of a
//! similarity matrix scores person `i` against person `j`. Accessors return
//! `Option` rather than panicking on out-of-range indices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when assembling a matrix from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixShapeError {
    /// The number of values did not match `rows * cols`.
    #[error("expected {expected} values for the requested shape, found {found}")]
    LengthMismatch {
        /// Values required by the shape.
        expected: usize,
        /// Values supplied.
        found: usize,
    },
    /// `rows * cols` overflowed `usize`.
    #[error("matrix shape overflows usize")]
    Overflow,
}

/// Row-major matrix of `f64` values.
///
/// # Examples
/// ```
/// use mentor_core::DenseMatrix;
///
/// # fn main() -> Result<(), mentor_core::MatrixShapeError> {
/// let matrix = DenseMatrix::from_rows(2, vec![1.0, 0.0, 0.5, 0.5])?;
/// assert_eq!(matrix.cols(), 2);
/// assert_eq!(matrix.row(1), Some(&[0.5, 0.5][..]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DenseMatrix {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// # Errors
    /// Returns [`MatrixShapeError::Overflow`] when the shape cannot be
    /// allocated.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixShapeError> {
        let len = rows.checked_mul(cols).ok_or(MatrixShapeError::Overflow)?;
        Ok(Self {
            rows,
            cols,
            values: vec![0.0; len],
        })
    }

    /// Build a matrix from concatenated rows of width `cols`.
    ///
    /// A zero-width matrix has as many rows as `cols == 0` allows: none.
    ///
    /// # Errors
    /// Returns [`MatrixShapeError::LengthMismatch`] when `values` is not a
    /// whole number of rows.
    pub fn from_rows(cols: usize, values: Vec<f64>) -> Result<Self, MatrixShapeError> {
        let rows = values.len().checked_div(cols).unwrap_or(0);
        let expected = rows.checked_mul(cols).ok_or(MatrixShapeError::Overflow)?;
        if expected != values.len() {
            return Err(MatrixShapeError::LengthMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Return entry `(row, col)`, if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.cols {
            return None;
        }
        self.offset(row, col)
            .and_then(|offset| self.values.get(offset).copied())
    }

    /// Mutable access to entry `(row, col)`, if in range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if col >= self.cols {
            return None;
        }
        self.offset(row, col)
            .and_then(|offset| self.values.get_mut(offset))
    }

    /// Borrow row `row`, if in range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = self.offset(row, 0)?;
        self.values.get(start..start.checked_add(self.cols)?)
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).filter_map(|row| self.row(row))
    }

    /// Borrow the raw row-major values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        row.checked_mul(self.cols)?.checked_add(col)
    }
}

/// Square matrix of pairwise similarity scores.
///
/// # Examples
/// ```
/// use mentor_core::SimilarityMatrix;
///
/// let mut matrix = SimilarityMatrix::zeros(2);
/// if let Some(entry) = matrix.get_mut(0, 1) {
///     *entry = 0.25;
/// }
/// assert_eq!(matrix.get(0, 1), Some(0.25));
/// assert!(!matrix.is_symmetric(1e-12));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimilarityMatrix {
    inner: DenseMatrix,
}

impl SimilarityMatrix {
    /// Create an `n x n` matrix of zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            inner: DenseMatrix {
                rows: n,
                cols: n,
                values: vec![0.0; n.saturating_mul(n)],
            },
        }
    }

    /// Build an `n x n` matrix from row-major values.
    ///
    /// # Errors
    /// Returns [`MatrixShapeError::LengthMismatch`] when `values.len()` is not
    /// `n * n`.
    pub fn from_values(n: usize, values: Vec<f64>) -> Result<Self, MatrixShapeError> {
        let expected = n.checked_mul(n).ok_or(MatrixShapeError::Overflow)?;
        if values.len() != expected {
            return Err(MatrixShapeError::LengthMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            inner: DenseMatrix {
                rows: n,
                cols: n,
                values,
            },
        })
    }

    /// Side length of the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.rows
    }

    /// Report whether the matrix has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.rows == 0
    }

    /// Return entry `(i, j)`, if in range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.inner.get(i, j)
    }

    /// Mutable access to entry `(i, j)`, if in range.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut f64> {
        self.inner.get_mut(i, j)
    }

    /// Borrow row `i`, if in range.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.inner.row(i)
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.inner.iter_rows()
    }

    /// Borrow the raw row-major values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.inner.as_slice()
    }

    /// Report whether `|m[i][j] - m[j][i]| <= tolerance` for every pair.
    #[expect(
        clippy::float_arithmetic,
        reason = "symmetry checks compare entry differences"
    )]
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.len();
        (0..n).all(|i| {
            (i..n).all(|j| match (self.get(i, j), self.get(j, i)) {
                (Some(upper), Some(lower)) => (upper - lower).abs() <= tolerance,
                _ => false,
            })
        })
    }

    /// Main diagonal entries in order.
    #[must_use]
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.get(i, i)).collect()
    }
}
