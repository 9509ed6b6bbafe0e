//! Time-delay embedding of a scalar series.
//!
//! Purpose
//! -------
//! Reconstruct state-space points from a single observed variable. Row `i`
//! of the embedding holds the `E` lagged values
//! `(x[i], x[i − tau], …, x[i − (E − 1)·tau])`.
//!
//! Key behaviors
//! -------------
//! - [`Embedding::new`] builds every row once per parameter set and tags it
//!   valid or invalid.
//! - A row is invalid when any lag reaches before the start of the series or
//!   touches a missing value; invalid rows are filled with `NaN`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `vectors.nrows() == series.len()` and `vectors.ncols() == E`.
//! - `valid[i]` ⇔ every entry of row `i` is finite.
//! - Construction is deterministic and pure.
//!
//! Performance
//! -----------
//! - O(n·E) time and memory; the matrix is owned by the run and dropped
//!   afterwards, nothing is cached across parameter sets.
use crate::edm::{
    core::{series::Series, validation::validate_embedding},
    errors::EDMResult,
};
use ndarray::{Array2, ArrayView1};

/// Embedding — delay vectors for every row plus their validity mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    vectors: Array2<f64>,
    valid: Vec<bool>,
    e: usize,
}

impl Embedding {
    /// Build the delay embedding of `series`.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&Series`
    ///   Source series (read only).
    /// - `e`: `usize`
    ///   Embedding dimension, `≥ 1`.
    /// - `tau`: `usize`
    ///   Lag between components, `≥ 1`.
    ///
    /// Errors
    /// ------
    /// - `EDMError::InvalidEmbeddingDimension` / `EDMError::InvalidLag` for
    ///   zero `e` / `tau`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_edm::edm::core::{embedding::Embedding, series::Series};
    /// let s = Series::from_values(array![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let emb = Embedding::new(&s, 2, 2).unwrap();
    /// assert!(!emb.is_valid(1));
    /// assert_eq!(emb.vector(3).to_vec(), vec![4.0, 2.0]);
    /// ```
    pub fn new(series: &Series, e: usize, tau: usize) -> EDMResult<Self> {
        validate_embedding(e, tau)?;
        let n = series.len();
        let values = series.values();
        let max_lag = (e - 1).saturating_mul(tau);

        let mut vectors = Array2::from_elem((n, e), f64::NAN);
        let mut valid = vec![false; n];
        for i in max_lag..n {
            let mut row = vectors.row_mut(i);
            let mut ok = true;
            for k in 0..e {
                let v = values[i - k * tau];
                if v.is_nan() {
                    ok = false;
                    break;
                }
                row[k] = v;
            }
            if ok {
                valid[i] = true;
            } else {
                row.fill(f64::NAN);
            }
        }
        Ok(Embedding { vectors, valid, e })
    }

    /// Delay vector of row `i` (all `NaN` when invalid).
    pub fn vector(&self, i: usize) -> ArrayView1<'_, f64> {
        self.vectors.row(i)
    }

    /// Whether row `i` has a complete delay vector.
    pub fn is_valid(&self, i: usize) -> bool {
        self.valid.get(i).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    /// Embedding dimension `E` (columns per vector).
    pub fn dimension(&self) -> usize {
        self.e
    }

    /// Number of valid rows.
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Vector layout (newest value first, lagged by tau).
    // - Invalid rows at the series start and around missing values.
    // - Determinism across repeated construction.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Vectors list the current value first, then lagged values.
    //
    // Given
    // -----
    // - Series 1..=6, E = 3, tau = 2.
    //
    // Expect
    // ------
    // - Rows 0..=3 invalid; row 4 = [5, 3, 1]; row 5 = [6, 4, 2].
    fn new_builds_lagged_vectors() {
        // Arrange
        let s = Series::from_values(array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

        // Act
        let emb = Embedding::new(&s, 3, 2).unwrap();

        // Assert
        assert!((0..4).all(|i| !emb.is_valid(i)));
        assert_eq!(emb.vector(4).to_vec(), vec![5.0, 3.0, 1.0]);
        assert_eq!(emb.vector(5).to_vec(), vec![6.0, 4.0, 2.0]);
        assert_eq!(emb.valid_count(), 2);
    }

    #[test]
    // Purpose
    // -------
    // A missing value invalidates every row whose vector references it.
    //
    // Given
    // -----
    // - Series [1, 2, NaN, 4, 5, 6], E = 2, tau = 1.
    //
    // Expect
    // ------
    // - Valid rows: 1, 4, 5. Rows 2 and 3 reference the missing value.
    fn new_marks_rows_touching_missing_values_invalid() {
        // Arrange
        let s = Series::from_values(array![1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0]).unwrap();

        // Act
        let emb = Embedding::new(&s, 2, 1).unwrap();

        // Assert
        let valid: Vec<usize> = (0..emb.len()).filter(|&i| emb.is_valid(i)).collect();
        assert_eq!(valid, vec![1, 4, 5]);
        assert!(emb.vector(3).iter().all(|v| v.is_nan()));
    }

    #[test]
    // Purpose
    // -------
    // Embeddings are deterministic, and E = 1 uses every present value.
    //
    // Given
    // -----
    // - The same series embedded twice with E = 1.
    //
    // Expect
    // ------
    // - Identical results, all rows valid.
    fn new_is_deterministic() {
        // Arrange
        let s = Series::from_values(array![0.3, -1.2, 4.4]).unwrap();

        // Act
        let a = Embedding::new(&s, 1, 1).unwrap();
        let b = Embedding::new(&s, 1, 1).unwrap();

        // Assert
        assert_eq!(a, b);
        assert_eq!(a.valid_count(), 3);
        assert!(Embedding::new(&s, 0, 1).is_err());
    }
}
