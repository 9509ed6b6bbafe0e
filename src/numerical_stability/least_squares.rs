//! Weighted minimum-norm least squares via singular-value decomposition.
//!
//! Purpose
//! -------
//! Solve the row-weighted linear least-squares problem
//! `min_c ‖W (X c − y)‖₂` used by S-map local regressions, where `W` is the
//! diagonal matrix of per-row weights. The solve goes through an SVD of the
//! weighted design matrix instead of the normal equations, so near-collinear
//! embedding coordinates degrade to the minimum-norm solution rather than
//! blowing up.
//!
//! Key behaviors
//! -------------
//! - Copy an `ndarray` design matrix into a `nalgebra::DMatrix`, scaling each
//!   row by its weight on the way.
//! - Truncate singular values below [`svd_cutoff`] so rank-deficient systems
//!   return the Moore–Penrose solution `c = (WX)⁺ W y`.
//! - Report failures (SVD not computed, non-finite solution) as `None`; this
//!   module never panics on numeric input.
//!
//! Invariants & assumptions
//! ------------------------
//! - `design.nrows() == targets.len() == weights.len()`; mismatches are
//!   programmer errors and are caught by `debug_assert!`.
//! - Weights are finite and non-negative. Rows with zero weight simply drop
//!   out of the fit.
//!
//! Conventions
//! -----------
//! - Pure numerical helper: no logging, no I/O, no global state.
//!
//! Testing notes
//! -------------
//! - Unit tests cover an exactly determined system, a rank-deficient system
//!   with a duplicated column (minimum-norm split of the coefficient), and
//!   the effect of zero weights.
use crate::numerical_stability::tolerances::svd_cutoff;
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// weighted_least_squares — minimum-norm solution of a row-weighted system.
///
/// Parameters
/// ----------
/// - `design`: `ArrayView2<f64>`
///   `k × m` design matrix `X` (one row per observation).
/// - `targets`: `ArrayView1<f64>`
///   Length-`k` response vector `y`.
/// - `weights`: `ArrayView1<f64>`
///   Length-`k` non-negative row weights applied to both `X` and `y`.
///
/// Returns
/// -------
/// `Option<Array1<f64>>`
///   - `Some(c)` with `m` coefficients minimizing `‖W (X c − y)‖₂`, choosing
///     the smallest-norm `c` when the minimizer is not unique.
///   - `None` when the system is empty, the decomposition could not be used,
///     or the solution contains non-finite entries.
///
/// Notes
/// -----
/// - Singular values `σ_k ≤ svd_cutoff(k, m, σ_max)` are treated as zero.
pub fn weighted_least_squares(
    design: ArrayView2<f64>, targets: ArrayView1<f64>, weights: ArrayView1<f64>,
) -> Option<Array1<f64>> {
    debug_assert_eq!(design.nrows(), targets.len());
    debug_assert_eq!(design.nrows(), weights.len());

    let rows = design.nrows();
    let cols = design.ncols();
    if rows == 0 || cols == 0 {
        return None;
    }

    let mut weighted_design = DMatrix::<f64>::zeros(rows, cols);
    let mut weighted_targets = DVector::<f64>::zeros(rows);
    fill_weighted_system(design, targets, weights, &mut weighted_design, &mut weighted_targets);

    let svd = weighted_design.svd(true, true);
    let sigma_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    let cutoff = svd_cutoff(rows, cols, sigma_max);
    let solution = svd.solve(&weighted_targets, cutoff).ok()?;

    if solution.iter().any(|c| !c.is_finite()) {
        return None;
    }
    Some(Array1::from_iter(solution.iter().copied()))
}

/// Copy `W X` and `W y` into preallocated `nalgebra` storage.
///
/// The copy walks column by column to match the column-major layout of
/// `DMatrix`.
fn fill_weighted_system(
    design: ArrayView2<f64>, targets: ArrayView1<f64>, weights: ArrayView1<f64>,
    weighted_design: &mut DMatrix<f64>, weighted_targets: &mut DVector<f64>,
) {
    for j in 0..design.ncols() {
        for i in 0..design.nrows() {
            weighted_design[(i, j)] = weights[i] * design[[i, j]];
        }
    }
    for i in 0..targets.len() {
        weighted_targets[i] = weights[i] * targets[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of coefficients for a full-rank system.
    // - Minimum-norm behavior for a rank-deficient design.
    // - Zero-weight rows being ignored by the fit.
    //
    // They intentionally DO NOT cover:
    // - How S-map builds its design matrix; see `edm::models::smap`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Recover the coefficients of an exact linear relation.
    //
    // Given
    // -----
    // - Rows [1, x] for x = 0..4 and y = 2 + 3x, unit weights.
    //
    // Expect
    // ------
    // - c ≈ [2, 3].
    fn weighted_least_squares_recovers_exact_line() {
        // Arrange
        let design = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
        let targets = array![2.0, 5.0, 8.0, 11.0, 14.0];
        let weights = Array1::<f64>::ones(5);

        // Act
        let coeffs = weighted_least_squares(design.view(), targets.view(), weights.view())
            .expect("full-rank system should solve");

        // Assert
        assert_abs_diff_eq!(coeffs[0], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(coeffs[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // A duplicated column makes the system rank deficient; the solver must
    // return the minimum-norm split instead of failing.
    //
    // Given
    // -----
    // - Rows [1, x, x] for x = 1..4 and y = 1 + 2x.
    //
    // Expect
    // ------
    // - c ≈ [1, 1, 1] (the slope 2 is split evenly across the twin columns).
    fn weighted_least_squares_returns_minimum_norm_for_collinear_columns() {
        // Arrange
        let design = array![[1.0, 1.0, 1.0], [1.0, 2.0, 2.0], [1.0, 3.0, 3.0], [1.0, 4.0, 4.0]];
        let targets = array![3.0, 5.0, 7.0, 9.0];
        let weights = Array1::<f64>::ones(4);

        // Act
        let coeffs = weighted_least_squares(design.view(), targets.view(), weights.view())
            .expect("rank-deficient system should still solve");

        // Assert
        assert_abs_diff_eq!(coeffs[0], 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(coeffs[1], 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(coeffs[2], 1.0, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Rows with zero weight must not influence the fit.
    //
    // Given
    // -----
    // - Three points on y = x and one outlier (x = 3, y = 100) with weight 0.
    //
    // Expect
    // ------
    // - c ≈ [0, 1].
    fn weighted_least_squares_ignores_zero_weight_rows() {
        // Arrange
        let design = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
        let targets = array![0.0, 1.0, 2.0, 100.0];
        let weights = array![1.0, 1.0, 1.0, 0.0];

        // Act
        let coeffs = weighted_least_squares(design.view(), targets.view(), weights.view())
            .expect("system should solve");

        // Assert
        assert_abs_diff_eq!(coeffs[0], 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(coeffs[1], 1.0, epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // An empty system has no solution to report.
    //
    // Given
    // -----
    // - A 0 × 2 design.
    //
    // Expect
    // ------
    // - `None`.
    fn weighted_least_squares_rejects_empty_system() {
        // Arrange
        let design = ndarray::Array2::<f64>::zeros((0, 2));
        let empty = Array1::<f64>::zeros(0);

        // Act
        let coeffs = weighted_least_squares(design.view(), empty.view(), empty.view());

        // Assert
        assert!(coeffs.is_none());
    }
}
