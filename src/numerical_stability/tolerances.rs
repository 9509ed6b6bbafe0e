//! Numerical tolerances shared by the neighbor weighting, the local
//! regression solver, and the skill statistics.
//!
//! # Provided items
//! - [`MIN_DISTANCE`]: distances at or below this value count as exact
//!   matches in simplex weighting.
//! - [`SVD_RCOND_FACTOR`]: multiplier for the relative singular-value cutoff
//!   used by the minimum-norm least-squares solver.
//! - [`RELATIVE_VARIANCE_FLOOR`]: centered sums of squares below this
//!   fraction of the raw sum of squares are treated as zero variance.
//! - [`svd_cutoff`], [`has_degenerate_spread`]: helpers built on the above.

/// Distances at or below this value are treated as zero.
///
/// Dividing by a subnormal minimum distance would overflow the exponential
/// weights, so anything that small is handled by the tie branch instead.
pub const MIN_DISTANCE: f64 = f64::MIN_POSITIVE;

/// Relative singular-value cutoff multiplier.
///
/// Singular values `σ_k ≤ SVD_RCOND_FACTOR · max(rows, cols) · ε · σ_max`
/// are treated as zero, which yields the minimum-norm least-squares solution
/// for rank-deficient local regressions.
pub const SVD_RCOND_FACTOR: f64 = 1.0;

/// Relative floor for centered sums of squares.
///
/// A constant sequence has a centered sum of squares that is exactly zero in
/// exact arithmetic but only ≈ n·(ε·c)² in `f64`. Comparing against the raw
/// sum of squares keeps the test scale-free.
pub const RELATIVE_VARIANCE_FLOOR: f64 = 1e-20;

/// Absolute singular-value cutoff for a `rows × cols` system.
///
/// # Parameters
/// - `rows`, `cols`: shape of the (weighted) design matrix.
/// - `max_singular_value`: largest singular value of that matrix.
///
/// # Returns
/// - A non-negative threshold; `0.0` when `max_singular_value` is zero or
///   not finite.
pub fn svd_cutoff(rows: usize, cols: usize, max_singular_value: f64) -> f64 {
    if !max_singular_value.is_finite() || max_singular_value <= 0.0 {
        return 0.0;
    }
    SVD_RCOND_FACTOR * (rows.max(cols) as f64) * f64::EPSILON * max_singular_value
}

/// Whether a centered sum of squares is indistinguishable from zero.
///
/// # Parameters
/// - `centered_ss`: `Σ (x_i − x̄)²`.
/// - `raw_ss`: `Σ x_i²` over the same values.
pub fn has_degenerate_spread(centered_ss: f64, raw_ss: f64) -> bool {
    centered_ss <= RELATIVE_VARIANCE_FLOOR * raw_ss || centered_ss <= 0.0
}
