//! skill::significance — Fisher z-test for a positive forecast correlation.
//!
//! Purpose
//! -------
//! Turn a Pearson correlation between observed and predicted values into a
//! p-value for the null hypothesis `ρ ≤ 0` using Fisher's variance
//! stabilizing transformation.
//!
//! Key behaviors
//! -------------
//! - Compute `z = atanh(ρ)` and its standard error `1 / √(n − 3)`.
//! - Return the upper-tail probability `P(Z > z / SE)` of a standard normal,
//!   evaluated with `statrs`.
//!
//! Invariants & assumptions
//! ------------------------
//! - At least [`MIN_SAMPLES_FOR_FISHER`] pairs are required; smaller samples
//!   yield `None` instead of a number.
//! - `ρ` is clamped to `[-1, 1]` before the transform so rounding noise on a
//!   perfect correlation cannot produce `NaN`.
//!
//! Testing notes
//! -------------
//! - Unit tests check the small-sample guard, the value at `ρ = 0` (0.5),
//!   monotonicity in `ρ`, and the perfect-correlation limit.
use statrs::distribution::{ContinuousCDF, Normal};

/// Smallest sample size for which `1 / √(n − 3)` is defined and positive.
pub const MIN_SAMPLES_FOR_FISHER: usize = 4;

/// One-sided Fisher z-test p-value for `ρ > 0`.
///
/// Parameters
/// ----------
/// - `rho`: `f64`
///   Sample Pearson correlation; must be finite.
/// - `n`: `usize`
///   Number of paired observations the correlation was computed from.
///
/// Returns
/// -------
/// `Option<f64>`
///   - `Some(p)` with `p ∈ [0, 1]` when `n ≥ 4` and `rho` is finite.
///   - `None` otherwise.
///
/// Examples
/// --------
/// ```rust
/// # use rust_edm::skill::significance::fisher_p_value;
/// let p = fisher_p_value(0.0, 30).unwrap();
/// assert!((p - 0.5).abs() < 1e-12);
/// assert!(fisher_p_value(0.9, 3).is_none());
/// ```
pub fn fisher_p_value(rho: f64, n: usize) -> Option<f64> {
    if n < MIN_SAMPLES_FOR_FISHER || !rho.is_finite() {
        return None;
    }
    let z = rho.clamp(-1.0, 1.0).atanh();
    let standard_error = 1.0 / ((n - 3) as f64).sqrt();
    let standard_normal = Normal::new(0.0, 1.0).ok()?;
    let p = standard_normal.sf(z / standard_error);
    if p.is_nan() { None } else { Some(p.clamp(0.0, 1.0)) }
}
