//! skill::stats — forecast skill statistics and the persistence baseline.
//!
//! Purpose
//! -------
//! Reduce paired (observed, predicted) sequences into the skill statistics
//! reported for every parameter set: Pearson correlation, mean absolute
//! error, root mean squared error, the fraction of correctly predicted
//! directions of change, and the Fisher z p-value of the correlation.
//!
//! Key behaviors
//! -------------
//! - [`SkillStats::compute`] scores a forecast against observations, given
//!   the reference value each forecast started from (x[query]).
//! - [`SkillStats::persistence`] scores the constant baseline that predicts
//!   the reference value itself, over the identical query set.
//! - Statistics that are undefined for the given data (zero variance,
//!   too few pairs) are reported as `None` rather than `NaN`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `observed`, `predicted`, and `reference` have equal lengths; pairs with
//!   a non-finite observed or predicted value are ignored.
//! - `num_predictions` counts only the pairs actually used.
//!
//! Conventions
//! -----------
//! - Signs are three-valued (−1, 0, +1); a forecast with no change agrees
//!   only with an observation with no change.
//! - `percent_correct_sign` is a fraction in `[0, 1]`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover perfect forecasts, constant sequences (undefined ρ),
//!   affine invariance of ρ, the sign statistic on a monotone series, and
//!   the persistence baseline.
use crate::{numerical_stability::has_degenerate_spread, skill::significance::fisher_p_value};
use ndarray::ArrayView1;

/// SkillStats — summary statistics of one forecast pass.
///
/// Fields
/// ------
/// - `num_predictions`: `usize`
///   Number of pairs with both observed and predicted present.
/// - `rho`: `Option<f64>`
///   Pearson correlation; `None` with fewer than two pairs or when either
///   side has zero variance.
/// - `mae`: `Option<f64>`
///   Mean absolute error; `None` when `num_predictions == 0`.
/// - `rmse`: `Option<f64>`
///   Root mean squared error; `None` when `num_predictions == 0`.
/// - `percent_correct_sign`: `Option<f64>`
///   Fraction of pairs where `sign(predicted − reference)` equals
///   `sign(observed − reference)`; `None` when `num_predictions == 0`.
/// - `p_value`: `Option<f64>`
///   One-sided Fisher z p-value for `rho > 0`; `None` when `rho` is
///   undefined or `num_predictions < 4`.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillStats {
    pub num_predictions: usize,
    pub rho: Option<f64>,
    pub mae: Option<f64>,
    pub rmse: Option<f64>,
    pub percent_correct_sign: Option<f64>,
    pub p_value: Option<f64>,
}

impl SkillStats {
    /// Statistics of a pass that produced no usable pairs.
    pub fn empty() -> SkillStats {
        SkillStats {
            num_predictions: 0,
            rho: None,
            mae: None,
            rmse: None,
            percent_correct_sign: None,
            p_value: None,
        }
    }

    /// Score a forecast against observations.
    ///
    /// Parameters
    /// ----------
    /// - `observed`: `ArrayView1<f64>`
    ///   Observed target values (`NaN` = missing).
    /// - `predicted`: `ArrayView1<f64>`
    ///   Forecasts aligned with `observed` (`NaN` = missing).
    /// - `reference`: `ArrayView1<f64>`
    ///   Value each forecast started from, used for the sign statistic.
    ///
    /// Returns
    /// -------
    /// `SkillStats`
    ///   Statistics over the pairs where both `observed` and `predicted`
    ///   are finite.
    ///
    /// Panics
    /// ------
    /// - Never panics for equal-length inputs; unequal lengths are a
    ///   programmer error caught by `debug_assert!`.
    pub fn compute(
        observed: ArrayView1<f64>, predicted: ArrayView1<f64>, reference: ArrayView1<f64>,
    ) -> SkillStats {
        debug_assert_eq!(observed.len(), predicted.len());
        debug_assert_eq!(observed.len(), reference.len());

        let mut obs = Vec::with_capacity(observed.len());
        let mut pred = Vec::with_capacity(observed.len());
        let mut refs = Vec::with_capacity(observed.len());
        for ((&o, &p), &r) in observed.iter().zip(predicted.iter()).zip(reference.iter()) {
            if o.is_finite() && p.is_finite() {
                obs.push(o);
                pred.push(p);
                refs.push(r);
            }
        }

        let n = obs.len();
        if n == 0 {
            return SkillStats::empty();
        }

        let rho = pearson_correlation(&obs, &pred);
        SkillStats {
            num_predictions: n,
            rho,
            mae: Some(mean_absolute_error(&obs, &pred)),
            rmse: Some(root_mean_squared_error(&obs, &pred)),
            percent_correct_sign: sign_agreement(&obs, &pred, &refs),
            p_value: rho.and_then(|r| fisher_p_value(r, n)),
        }
    }

    /// Score the persistence baseline (`predicted = reference`).
    ///
    /// Uses the same pairing rule as [`SkillStats::compute`]; callers pass
    /// `NaN` in `reference` for queries whose forecast was missing so the
    /// baseline is evaluated over the identical query set.
    pub fn persistence(observed: ArrayView1<f64>, reference: ArrayView1<f64>) -> SkillStats {
        SkillStats::compute(observed, reference, reference)
    }
}

/// Pearson correlation of two equal-length sequences.
///
/// Returns `None` for fewer than two pairs or when either sequence has a
/// centered sum of squares indistinguishable from zero.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 || y.len() != n {
        return None;
    }
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let (mut sxx, mut syy, mut sxy, mut raw_x, mut raw_y) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
        raw_x += xi * xi;
        raw_y += yi * yi;
    }
    if has_degenerate_spread(sxx, raw_x) || has_degenerate_spread(syy, raw_y) {
        return None;
    }
    Some((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}

/// Mean absolute error; `0.0` for empty input.
pub fn mean_absolute_error(observed: &[f64], predicted: &[f64]) -> f64 {
    if observed.is_empty() {
        return 0.0;
    }
    let total: f64 = observed.iter().zip(predicted).map(|(o, p)| (o - p).abs()).sum();
    total / observed.len() as f64
}

/// Root mean squared error; `0.0` for empty input.
pub fn root_mean_squared_error(observed: &[f64], predicted: &[f64]) -> f64 {
    if observed.is_empty() {
        return 0.0;
    }
    let total: f64 = observed.iter().zip(predicted).map(|(o, p)| (o - p).powi(2)).sum();
    (total / observed.len() as f64).sqrt()
}

/// Fraction of pairs whose predicted direction of change matches the
/// observed one, relative to `reference`.
///
/// Pairs with a non-finite reference are skipped; returns `None` when no
/// pair remains.
pub fn sign_agreement(observed: &[f64], predicted: &[f64], reference: &[f64]) -> Option<f64> {
    let mut matched = 0usize;
    let mut counted = 0usize;
    for ((&o, &p), &r) in observed.iter().zip(predicted).zip(reference) {
        if !r.is_finite() {
            continue;
        }
        counted += 1;
        if direction(p - r) == direction(o - r) {
            matched += 1;
        }
    }
    if counted == 0 { None } else { Some(matched as f64 / counted as f64) }
}

fn direction(delta: f64) -> i8 {
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Perfect and imperfect forecasts (ρ, MAE, RMSE).
    // - Undefined statistics for constant and empty inputs.
    // - Affine invariance of ρ.
    // - The sign statistic on a monotone series with positive drift.
    // - The persistence baseline and missing-value pairing.
    //
    // They intentionally DO NOT cover:
    // - The Fisher p-value formula itself; see `skill::significance`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A forecast equal to the observations has ρ = 1 and zero error.
    //
    // Given
    // -----
    // - observed = predicted = [1, 3, 2, 5, 4], reference all zero.
    //
    // Expect
    // ------
    // - n = 5, ρ = 1, MAE = RMSE = 0, p-value defined and tiny.
    fn compute_perfect_forecast_has_unit_rho_and_zero_error() {
        // Arrange
        let obs = array![1.0, 3.0, 2.0, 5.0, 4.0];
        let reference = Array1::<f64>::zeros(5);

        // Act
        let stats = SkillStats::compute(obs.view(), obs.view(), reference.view());

        // Assert
        assert_eq!(stats.num_predictions, 5);
        assert_abs_diff_eq!(stats.rho.unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.mae.unwrap(), 0.0);
        assert_abs_diff_eq!(stats.rmse.unwrap(), 0.0);
        assert!(stats.p_value.unwrap() < 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Check MAE and RMSE on a hand-computed example.
    //
    // Given
    // -----
    // - observed = [0, 0, 0, 0], predicted = [1, -1, 3, -3].
    //
    // Expect
    // ------
    // - MAE = 2, RMSE = √5, ρ undefined (observed is constant).
    fn compute_errors_match_hand_computation() {
        // Arrange
        let obs = array![0.0, 0.0, 0.0, 0.0];
        let pred = array![1.0, -1.0, 3.0, -3.0];
        let reference = Array1::<f64>::zeros(4);

        // Act
        let stats = SkillStats::compute(obs.view(), pred.view(), reference.view());

        // Assert
        assert_abs_diff_eq!(stats.mae.unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.rmse.unwrap(), 5.0_f64.sqrt(), epsilon = 1e-12);
        assert!(stats.rho.is_none());
        assert!(stats.p_value.is_none());
    }

    #[test]
    // Purpose
    // -------
    // A constant series must report ρ as undefined rather than NaN.
    //
    // Given
    // -----
    // - observed and predicted both constant at 0.7.
    //
    // Expect
    // ------
    // - ρ and p-value are `None`; MAE and RMSE are defined.
    fn compute_constant_series_reports_undefined_rho() {
        // Arrange
        let obs = Array1::from_elem(12, 0.7);
        let pred = Array1::from_elem(12, 0.7);

        // Act
        let stats = SkillStats::compute(obs.view(), pred.view(), obs.view());

        // Assert
        assert_eq!(stats.num_predictions, 12);
        assert!(stats.rho.is_none());
        assert!(stats.p_value.is_none());
        assert!(stats.mae.is_some() && stats.rmse.is_some());
    }

    #[test]
    // Purpose
    // -------
    // ρ is invariant under the same positive affine map applied to both
    // sequences.
    //
    // Given
    // -----
    // - An imperfect forecast and its image under x ↦ 3.5x − 2.
    //
    // Expect
    // ------
    // - Both correlations agree to 1e-12.
    fn pearson_correlation_is_affine_invariant() {
        // Arrange
        let obs = [0.2, 1.4, -0.3, 2.2, 0.9, 1.7];
        let pred = [0.1, 1.1, 0.2, 1.9, 1.2, 1.4];
        let map = |xs: &[f64]| xs.iter().map(|x| 3.5 * x - 2.0).collect::<Vec<_>>();

        // Act
        let rho = pearson_correlation(&obs, &pred).unwrap();
        let rho_scaled = pearson_correlation(&map(&obs), &map(&pred)).unwrap();

        // Assert
        assert_abs_diff_eq!(rho, rho_scaled, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Persistence plus a positive drift always predicts an increase, which is
    // correct on a strictly increasing series.
    //
    // Given
    // -----
    // - x_t = t², reference = x_t, observed = x_{t+1}, predicted = x_t + 0.5.
    //
    // Expect
    // ------
    // - percent_correct_sign = 1.0.
    fn sign_agreement_is_one_for_monotone_series_with_positive_drift() {
        // Arrange
        let x: Vec<f64> = (0..20).map(|t| (t * t) as f64).collect();
        let reference = Array1::from_vec(x[..19].to_vec());
        let observed = Array1::from_vec(x[1..].to_vec());
        let predicted = reference.mapv(|v| v + 0.5);

        // Act
        let stats = SkillStats::compute(observed.view(), predicted.view(), reference.view());

        // Assert
        assert_eq!(stats.percent_correct_sign, Some(1.0));
    }

    #[test]
    // Purpose
    // -------
    // The persistence baseline predicts the reference value and ignores pairs
    // marked missing.
    //
    // Given
    // -----
    // - observed = reference + 1 for four pairs, plus one pair whose
    //   reference is NaN (forecast missing upstream).
    //
    // Expect
    // ------
    // - n = 4, MAE = RMSE = 1, ρ = 1.
    fn persistence_scores_constant_offset_baseline() {
        // Arrange
        let reference = array![1.0, 2.0, 4.0, 7.0, f64::NAN];
        let observed = array![2.0, 3.0, 5.0, 8.0, 12.0];

        // Act
        let stats = SkillStats::persistence(observed.view(), reference.view());

        // Assert
        assert_eq!(stats.num_predictions, 4);
        assert_abs_diff_eq!(stats.mae.unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.rmse.unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.rho.unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // No usable pairs yields the empty statistics record.
    //
    // Given
    // -----
    // - observed all NaN.
    //
    // Expect
    // ------
    // - `SkillStats::empty()`.
    fn compute_without_pairs_is_empty() {
        // Arrange
        let obs = Array1::from_elem(3, f64::NAN);
        let pred = array![1.0, 2.0, 3.0];

        // Act
        let stats = SkillStats::compute(obs.view(), pred.view(), pred.view());

        // Assert
        assert_eq!(stats, SkillStats::empty());
    }
}
