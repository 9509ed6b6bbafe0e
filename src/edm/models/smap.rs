//! S-map — locally weighted linear regression on the embedding.
//!
//! Purpose
//! -------
//! Forecast a query's target from a linear model fitted to its neighbors,
//! with neighbor weights that decay exponentially in distance. `theta`
//! tunes the fit from global (θ = 0, ordinary least squares over the
//! neighborhood) to sharply local (large θ).
//!
//! Key behaviors
//! -------------
//! - `d̄ = mean dᵢ`; `wᵢ = exp(−θ·dᵢ / d̄)`, or `wᵢ = 1` for all neighbors
//!   when `d̄` is zero.
//! - Rows `wᵢ·[1, vᵢ]` are regressed on `wᵢ·yᵢ` through
//!   [`weighted_least_squares`], which returns the minimum-norm solution for
//!   rank-deficient neighborhoods.
//! - Forecast `ŷ = c₀ + Σₖ cₖ·qₖ` for query vector `q`.
//! - Variance is `Σ ŵᵢ (yᵢ − ŷ)²` with `ŵ` the weights normalized to one.
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficient vectors have length `E + 1`, intercept first.
//! - A failed or non-finite solve yields a missing prediction for that query
//!   only; it is never an error.
//!
//! Testing notes
//! -------------
//! - Unit tests check exact recovery of a linear map at θ = 0, the
//!   zero-mean-distance branch, and coefficient retention.
use crate::{
    edm::{
        core::{embedding::Embedding, neighbors::NeighborRecord},
        models::predictor::{Forecast, Predictor},
    },
    numerical_stability::weighted_least_squares,
};
use ndarray::{Array1, Array2, ArrayView1, s};

/// SMapPredictor — locally weighted linear forecasts.
///
/// Fields
/// ------
/// - `theta`: `f64`
///   Locality, `≥ 0` (validated upstream by `ParameterSet`).
/// - `keep_coefficients`: `bool`
///   Attach the fitted coefficients to each forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SMapPredictor {
    pub theta: f64,
    pub keep_coefficients: bool,
}

impl SMapPredictor {
    pub fn new(theta: f64, keep_coefficients: bool) -> Self {
        SMapPredictor { theta, keep_coefficients }
    }

    /// Un-normalized S-map weights for the given distances.
    pub fn weights(&self, distances: &[f64]) -> Array1<f64> {
        if distances.is_empty() {
            return Array1::zeros(0);
        }
        let mean = distances.iter().sum::<f64>() / distances.len() as f64;
        if mean <= 0.0 {
            return Array1::ones(distances.len());
        }
        distances.iter().map(|&d| (-self.theta * d / mean).exp()).collect()
    }
}

impl Predictor for SMapPredictor {
    fn forecast(
        &self, query: ArrayView1<f64>, neighbors: &[NeighborRecord], embedding: &Embedding,
        targets: &[f64],
    ) -> Option<Forecast> {
        let k = neighbors.len();
        if k == 0 || targets.len() != k {
            return None;
        }
        let e = query.len();
        let distances: Vec<f64> = neighbors.iter().map(|n| n.distance).collect();
        let weights = self.weights(&distances);
        let total: f64 = weights.sum();
        if total.is_nan() || total <= 0.0 {
            return None;
        }

        let mut design = Array2::<f64>::ones((k, e + 1));
        for (mut row, n) in design.rows_mut().into_iter().zip(neighbors) {
            row.slice_mut(s![1..]).assign(&embedding.vector(n.index));
        }
        let y = ArrayView1::from(targets);
        let coefficients = weighted_least_squares(design.view(), y, weights.view())?;

        let value = coefficients[0] + coefficients.slice(s![1..]).dot(&query);
        if !value.is_finite() {
            return None;
        }
        let variance = weights
            .iter()
            .zip(targets)
            .map(|(w, t)| (w / total) * (t - value).powi(2))
            .sum::<f64>();

        Some(Forecast {
            value,
            variance,
            coefficients: self.keep_coefficients.then_some(coefficients),
        })
    }
}
