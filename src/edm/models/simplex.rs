//! Simplex projection — exponentially weighted nearest-neighbor forecasts.
//!
//! Purpose
//! -------
//! Forecast a query's target as a weighted average of its neighbors'
//! targets, with weights decaying exponentially in distance relative to the
//! closest neighbor.
//!
//! Key behaviors
//! -------------
//! - `d₁ = min dᵢ`. When `d₁ ≤ MIN_DISTANCE`, the `m` neighbors at zero
//!   distance share weight `1/m` and all others get `0`.
//! - Otherwise `wᵢ = exp(−dᵢ / d₁)`, normalized to sum to one.
//! - Forecast `ŷ = Σ wᵢ yᵢ`; variance `Σ wᵢ (yᵢ − ŷ)²`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Weights are non-negative and sum to one for any non-empty neighbor set.
//! - The nearest neighbor always has weight `e⁻¹ / Σ` > 0, so the
//!   normalization never divides by zero in the exponential branch.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the exponential weights, the zero-distance branch,
//!   and the single-neighbor case.
use crate::{
    edm::{
        core::{embedding::Embedding, neighbors::NeighborRecord},
        models::predictor::{Forecast, Predictor},
    },
    numerical_stability::MIN_DISTANCE,
};
use ndarray::ArrayView1;

/// SimplexProjector — the simplex forecasting rule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimplexProjector;

impl Predictor for SimplexProjector {
    fn forecast(
        &self, _query: ArrayView1<f64>, neighbors: &[NeighborRecord], _embedding: &Embedding,
        targets: &[f64],
    ) -> Option<Forecast> {
        if neighbors.is_empty() || neighbors.len() != targets.len() {
            return None;
        }
        let distances: Vec<f64> = neighbors.iter().map(|n| n.distance).collect();
        let weights = simplex_weights(&distances);

        let value: f64 = weights.iter().zip(targets).map(|(w, y)| w * y).sum();
        let variance: f64 = weights.iter().zip(targets).map(|(w, y)| w * (y - value).powi(2)).sum();
        if !value.is_finite() {
            return None;
        }
        Some(Forecast { value, variance, coefficients: None })
    }
}

/// Normalized simplex weights for the given neighbor distances.
///
/// Parameters
/// ----------
/// - `distances`: `&[f64]`
///   Non-negative, finite distances (any order).
///
/// Returns
/// -------
/// `Vec<f64>`
///   Weights aligned with `distances` summing to one; empty for empty input.
///
/// Examples
/// --------
/// ```rust
/// # use rust_edm::edm::models::simplex::simplex_weights;
/// let w = simplex_weights(&[0.0, 0.0, 3.0]);
/// assert_eq!(w, vec![0.5, 0.5, 0.0]);
/// ```
pub fn simplex_weights(distances: &[f64]) -> Vec<f64> {
    if distances.is_empty() {
        return Vec::new();
    }
    let d_min = distances.iter().copied().fold(f64::INFINITY, f64::min);

    let raw: Vec<f64> = if d_min <= MIN_DISTANCE {
        distances.iter().map(|&d| if d <= MIN_DISTANCE { 1.0 } else { 0.0 }).collect()
    } else {
        distances.iter().map(|&d| (-d / d_min).exp()).collect()
    };
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}
