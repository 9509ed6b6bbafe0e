//! Distance norms over embedding vectors.
//!
//! Purpose
//! -------
//! Measure how close two delay vectors are on the reconstructed attractor.
//! The norm is chosen once per run through
//! [`EngineOptions`](crate::edm::core::options::EngineOptions).
//!
//! Key behaviors
//! -------------
//! - `L2`: `√Σ(aᵢ − bᵢ)²` (default).
//! - `L1`: `Σ|aᵢ − bᵢ|`.
//! - `Lp(P)`: `(Σ|aᵢ − bᵢ|^P)^(1/P)` with `P ≥ 1`; the absolute value is
//!   always taken, so odd exponents stay non-negative.
//! - `Lp` is evaluated as `m·(Σ(|aᵢ − bᵢ|/m)^P)^(1/P)` with `m = max|aᵢ − bᵢ|`,
//!   so large exponents never overflow for finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both vectors have the same length and finite entries; only valid
//!   embeddings are ever compared.
//! - Distances are non-negative and zero for identical vectors.
//! - Every pair of finite vectors gets a finite distance, whatever `P`.
use crate::edm::{core::validation::validate_norm_exponent, errors::EDMResult};
use ndarray::ArrayView1;

/// DistanceNorm — the metric used by neighbor search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceNorm {
    /// Manhattan distance.
    L1,
    /// Euclidean distance.
    #[default]
    L2,
    /// Minkowski distance with exponent `P ≥ 1`.
    Lp(f64),
}

impl DistanceNorm {
    /// Construct a validated Minkowski norm.
    ///
    /// `P = 1` and `P = 2` collapse to [`DistanceNorm::L1`] and
    /// [`DistanceNorm::L2`] so the cheaper kernels are used.
    ///
    /// Errors
    /// ------
    /// - `EDMError::InvalidNormExponent` when `p` is not finite or `p < 1`.
    pub fn minkowski(p: f64) -> EDMResult<Self> {
        let p = validate_norm_exponent(p)?;
        Ok(if p == 1.0 {
            DistanceNorm::L1
        } else if p == 2.0 {
            DistanceNorm::L2
        } else {
            DistanceNorm::Lp(p)
        })
    }

    /// Re-check a norm that may have been built directly from the enum.
    pub fn validate(&self) -> EDMResult<()> {
        if let DistanceNorm::Lp(p) = self {
            validate_norm_exponent(*p)?;
        }
        Ok(())
    }

    /// Distance between two equal-length vectors.
    #[inline]
    pub fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        let diffs = a.iter().zip(b.iter()).map(|(&ai, &bi)| ai - bi);
        match *self {
            DistanceNorm::L1 => diffs.map(f64::abs).sum(),
            DistanceNorm::L2 => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            DistanceNorm::Lp(p) => scaled_minkowski(diffs.map(f64::abs), p),
        }
    }
}

/// `(Σ dᵢ^p)^(1/p)` for non-negative `dᵢ`, factoring out the largest term.
fn scaled_minkowski(abs_diffs: impl Iterator<Item = f64> + Clone, p: f64) -> f64 {
    let m = abs_diffs.clone().fold(0.0_f64, f64::max);
    if m == 0.0 || !m.is_finite() {
        return m;
    }
    let sum: f64 = abs_diffs.map(|d| (d / m).powf(p)).sum();
    m * sum.powf(1.0 / p)
}
