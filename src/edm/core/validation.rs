//! EDM validation helpers — reusable checks for parameters, norms, ranges,
//! and engine options.
//!
//! Purpose
//! -------
//! Centralize the small validation routines used by [`ParameterSet`],
//! [`EngineOptions`], [`DistanceNorm`], and the runner so every constructor
//! fails fast with the same structured [`EDMError`] variants.
//!
//! Key behaviors
//! -------------
//! - Validate the embedding shape `(E, tau)` and explicit neighbor counts.
//! - Validate scalar knobs (`theta`, Lp exponent, `epsilon`, exclusion
//!   radius) for finiteness and sign.
//! - Validate a set of inclusive ranges against the series length.
//!
//! Conventions
//! -----------
//! - Helpers return [`EDMResult`] and never panic on invalid inputs.
//! - This module contains no I/O and no logging.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on boundary values (zero, negative,
//!   NaN, infinity, out-of-bounds range ends).
//!
//! [`ParameterSet`]: crate::edm::core::params::ParameterSet
//! [`EngineOptions`]: crate::edm::core::options::EngineOptions
//! [`DistanceNorm`]: crate::edm::core::norm::DistanceNorm
use crate::edm::{
    core::ranges::IndexRange,
    errors::{EDMError, EDMResult},
};

/// Validate the embedding dimension and lag.
///
/// Errors
/// ------
/// - `EDMError::InvalidEmbeddingDimension` when `e == 0`.
/// - `EDMError::InvalidLag` when `tau == 0`.
pub fn validate_embedding(e: usize, tau: usize) -> EDMResult<()> {
    if e == 0 {
        return Err(EDMError::InvalidEmbeddingDimension { e });
    }
    if tau == 0 {
        return Err(EDMError::InvalidLag { tau });
    }
    Ok(())
}

/// Validate the S-map locality parameter (finite, ≥ 0).
pub fn validate_theta(theta: f64) -> EDMResult<f64> {
    if !theta.is_finite() || theta < 0.0 {
        return Err(EDMError::InvalidTheta { theta });
    }
    Ok(theta)
}

/// Validate a Minkowski exponent (finite, ≥ 1).
pub fn validate_norm_exponent(p: f64) -> EDMResult<f64> {
    if !p.is_finite() || p < 1.0 {
        return Err(EDMError::InvalidNormExponent { p });
    }
    Ok(p)
}

/// Validate an optional distance cutoff (finite, ≥ 0 when set).
pub fn validate_epsilon(epsilon: Option<f64>) -> EDMResult<Option<f64>> {
    match epsilon {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(EDMError::InvalidEpsilon { value })
        }
        other => Ok(other),
    }
}

/// Validate an optional temporal exclusion radius (finite, ≥ 0 when set).
pub fn validate_exclusion_radius(radius: Option<f64>) -> EDMResult<Option<f64>> {
    match radius {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(EDMError::InvalidExclusionRadius { value })
        }
        other => Ok(other),
    }
}

/// Validate a non-empty set of inclusive ranges against a series length.
///
/// Parameters
/// ----------
/// - `ranges`: `&[IndexRange]`
///   Library or prediction ranges.
/// - `len`: `usize`
///   Number of rows in the series.
/// - `role`: `&'static str`
///   Name used in the error message ("library" or "prediction set").
///
/// Errors
/// ------
/// - `EDMError::EmptyRanges` when `ranges` is empty.
/// - `EDMError::InvalidRange` for the first range whose end lies outside
///   the series.
pub fn validate_ranges(ranges: &[IndexRange], len: usize, role: &'static str) -> EDMResult<()> {
    if ranges.is_empty() {
        return Err(EDMError::EmptyRanges { role });
    }
    for range in ranges {
        range.check_bounds(len)?;
    }
    Ok(())
}
