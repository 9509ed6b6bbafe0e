//! EDM parameter sets — one resolved `(E, tau, tp, nn, theta)` combination.
//!
//! Purpose
//! -------
//! Represent a single, validated parameter combination for one forecast
//! pass. Grid expansion happens upstream; the engine receives these values
//! one at a time (or as an ordered list) and never mutates them.
//!
//! Key behaviors
//! -------------
//! - [`ParameterSet::new`] validates `E ≥ 1`, `tau ≥ 1`, `theta ≥ 0`, and an
//!   explicit neighbor count `≥ 1`.
//! - [`ParameterSet::simplex`] and [`ParameterSet::smap`] fill in the usual
//!   neighbor-count defaults for each method (`E + 1` and all admissible).
//! - [`NeighborCount`] resolves the count against the embedding dimension.
//!
//! Invariants & assumptions
//! ------------------------
//! - `tp` is any integer; negative horizons forecast into the past and
//!   `tp = 0` reconstructs the current value.
//! - `theta` is carried for every set but only read by the S-map predictor.
//!
//! Conventions
//! -----------
//! - Embedding vectors look back in time: component `k` of the vector at row
//!   `i` is `x[i − k·tau]`, so the first valid row is `(E − 1)·tau`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover validation failures, neighbor-count resolution, and the
//!   raw-integer mapping used by grid expanders.
use crate::edm::{
    core::validation::{validate_embedding, validate_theta},
    errors::{EDMError, EDMResult},
};

/// NeighborCount — how many nearest neighbors a query uses.
///
/// Variants
/// --------
/// - `Fixed(k)`: exactly `k ≥ 1` neighbors (fewer when not enough are
///   admissible).
/// - `EPlusOne`: `E + 1` neighbors, the minimal simplex around a point in an
///   `E`-dimensional embedding.
/// - `AllAdmissible`: every admissible candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborCount {
    Fixed(usize),
    EPlusOne,
    AllAdmissible,
}

impl NeighborCount {
    /// Map a raw grid value: `k ≥ 1` is explicit, anything smaller means
    /// "all admissible".
    pub fn from_raw(raw: i64) -> NeighborCount {
        if raw >= 1 {
            NeighborCount::Fixed(raw as usize)
        } else {
            NeighborCount::AllAdmissible
        }
    }

    /// Resolve against embedding dimension `e`; `None` means unbounded.
    pub fn limit(&self, e: usize) -> Option<usize> {
        match *self {
            NeighborCount::Fixed(k) => Some(k),
            NeighborCount::EPlusOne => Some(e + 1),
            NeighborCount::AllAdmissible => None,
        }
    }
}

/// ParameterSet — one validated forecasting configuration.
///
/// Fields
/// ------
/// - `e`: `usize`
///   Embedding dimension, `≥ 1`.
/// - `tau`: `usize`
///   Embedding lag, `≥ 1`.
/// - `tp`: `isize`
///   Forecast horizon; the target of row `i` is row `i + tp`.
/// - `nn`: [`NeighborCount`]
///   Neighbor count policy.
/// - `theta`: `f64`
///   S-map locality (`0` = global linear fit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub e: usize,
    pub tau: usize,
    pub tp: isize,
    pub nn: NeighborCount,
    pub theta: f64,
}

impl ParameterSet {
    /// Construct a validated parameter set.
    ///
    /// Errors
    /// ------
    /// - `EDMError::InvalidEmbeddingDimension` / `EDMError::InvalidLag` for a
    ///   zero `e` / `tau`.
    /// - `EDMError::InvalidNeighborCount` for `NeighborCount::Fixed(0)`.
    /// - `EDMError::InvalidTheta` for negative or non-finite `theta`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_edm::edm::core::params::{NeighborCount, ParameterSet};
    /// let p = ParameterSet::new(3, 2, 1, NeighborCount::Fixed(5), 0.0).unwrap();
    /// assert_eq!(p.neighbor_limit(), Some(5));
    /// assert!(ParameterSet::new(0, 1, 1, NeighborCount::EPlusOne, 0.0).is_err());
    /// ```
    pub fn new(e: usize, tau: usize, tp: isize, nn: NeighborCount, theta: f64) -> EDMResult<Self> {
        let params = ParameterSet { e, tau, tp, nn, theta };
        params.validate()?;
        Ok(params)
    }

    /// Re-check a set that may have been built as a struct literal.
    pub fn validate(&self) -> EDMResult<()> {
        validate_embedding(self.e, self.tau)?;
        if let NeighborCount::Fixed(0) = self.nn {
            return Err(EDMError::InvalidNeighborCount { nn: 0 });
        }
        validate_theta(self.theta)?;
        Ok(())
    }

    /// Simplex defaults: `E + 1` neighbors, `theta = 0`.
    pub fn simplex(e: usize, tau: usize, tp: isize) -> EDMResult<Self> {
        ParameterSet::new(e, tau, tp, NeighborCount::EPlusOne, 0.0)
    }

    /// S-map defaults: all admissible neighbors.
    pub fn smap(e: usize, tau: usize, tp: isize, theta: f64) -> EDMResult<Self> {
        ParameterSet::new(e, tau, tp, NeighborCount::AllAdmissible, theta)
    }

    /// Same set with a different neighbor policy.
    pub fn with_neighbors(self, nn: NeighborCount) -> EDMResult<Self> {
        ParameterSet::new(self.e, self.tau, self.tp, nn, self.theta)
    }

    /// Neighbor limit for this set; `None` = all admissible.
    pub fn neighbor_limit(&self) -> Option<usize> {
        self.nn.limit(self.e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation in `ParameterSet::new`.
    // - Method defaults and neighbor-count resolution.
    //
    // They intentionally DO NOT cover:
    // - How the neighbor limit is applied during search; see `neighbors`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Invalid configurations are reported, not clamped.
    //
    // Given
    // -----
    // - Fixed(0) neighbors, theta = −1, tau = 0.
    //
    // Expect
    // ------
    // - `InvalidNeighborCount`, `InvalidTheta`, `InvalidLag`.
    fn new_rejects_invalid_configuration() {
        assert_eq!(
            ParameterSet::new(2, 1, 1, NeighborCount::Fixed(0), 0.0),
            Err(EDMError::InvalidNeighborCount { nn: 0 })
        );
        assert!(matches!(ParameterSet::smap(2, 1, 1, -1.0), Err(EDMError::InvalidTheta { .. })));
        assert_eq!(ParameterSet::simplex(2, 0, 1), Err(EDMError::InvalidLag { tau: 0 }));
    }

    #[test]
    // Purpose
    // -------
    // Method constructors pick the conventional neighbor counts.
    //
    // Given
    // -----
    // - simplex(3, 1, 1) and smap(3, 1, 1, 2.0).
    //
    // Expect
    // ------
    // - Simplex limit 4, S-map unbounded; with_neighbors overrides.
    fn method_defaults_resolve_neighbor_limits() {
        // Arrange
        let simplex = ParameterSet::simplex(3, 1, 1).unwrap();
        let smap = ParameterSet::smap(3, 1, 1, 2.0).unwrap();

        // Act
        let fixed = smap.with_neighbors(NeighborCount::Fixed(7)).unwrap();

        // Assert
        assert_eq!(simplex.neighbor_limit(), Some(4));
        assert_eq!(smap.neighbor_limit(), None);
        assert_eq!(fixed.neighbor_limit(), Some(7));
        assert_eq!(fixed.theta, 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Raw grid values below one mean "all admissible".
    //
    // Given
    // -----
    // - Raw values 0, −3, 5.
    //
    // Expect
    // ------
    // - AllAdmissible, AllAdmissible, Fixed(5).
    fn from_raw_maps_small_values_to_all_admissible() {
        assert_eq!(NeighborCount::from_raw(0), NeighborCount::AllAdmissible);
        assert_eq!(NeighborCount::from_raw(-3), NeighborCount::AllAdmissible);
        assert_eq!(NeighborCount::from_raw(5), NeighborCount::Fixed(5));
    }
}
