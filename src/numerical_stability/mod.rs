//! numerical_stability — tolerances and a stable least-squares solver.
//!
//! Purpose
//! -------
//! Centralize the small numerical tolerances and the SVD-based solver that
//! the forecasting engine relies on, so the neighbor weighting, the S-map
//! regression, and the skill statistics share consistent guards.
//!
//! Key behaviors
//! -------------
//! - Provide [`weighted_least_squares`], a row-weighted minimum-norm
//!   least-squares solve through `nalgebra`'s SVD.
//! - Provide tolerances ([`MIN_DISTANCE`], [`RELATIVE_VARIANCE_FLOOR`],
//!   [`SVD_RCOND_FACTOR`]) and the helpers built on them.
//!
//! Invariants & assumptions
//! ------------------------
//! - All routines assume finite `f64` inputs; validation lives in the
//!   `edm` layer.
//! - Nothing here logs, allocates global state, or panics on numeric input.
//!
//! Downstream usage
//! ----------------
//! - `edm::models::smap` calls [`weighted_least_squares`] once per query.
//! - `edm::models::simplex` uses [`MIN_DISTANCE`] for its zero-distance
//!   branch; `skill` uses [`has_degenerate_spread`] to decide when a
//!   correlation is undefined.

pub mod least_squares;
pub mod tolerances;

pub use self::least_squares::weighted_least_squares;
pub use self::tolerances::{
    MIN_DISTANCE, RELATIVE_VARIANCE_FLOOR, SVD_RCOND_FACTOR, has_degenerate_spread, svd_cutoff,
};
