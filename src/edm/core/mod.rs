//! core — series, parameters, embedding, and neighbor search.
//!
//! Purpose
//! -------
//! Collect the building blocks shared by both forecasting methods: the
//! validated input series, library/prediction ranges, parameter sets and
//! engine options, the delay embedding, candidate selection with its
//! exclusion rules, nearest-neighbor search, and the per-query records.
//!
//! Key behaviors
//! -------------
//! - Validate inputs once at construction ([`Series`], [`IndexRange`],
//!   [`ParameterSet`], [`EngineOptions`]) so later stages can assume them.
//! - Build an [`Embedding`] and a [`CandidateIndex`] per parameter set and
//!   answer neighbor queries through [`NeighborSearch`].
//! - Describe outputs with [`PredictionRecord`] and [`SMapCoefficients`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Indices are 0-based rows of the series; ranges are inclusive.
//! - Missing values are `NaN` in raw columns and `None` at accessors.
//! - Everything here is immutable after construction and `Sync`, so the
//!   evaluator can share it across worker threads.
//!
//! Conventions
//! -----------
//! - This module performs no I/O and no logging; errors are [`EDMError`]
//!   values, never panics on user input.
//!
//! [`EDMError`]: crate::edm::errors::EDMError

pub mod candidates;
pub mod embedding;
pub mod neighbors;
pub mod norm;
pub mod options;
pub mod params;
pub mod ranges;
pub mod records;
pub mod series;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::candidates::CandidateIndex;
pub use self::embedding::Embedding;
pub use self::neighbors::{NeighborRecord, NeighborSearch};
pub use self::norm::DistanceNorm;
pub use self::options::{EngineOptions, Method};
pub use self::params::{NeighborCount, ParameterSet};
pub use self::ranges::{IndexRange, membership_mask, sorted_indices};
pub use self::records::{PairedColumns, PredictionRecord, SMapCoefficients};
pub use self::series::Series;
pub use self::validation::{
    validate_embedding, validate_epsilon, validate_exclusion_radius, validate_norm_exponent,
    validate_ranges, validate_theta,
};
