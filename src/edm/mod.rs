//! edm — empirical dynamic modeling: embedding, neighbors, forecasts.
//!
//! Purpose
//! -------
//! Provide the forecasting engine as one namespace. A scalar series is
//! embedded with time delays, nearest neighbors are searched on the
//! reconstructed attractor, and each query is forecast by simplex
//! projection or S-map before the results are reduced to skill statistics.
//!
//! Key behaviors
//! -------------
//! - [`core`]: validated inputs ([`Series`], [`IndexRange`],
//!   [`ParameterSet`], [`EngineOptions`]), the delay [`Embedding`],
//!   candidate selection, and neighbor search.
//! - [`models`]: the two predictors, the per-set [`Evaluator`], and the
//!   [`Runner`].
//! - [`errors`]: the shared [`EDMError`] type and [`EDMResult`] alias.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each run is a pure function of the shared series, one parameter set,
//!   and the engine options; no state survives between runs.
//! - Indices are 0-based rows; ranges are inclusive; missing values are
//!   `NaN` in raw columns.
//!
//! Conventions
//! -----------
//! - Configuration errors abort only the parameter set they belong to;
//!   infeasible sets are skipped by [`Runner::run_all`] with a `warn!`
//!   event; the batch fails only when every set was skipped.
//!
//! Downstream usage
//! ----------------
//! - Import the everyday surface with `use rust_edm::edm::prelude::*;`.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    CandidateIndex, DistanceNorm, Embedding, EngineOptions, IndexRange, Method, NeighborCount,
    NeighborRecord, NeighborSearch, ParameterSet, PredictionRecord, SMapCoefficients, Series,
};
pub use self::errors::{EDMError, EDMResult};
pub use self::models::{
    Evaluator, Feasibility, Forecast, ForecastOutput, Predictor, RunOutcome, Runner,
    SMapPredictor, SimplexProjector,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_edm::edm::prelude::*;
//
// to import the main engine surface in a single line.

pub mod prelude {
    pub use super::core::{
        DistanceNorm, EngineOptions, IndexRange, Method, NeighborCount, ParameterSet,
        PredictionRecord, SMapCoefficients, Series,
    };
    pub use super::errors::{EDMError, EDMResult};
    pub use super::models::{Feasibility, ForecastOutput, RunOutcome, Runner};
    pub use crate::skill::SkillStats;
}
