//! models — predictors, the evaluation pass, and the runner.
//!
//! Purpose
//! -------
//! Turn the neighbor structure built in [`crate::edm::core`] into forecasts
//! and skill statistics. Two forecasting rules implement the shared
//! [`Predictor`] trait: [`SimplexProjector`] and [`SMapPredictor`]. The
//! [`Evaluator`] applies one of them to every query, and the [`Runner`]
//! drives the whole pipeline per [`ParameterSet`].
//!
//! Key behaviors
//! -------------
//! - Predictors are stateless apart from their configuration and are safe
//!   to call from several threads at once.
//! - Numerical degeneracies (zero distances, rank-deficient neighborhoods)
//!   degrade to documented fallbacks or a missing prediction, never an
//!   error.
//! - The runner maps infeasible parameter sets to [`EDMError`] values and
//!   logs skipped sets through `tracing`.
//!
//! Downstream usage
//! ----------------
//! - Most callers only need [`Runner`], [`ForecastOutput`], and
//!   [`RunOutcome`]; the predictors are public for callers that drive the
//!   [`Evaluator`] directly.
//!
//! [`ParameterSet`]: crate::edm::core::params::ParameterSet
//! [`EDMError`]: crate::edm::errors::EDMError

pub mod evaluator;
pub mod predictor;
pub mod runner;
pub mod simplex;
pub mod smap;

pub use self::evaluator::Evaluator;
pub use self::predictor::{Forecast, Predictor};
pub use self::runner::{Feasibility, ForecastOutput, RunOutcome, Runner};
pub use self::simplex::{SimplexProjector, simplex_weights};
pub use self::smap::SMapPredictor;
