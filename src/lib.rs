//! rust_edm — empirical dynamic modeling forecasts for scalar time series.
//!
//! Purpose
//! -------
//! Serve as the crate root for the forecasting engine. The crate reconstructs
//! a state-space attractor from a single observed variable via time-delay
//! embedding and forecasts future values either by simplex projection
//! (nearest-neighbor interpolation) or by S-map (locally weighted linear
//! regression), then scores the forecasts with skill statistics.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`edm`, `skill`, and
//!   `numerical_stability`) as the public crate surface.
//! - Keep every run a pure function of the shared input [`edm::Series`], a
//!   resolved [`edm::ParameterSet`], and [`edm::EngineOptions`]; nothing is
//!   cached or mutated across parameter combinations.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series arrive already parsed into a canonical time-indexed
//!   sequence; missing observations are `NaN`.
//! - Parameter grids are expanded by the caller; the engine receives one
//!   [`edm::ParameterSet`] at a time or an ordered list of them.
//! - All failures are reported through [`edm::EDMError`]; numerical
//!   degeneracies inside a single query degrade to a missing prediction
//!   rather than an error.
//!
//! Conventions
//! -----------
//! - Indices are 0-based row indices into the series. Index order, not time
//!   order, is canonical everywhere.
//! - Library and prediction ranges are inclusive on both ends.
//! - Logging goes through `tracing`; the crate never installs a subscriber.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code builds a [`edm::Series`], picks library and prediction
//!   ranges, and drives a [`edm::Runner`]:
//!
//!   ```rust
//!   use ndarray::Array1;
//!   use rust_edm::edm::prelude::*;
//!
//!   let values = Array1::from_iter((0..60).map(|t| (0.3 * t as f64).sin()));
//!   let series = Series::from_values(values)?;
//!   let all = vec![IndexRange::full(series.len())?];
//!   let runner = Runner::new(&series, all.clone(), all, EngineOptions::default())?;
//!   let params = ParameterSet::simplex(3, 1, 1)?;
//!   let output = runner.run(&params)?;
//!   assert!(output.stats.num_predictions > 0);
//!   # Ok::<(), EDMError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules.
//! - End-to-end scenarios (linear series, constant series, epsilon
//!   starvation, OLS recovery) live in `tests/integration_forecast_pipeline.rs`.

pub mod edm;
pub mod numerical_stability;
pub mod skill;
