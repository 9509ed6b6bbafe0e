//! Runner — orchestrates embedding, neighbor search, prediction, and skill
//! statistics once per parameter set.
//!
//! Purpose
//! -------
//! Provide the public entry point of the engine. A [`Runner`] holds the
//! shared series, the library and prediction ranges, and the run-wide
//! [`EngineOptions`]; each call to [`Runner::run`] executes one stateless
//! pipeline for a single [`ParameterSet`] and returns fresh outputs.
//!
//! Key behaviors
//! -------------
//! - [`Runner::check_feasibility`] builds the embedding and candidate pool
//!   and reports how many queries and candidates are usable, failing with an
//!   infeasibility error when either count is zero.
//! - [`Runner::run`] evaluates every query with the configured method and
//!   reduces the records into [`SkillStats`] for the model and for the
//!   persistence baseline.
//! - [`Runner::run_all`] evaluates an ordered list of parameter sets
//!   (in parallel with the `parallel` feature), skipping sets that are
//!   infeasible or misconfigured, and fails only when every set was skipped.
//!
//! Invariants & assumptions
//! ------------------------
//! - The series is shared read-only; nothing is cached between parameter
//!   sets, so results do not depend on evaluation order.
//! - Ranges and options are validated once in [`Runner::new`]; parameter
//!   sets are re-validated on every run.
//!
//! Conventions
//! -----------
//! - Logging uses `tracing`: `debug!` for each completed set, `warn!` for
//!   each skipped set. No subscriber is installed here.
//!
//! Downstream usage
//! ----------------
//! - Callers that already filtered their grid call [`Runner::run`] per set;
//!   callers that want skip-on-infeasible semantics call
//!   [`Runner::run_all`] and inspect each [`RunOutcome`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover feasibility reporting, the error families, and the
//!   batch semantics. Full numerical scenarios live in
//!   `tests/integration_forecast_pipeline.rs`.
use crate::{
    edm::{
        core::{
            candidates::CandidateIndex,
            embedding::Embedding,
            neighbors::NeighborSearch,
            options::{EngineOptions, Method},
            params::ParameterSet,
            ranges::{IndexRange, sorted_indices},
            records::{PairedColumns, PredictionRecord, SMapCoefficients},
            series::Series,
            validation::validate_ranges,
        },
        errors::{EDMError, EDMResult},
        models::{evaluator::Evaluator, simplex::SimplexProjector, smap::SMapPredictor},
    },
    skill::SkillStats,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

/// Counts of usable rows for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feasibility {
    /// Prediction rows with a valid embedding.
    pub valid_queries: usize,
    /// Library rows with a valid embedding and a usable target.
    pub valid_candidates: usize,
}

/// ForecastOutput — everything produced for one parameter set.
///
/// Fields
/// ------
/// - `params`: [`ParameterSet`] the outputs belong to.
/// - `stats`: [`SkillStats`] of the forecast.
/// - `baseline`: [`SkillStats`] of the persistence forecast over the same
///   queries.
/// - `records`: per-query records when `EngineOptions::raw_output` is set.
/// - `coefficients`: S-map coefficients when the method is S-map and
///   `EngineOptions::save_coefficients` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutput {
    pub params: ParameterSet,
    pub stats: SkillStats,
    pub baseline: SkillStats,
    pub records: Option<Vec<PredictionRecord>>,
    pub coefficients: Option<SMapCoefficients>,
}

/// Outcome of one parameter set in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(Box<ForecastOutput>),
    Skipped { params: ParameterSet, reason: EDMError },
}

impl RunOutcome {
    pub fn output(&self) -> Option<&ForecastOutput> {
        match self {
            RunOutcome::Completed(out) => Some(out),
            RunOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Runner — the forecasting engine bound to one series and one set of
/// ranges and options.
#[derive(Debug, Clone)]
pub struct Runner<'a> {
    series: &'a Series,
    library: Vec<IndexRange>,
    prediction: Vec<IndexRange>,
    options: EngineOptions,
}

/// Embedding, queries and candidates of one parameter set.
struct Prepared<'a> {
    embedding: Embedding,
    queries: Vec<usize>,
    candidates: CandidateIndex<'a>,
}

impl<'a> Runner<'a> {
    /// Bind the engine to a series, its ranges, and run-wide options.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&Series`
    ///   Shared input series.
    /// - `library`: `Vec<IndexRange>`
    ///   Rows that may serve as neighbors.
    /// - `prediction`: `Vec<IndexRange>`
    ///   Rows to forecast; may overlap `library`.
    /// - `options`: [`EngineOptions`]
    ///   Method, norm, exclusion rules, and output flags.
    ///
    /// Errors
    /// ------
    /// - `EDMError::EmptyRanges` / `EDMError::InvalidRange` for malformed
    ///   ranges.
    /// - Any option validation error (`InvalidNormExponent`,
    ///   `InvalidEpsilon`, `InvalidExclusionRadius`).
    pub fn new(
        series: &'a Series, library: Vec<IndexRange>, prediction: Vec<IndexRange>,
        options: EngineOptions,
    ) -> EDMResult<Self> {
        validate_ranges(&library, series.len(), "library")?;
        validate_ranges(&prediction, series.len(), "prediction set")?;
        options.validate()?;
        Ok(Runner { series, library, prediction, options })
    }

    /// Count usable queries and candidates without searching neighbors.
    ///
    /// Errors
    /// ------
    /// - Configuration errors from [`ParameterSet::validate`].
    /// - `EDMError::NoValidQueries` when no prediction row embeds.
    /// - `EDMError::NoValidCandidates` when the candidate pool is empty.
    pub fn check_feasibility(&self, params: &ParameterSet) -> EDMResult<Feasibility> {
        let prepared = self.prepare(params)?;
        Ok(Feasibility {
            valid_queries: prepared.queries.len(),
            valid_candidates: prepared.candidates.len(),
        })
    }

    /// Run one parameter set end to end.
    ///
    /// Returns
    /// -------
    /// `EDMResult<ForecastOutput>`
    ///   Skill statistics for the model and the persistence baseline, plus
    ///   raw records and coefficients when requested.
    ///
    /// Errors
    /// ------
    /// - Configuration errors from [`ParameterSet::validate`].
    /// - `EDMError::NoValidQueries` / `EDMError::NoValidCandidates` from the
    ///   feasibility check.
    /// - `EDMError::NoPredictions` when every query ended without a
    ///   forecast.
    pub fn run(&self, params: &ParameterSet) -> EDMResult<ForecastOutput> {
        let prepared = self.prepare(params)?;
        let search = NeighborSearch::new(
            &prepared.embedding,
            &prepared.candidates,
            self.options.norm,
            self.options.epsilon,
        );
        let evaluator = Evaluator::new(
            self.series,
            &prepared.embedding,
            &prepared.candidates,
            search,
            params.tp,
            params.neighbor_limit(),
        );
        let records = match self.options.method {
            Method::Simplex => evaluator.evaluate(&prepared.queries, &SimplexProjector),
            Method::SMap => {
                let predictor = SMapPredictor::new(params.theta, self.options.save_coefficients);
                evaluator.evaluate(&prepared.queries, &predictor)
            }
        };

        if records.iter().all(|r| r.predicted.is_none()) {
            return Err(EDMError::NoPredictions { e: params.e, tau: params.tau, tp: params.tp });
        }

        let cols = PairedColumns::from_records(&records);
        let stats =
            SkillStats::compute(cols.observed.view(), cols.predicted.view(), cols.reference.view());
        let baseline = SkillStats::persistence(cols.observed.view(), cols.reference.view());
        debug!(
            e = params.e,
            tau = params.tau,
            tp = params.tp,
            queries = records.len(),
            num_predictions = stats.num_predictions,
            rho = ?stats.rho,
            "parameter set completed"
        );

        let coefficients = (self.options.method == Method::SMap && self.options.save_coefficients)
            .then(|| SMapCoefficients::from_records(&records, prepared.embedding.dimension()));
        let records = self.options.raw_output.then_some(records);
        Ok(ForecastOutput { params: *params, stats, baseline, records, coefficients })
    }

    /// Run an ordered list of parameter sets, skipping those that fail.
    ///
    /// Returns
    /// -------
    /// `EDMResult<Vec<RunOutcome>>`
    ///   One outcome per input set, in input order.
    ///
    /// Errors
    /// ------
    /// - `EDMError::EmptyParameterList` for an empty list.
    /// - `EDMError::AllParameterSetsInfeasible` when no set completed.
    pub fn run_all(&self, sets: &[ParameterSet]) -> EDMResult<Vec<RunOutcome>> {
        if sets.is_empty() {
            return Err(EDMError::EmptyParameterList);
        }

        #[cfg(feature = "parallel")]
        let outcomes: Vec<RunOutcome> = sets.par_iter().map(|p| self.run_outcome(p)).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<RunOutcome> = sets.iter().map(|p| self.run_outcome(p)).collect();

        if !outcomes.iter().any(RunOutcome::is_completed) {
            return Err(EDMError::AllParameterSetsInfeasible { attempted: sets.len() });
        }
        Ok(outcomes)
    }

    fn run_outcome(&self, params: &ParameterSet) -> RunOutcome {
        match self.run(params) {
            Ok(out) => RunOutcome::Completed(Box::new(out)),
            Err(reason) => {
                let kind = if reason.is_infeasible() { "infeasible" } else { "invalid" };
                warn!(
                    e = params.e,
                    tau = params.tau,
                    tp = params.tp,
                    kind,
                    %reason,
                    "skipping parameter set"
                );
                RunOutcome::Skipped { params: *params, reason }
            }
        }
    }

    fn prepare(&self, params: &ParameterSet) -> EDMResult<Prepared<'a>> {
        params.validate()?;
        let (e, tau, tp) = (params.e, params.tau, params.tp);

        let embedding = Embedding::new(self.series, e, tau)?;
        let queries: Vec<usize> = sorted_indices(&self.prediction, self.series.len())
            .into_iter()
            .filter(|&q| embedding.is_valid(q))
            .collect();
        if queries.is_empty() {
            return Err(EDMError::NoValidQueries { e, tau, tp });
        }

        let candidates =
            CandidateIndex::new(self.series, &embedding, &self.library, tp, &self.options);
        if candidates.is_empty() {
            return Err(EDMError::NoValidCandidates { e, tau, tp });
        }
        Ok(Prepared { embedding, queries, candidates })
    }
}
