//! Errors for the EDM forecasting engine (configuration checks, series
//! validation, and per-parameter-set infeasibility).
//!
//! This module defines the engine error type, [`EDMError`], used across the
//! embedding, neighbor-search, prediction, and runner layers. Variants fall
//! into three families that the runner treats differently:
//!
//! ## Conventions
//! - **Configuration errors** (non-positive `E`/`tau`, malformed norms,
//!   malformed ranges, invalid `theta`/`epsilon`/radius) abort the parameter
//!   set they belong to.
//! - **Infeasibility errors** (no valid query, no valid candidate, no
//!   prediction produced) skip the parameter set with a warning.
//! - [`EDMError::AllParameterSetsInfeasible`] is the only terminal error of a
//!   batch run.
//! - **Indices are 0-based**; ranges are inclusive on both ends.

/// Crate-wide result alias for engine operations that may produce [`EDMError`].
pub type EDMResult<T> = Result<T, EDMError>;

/// Unified error type for EDM forecasting.
///
/// Covers input series validation, configuration checks for parameter sets
/// and engine options, and infeasibility conditions discovered before or
/// during a prediction pass. Implements `Display`/`Error` for idiomatic
/// `?`-based propagation.
#[derive(Debug, Clone, PartialEq)]
pub enum EDMError {
    // ---- Series validation ----
    /// Series has no rows.
    EmptySeries,

    /// Time and value columns have different lengths.
    LengthMismatch { times: usize, values: usize },

    /// A time stamp is NaN/±inf.
    NonFiniteTime { index: usize, value: f64 },

    /// A value is ±inf (missing values are NaN and allowed).
    InfiniteValue { index: usize, value: f64 },

    // ---- Configuration ----
    /// Embedding dimension must be ≥ 1.
    InvalidEmbeddingDimension { e: usize },

    /// Embedding lag must be ≥ 1.
    InvalidLag { tau: usize },

    /// Explicit neighbor count must be ≥ 1.
    InvalidNeighborCount { nn: usize },

    /// S-map locality parameter must be finite and ≥ 0.
    InvalidTheta { theta: f64 },

    /// Minkowski exponent must be finite and ≥ 1.
    InvalidNormExponent { p: f64 },

    /// Distance cutoff must be finite and ≥ 0.
    InvalidEpsilon { value: f64 },

    /// Temporal exclusion radius must be finite and ≥ 0.
    InvalidExclusionRadius { value: f64 },

    /// Inclusive range bounds are malformed or out of series bounds.
    InvalidRange { start: usize, end: usize, len: usize, reason: &'static str },

    /// A library or prediction set contains no ranges.
    EmptyRanges { role: &'static str },

    /// A batch run was requested with no parameter sets.
    EmptyParameterList,

    // ---- Infeasibility ----
    /// No row in the prediction set has a valid embedding.
    NoValidQueries { e: usize, tau: usize, tp: isize },

    /// No row in the library has a valid embedding and a usable target.
    NoValidCandidates { e: usize, tau: usize, tp: isize },

    /// Every query ended without admissible neighbors.
    NoPredictions { e: usize, tau: usize, tp: isize },

    /// Every parameter set of a batch was skipped.
    AllParameterSetsInfeasible { attempted: usize },
}

impl EDMError {
    /// `true` for errors caused by malformed inputs or configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EDMError::InvalidEmbeddingDimension { .. }
                | EDMError::InvalidLag { .. }
                | EDMError::InvalidNeighborCount { .. }
                | EDMError::InvalidTheta { .. }
                | EDMError::InvalidNormExponent { .. }
                | EDMError::InvalidEpsilon { .. }
                | EDMError::InvalidExclusionRadius { .. }
                | EDMError::InvalidRange { .. }
                | EDMError::EmptyRanges { .. }
                | EDMError::EmptyParameterList
        )
    }

    /// `true` for errors that mark a single parameter set as infeasible.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            EDMError::NoValidQueries { .. }
                | EDMError::NoValidCandidates { .. }
                | EDMError::NoPredictions { .. }
        )
    }
}

impl std::error::Error for EDMError {}

impl std::fmt::Display for EDMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Series validation ----
            EDMError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            EDMError::LengthMismatch { times, values } => {
                write!(f, "Time column has {times} rows but value column has {values} rows.")
            }
            EDMError::NonFiniteTime { index, value } => {
                write!(f, "Time stamp at index {index} is non-finite: {value}")
            }
            EDMError::InfiniteValue { index, value } => {
                write!(f, "Value at index {index} is infinite: {value}. Use NaN for missing data.")
            }
            // ---- Configuration ----
            EDMError::InvalidEmbeddingDimension { e } => {
                write!(f, "Embedding dimension E must be >= 1; got: {e}")
            }
            EDMError::InvalidLag { tau } => {
                write!(f, "Embedding lag tau must be >= 1; got: {tau}")
            }
            EDMError::InvalidNeighborCount { nn } => {
                write!(f, "Explicit neighbor count must be >= 1; got: {nn}")
            }
            EDMError::InvalidTheta { theta } => {
                write!(f, "S-map theta must be finite and >= 0; got: {theta}")
            }
            EDMError::InvalidNormExponent { p } => {
                write!(f, "Lp norm exponent must be finite and >= 1; got: {p}")
            }
            EDMError::InvalidEpsilon { value } => {
                write!(f, "Distance cutoff epsilon must be finite and >= 0; got: {value}")
            }
            EDMError::InvalidExclusionRadius { value } => {
                write!(f, "Exclusion radius must be finite and >= 0; got: {value}")
            }
            EDMError::InvalidRange { start, end, len, reason } => {
                write!(f, "Invalid range [{start}, {end}] for series of length {len}: {reason}")
            }
            EDMError::EmptyRanges { role } => {
                write!(f, "The {role} must contain at least one range.")
            }
            EDMError::EmptyParameterList => {
                write!(f, "At least one parameter set is required.")
            }
            // ---- Infeasibility ----
            EDMError::NoValidQueries { e, tau, tp } => {
                write!(f, "No prediction row has a valid embedding for E={e}, tau={tau}, tp={tp}.")
            }
            EDMError::NoValidCandidates { e, tau, tp } => {
                write!(
                    f,
                    "No library row has a valid embedding and target for E={e}, tau={tau}, tp={tp}."
                )
            }
            EDMError::NoPredictions { e, tau, tp } => {
                write!(f, "No query had admissible neighbors for E={e}, tau={tau}, tp={tp}.")
            }
            EDMError::AllParameterSetsInfeasible { attempted } => {
                write!(f, "All {attempted} parameter sets were infeasible or invalid.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` messages embedding their payloads.
    // - The configuration / infeasibility classification used by the runner.
    //
    // They intentionally DO NOT cover:
    // - How the runner reacts to each family; that is tested in
    //   `edm::models::runner`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidRange` reports the offending bounds and length.
    //
    // Given
    // -----
    // - An `InvalidRange` with start = 4, end = 12, len = 10.
    //
    // Expect
    // ------
    // - The message contains "4", "12" and "10".
    fn invalid_range_includes_bounds_in_display() {
        // Arrange
        let err =
            EDMError::InvalidRange { start: 4, end: 12, len: 10, reason: "end out of bounds" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('4') && msg.contains("12") && msg.contains("10"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure infeasibility variants embed the parameter triple.
    //
    // Given
    // -----
    // - `NoValidQueries` with E = 3, tau = 2, tp = -1.
    //
    // Expect
    // ------
    // - The message mentions "E=3", "tau=2" and "tp=-1".
    fn no_valid_queries_includes_parameters_in_display() {
        // Arrange
        let err = EDMError::NoValidQueries { e: 3, tau: 2, tp: -1 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("E=3") && msg.contains("tau=2") && msg.contains("tp=-1"), "{msg}");
    }

    #[test]
    // Purpose
    // -------
    // Check that configuration and infeasibility families are disjoint and
    // that the terminal batch error belongs to neither.
    //
    // Given
    // -----
    // - One configuration error, one infeasibility error, and the terminal
    //   `AllParameterSetsInfeasible` error.
    //
    // Expect
    // ------
    // - Each is classified into exactly the expected family.
    fn error_families_are_classified() {
        // Arrange
        let config = EDMError::InvalidLag { tau: 0 };
        let infeasible = EDMError::NoPredictions { e: 2, tau: 1, tp: 1 };
        let terminal = EDMError::AllParameterSetsInfeasible { attempted: 3 };

        // Act / Assert
        assert!(config.is_configuration_error() && !config.is_infeasible());
        assert!(infeasible.is_infeasible() && !infeasible.is_configuration_error());
        assert!(!terminal.is_infeasible() && !terminal.is_configuration_error());
    }
}
