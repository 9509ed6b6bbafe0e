//! Engine options — method, distance norm, exclusion rules, and output flags.
//!
//! Purpose
//! -------
//! Collect every run-wide knob that is not part of a [`ParameterSet`] in one
//! validated value, so a [`Runner`] can be configured once and then driven
//! through many parameter sets.
//!
//! Key behaviors
//! -------------
//! - [`Method`] selects the simplex projector or the S-map predictor.
//! - [`EngineOptions`] carries the norm, the optional exclusion radius and
//!   distance cutoff, the horizon-window exclusion flag, and the flags that
//!   request raw records and S-map coefficients.
//! - `with_*` builders return updated copies; fallible ones revalidate.
//!
//! Invariants & assumptions
//! ------------------------
//! - `exclusion_radius` and `epsilon` are finite and non-negative when set.
//! - A `DistanceNorm::Lp(p)` carried here has `p ≥ 1`.
//! - `save_coefficients` only has an effect for [`Method::SMap`].
//!
//! Testing notes
//! -------------
//! - Unit tests check the defaults, builder validation, and that
//!   `EngineOptions::new` rejects malformed norms.
//!
//! [`ParameterSet`]: crate::edm::core::params::ParameterSet
//! [`Runner`]: crate::edm::models::runner::Runner
use crate::edm::{
    core::{
        norm::DistanceNorm,
        validation::{validate_epsilon, validate_exclusion_radius},
    },
    errors::EDMResult,
};

/// Method — forecasting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Exponentially weighted nearest-neighbor average.
    #[default]
    Simplex,
    /// Locally weighted linear regression.
    SMap,
}

/// EngineOptions — run-wide configuration.
///
/// Fields
/// ------
/// - `method`: [`Method`]
///   Predictor used for every parameter set.
/// - `norm`: [`DistanceNorm`]
///   Distance between embedding vectors.
/// - `exclusion_radius`: `Option<f64>`
///   Candidates with `|time(j) − time(query)| ≤ radius` are excluded.
/// - `epsilon`: `Option<f64>`
///   Candidates farther than `epsilon` from the query are excluded.
/// - `exclude_horizon_window`: `bool`
///   When the query lies in the library, also exclude candidates with
///   `|j − query| ≤ |tp|`.
/// - `raw_output`: `bool`
///   Return the per-query prediction records.
/// - `save_coefficients`: `bool`
///   Return S-map coefficients aligned with query indices.
///
/// Notes
/// -----
/// - `EngineOptions::default()` is simplex, L2, no radius, no cutoff, no
///   horizon window, statistics only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineOptions {
    pub method: Method,
    pub norm: DistanceNorm,
    pub exclusion_radius: Option<f64>,
    pub epsilon: Option<f64>,
    pub exclude_horizon_window: bool,
    pub raw_output: bool,
    pub save_coefficients: bool,
}

impl EngineOptions {
    /// Construct validated options; output flags start disabled.
    ///
    /// Errors
    /// ------
    /// - `EDMError::InvalidNormExponent` for an `Lp` norm with `p < 1`.
    /// - `EDMError::InvalidExclusionRadius` / `EDMError::InvalidEpsilon` for
    ///   negative or non-finite values.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_edm::edm::core::{norm::DistanceNorm, options::{EngineOptions, Method}};
    /// let opts = EngineOptions::new(Method::SMap, DistanceNorm::L1, Some(2.0), None)
    ///     .unwrap()
    ///     .with_coefficients(true);
    /// assert!(opts.save_coefficients);
    /// assert!(EngineOptions::new(Method::Simplex, DistanceNorm::Lp(0.5), None, None).is_err());
    /// ```
    pub fn new(
        method: Method, norm: DistanceNorm, exclusion_radius: Option<f64>, epsilon: Option<f64>,
    ) -> EDMResult<Self> {
        let opts = EngineOptions { method, norm, exclusion_radius, epsilon, ..Default::default() };
        opts.validate()?;
        Ok(opts)
    }

    /// Re-check every field; used by the runner on options built literally.
    pub fn validate(&self) -> EDMResult<()> {
        self.norm.validate()?;
        validate_exclusion_radius(self.exclusion_radius)?;
        validate_epsilon(self.epsilon)?;
        Ok(())
    }

    pub fn with_method(self, method: Method) -> Self {
        EngineOptions { method, ..self }
    }

    pub fn with_norm(self, norm: DistanceNorm) -> EDMResult<Self> {
        norm.validate()?;
        Ok(EngineOptions { norm, ..self })
    }

    pub fn with_exclusion_radius(self, radius: Option<f64>) -> EDMResult<Self> {
        let exclusion_radius = validate_exclusion_radius(radius)?;
        Ok(EngineOptions { exclusion_radius, ..self })
    }

    pub fn with_epsilon(self, epsilon: Option<f64>) -> EDMResult<Self> {
        let epsilon = validate_epsilon(epsilon)?;
        Ok(EngineOptions { epsilon, ..self })
    }

    pub fn with_horizon_window(self, exclude_horizon_window: bool) -> Self {
        EngineOptions { exclude_horizon_window, ..self }
    }

    pub fn with_raw_output(self, raw_output: bool) -> Self {
        EngineOptions { raw_output, ..self }
    }

    pub fn with_coefficients(self, save_coefficients: bool) -> Self {
        EngineOptions { save_coefficients, ..self }
    }
}
