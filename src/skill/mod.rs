//! skill — forecast skill statistics and their significance.
//!
//! Purpose
//! -------
//! Score a set of paired (observed, predicted) values the same way for every
//! forecasting method: Pearson correlation, MAE, RMSE, directional accuracy,
//! and a one-sided Fisher z p-value. The same reduction is applied to the
//! persistence baseline so model skill can be read against it directly.
//!
//! Key behaviors
//! -------------
//! - [`SkillStats`] holds the summary of one forecast pass; construct it with
//!   [`SkillStats::compute`] or [`SkillStats::persistence`].
//! - [`fisher_p_value`] converts a correlation and a sample size into a
//!   p-value using `statrs`' standard normal survival function.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are aligned 1-D arrays; `NaN` marks a missing value and such
//!   pairs are dropped before any statistic is computed.
//! - Undefined statistics are `None`, never `NaN`.
//!
//! Downstream usage
//! ----------------
//! - `edm::models::runner` reduces every evaluated parameter set to a pair of
//!   [`SkillStats`] (model and baseline).

pub mod significance;
pub mod stats;

pub use self::significance::{MIN_SAMPLES_FOR_FISHER, fisher_p_value};
pub use self::stats::{
    SkillStats, mean_absolute_error, pearson_correlation, root_mean_squared_error, sign_agreement,
};
