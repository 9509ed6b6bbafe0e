//! Validated scalar time series shared read-only by every forecast run.
//!
//! Purpose
//! -------
//! Provide the canonical input container of the engine: one `(time, value)`
//! pair per row index, with missing values allowed. All downstream layers
//! (embedding, candidate selection, evaluation) read the series through this
//! type and may rely on its invariants instead of re-validating.
//!
//! Key behaviors
//! -------------
//! - [`Series::new`] validates a time column and a value column of equal
//!   length; [`Series::from_values`] and [`Series::from_options`] are
//!   convenience constructors.
//! - [`Series::value`] exposes missing values as `None`; [`Series::values`]
//!   exposes the raw column with `NaN` for missing.
//! - [`Series::offset`] resolves `i + tp` to an in-bounds index.
//!
//! Invariants & assumptions
//! ------------------------
//! - The series is non-empty.
//! - Every time stamp is finite.
//! - Values are finite or `NaN` (missing); `±∞` is rejected.
//!
//! Conventions
//! -----------
//! - Index order is canonical. Time stamps are carried for exclusion-radius
//!   checks and reporting only; they need not be sorted or evenly spaced.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the constructors, each validation failure, and
//!   `offset` at both series boundaries.
use crate::edm::errors::{EDMError, EDMResult};
use ndarray::Array1;

/// `Series` — validated `(time, value)` rows with missing values as `NaN`.
///
/// Fields
/// ------
/// - `time`: `Array1<f64>`
///   Finite time stamp of each row.
/// - `values`: `Array1<f64>`
///   Observed value of each row; `NaN` marks a missing observation.
///
/// Notes
/// -----
/// - Fields are private so the invariants established by the constructors
///   cannot be broken afterwards; the series is never mutated by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    time: Array1<f64>,
    values: Array1<f64>,
}

impl Series {
    /// Construct a validated series from a time column and a value column.
    ///
    /// Parameters
    /// ----------
    /// - `time`: `Array1<f64>`
    ///   Time stamp per row; must be finite.
    /// - `values`: `Array1<f64>`
    ///   Value per row; `NaN` means missing, `±∞` is rejected.
    ///
    /// Returns
    /// -------
    /// `EDMResult<Series>`
    ///   The validated series.
    ///
    /// Errors
    /// ------
    /// - `EDMError::LengthMismatch` when the columns differ in length.
    /// - `EDMError::EmptySeries` when both columns are empty.
    /// - `EDMError::NonFiniteTime` for the first non-finite time stamp.
    /// - `EDMError::InfiniteValue` for the first infinite value.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_edm::edm::core::series::Series;
    /// let s = Series::new(array![0.0, 1.0, 2.0], array![1.5, f64::NAN, 2.5]).unwrap();
    /// assert_eq!(s.value(1), None);
    /// assert_eq!(s.value(2), Some(2.5));
    /// ```
    pub fn new(time: Array1<f64>, values: Array1<f64>) -> EDMResult<Self> {
        if time.len() != values.len() {
            return Err(EDMError::LengthMismatch { times: time.len(), values: values.len() });
        }
        if values.is_empty() {
            return Err(EDMError::EmptySeries);
        }
        for (index, &value) in time.iter().enumerate() {
            if !value.is_finite() {
                return Err(EDMError::NonFiniteTime { index, value });
            }
        }
        for (index, &value) in values.iter().enumerate() {
            if value.is_infinite() {
                return Err(EDMError::InfiniteValue { index, value });
            }
        }
        Ok(Series { time, values })
    }

    /// Construct a series whose time axis is the row index `0, 1, …, n−1`.
    pub fn from_values(values: Array1<f64>) -> EDMResult<Self> {
        let time = Array1::from_iter((0..values.len()).map(|i| i as f64));
        Series::new(time, values)
    }

    /// Construct a series from optional values (`None` = missing).
    pub fn from_options(time: Array1<f64>, values: &[Option<f64>]) -> EDMResult<Self> {
        let values = Array1::from_iter(values.iter().map(|v| v.unwrap_or(f64::NAN)));
        Series::new(time, values)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed series; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Time stamp of row `i`.
    ///
    /// Panics
    /// ------
    /// - If `i >= self.len()`.
    pub fn time(&self, i: usize) -> f64 {
        self.time[i]
    }

    /// Value of row `i`, or `None` when missing or out of bounds.
    pub fn value(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied().filter(|v| !v.is_nan())
    }

    /// Raw value column (`NaN` = missing).
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Raw time column.
    pub fn times(&self) -> &Array1<f64> {
        &self.time
    }

    /// Resolve `i + offset` to a row index, or `None` when it leaves the
    /// series.
    pub fn offset(&self, i: usize, offset: isize) -> Option<usize> {
        let j = i.checked_add_signed(offset)?;
        (j < self.len()).then_some(j)
    }
}
