//! Per-query prediction records and S-map coefficient matrices.
//!
//! Purpose
//! -------
//! Carry the outcome of forecasting one query row, and assemble a pass's
//! records into the aligned arrays consumed by the skill statistics and the
//! coefficient output.
//!
//! Key behaviors
//! -------------
//! - [`PredictionRecord`] stores the query/target rows, the observed and
//!   predicted values, the prediction variance, the reference value
//!   `x[query]`, and the neighbor count actually used.
//! - [`PairedColumns::from_records`] extracts `(observed, predicted,
//!   reference)` columns with `NaN` for missing entries.
//! - [`SMapCoefficients::from_records`] stacks per-query coefficient vectors
//!   into a matrix aligned with query rows.
//!
//! Conventions
//! -----------
//! - `time` is the time stamp of the target row when it lies inside the
//!   series, else the time stamp of the query row.
//! - Coefficient columns are `[c₀, c₁, …, c_E]`, intercept first.
use ndarray::{Array1, Array2, ArrayView1};

/// PredictionRecord — the forecast for one query row.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub query_index: usize,
    /// Row `query_index + tp` when it lies inside the series.
    pub target_index: Option<usize>,
    pub time: f64,
    /// Observed target value; `None` when missing or out of range.
    pub observed: Option<f64>,
    /// Forecast; `None` when the query had no usable neighbors or the local
    /// fit failed.
    pub predicted: Option<f64>,
    pub variance: Option<f64>,
    /// `x[query_index]`, the persistence forecast.
    pub reference: Option<f64>,
    pub neighbors_used: usize,
    /// S-map coefficients (intercept first) when retained.
    pub coefficients: Option<Array1<f64>>,
}

/// Observed, predicted and reference columns of a pass, `NaN` for missing.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedColumns {
    pub observed: Array1<f64>,
    pub predicted: Array1<f64>,
    pub reference: Array1<f64>,
}

impl PairedColumns {
    /// Extract aligned columns from records.
    ///
    /// The reference column is `NaN` wherever the forecast is missing, so a
    /// persistence baseline scored on it covers exactly the queries the model
    /// covered.
    pub fn from_records(records: &[PredictionRecord]) -> PairedColumns {
        let nan = |v: Option<f64>| v.unwrap_or(f64::NAN);
        let observed = records.iter().map(|r| nan(r.observed)).collect();
        let predicted = records.iter().map(|r| nan(r.predicted)).collect();
        let reference = records
            .iter()
            .map(|r| if r.predicted.is_some() { nan(r.reference) } else { f64::NAN })
            .collect();
        PairedColumns { observed, predicted, reference }
    }
}

/// SMapCoefficients — local regression coefficients aligned by query row.
///
/// Fields
/// ------
/// - `query_index`: `Vec<usize>`
///   Query row of each matrix row, ascending.
/// - `values`: `Array2<f64>`
///   `n_queries × (E + 1)`; a row of `NaN` marks a query without a fit.
#[derive(Debug, Clone, PartialEq)]
pub struct SMapCoefficients {
    pub query_index: Vec<usize>,
    pub values: Array2<f64>,
}

impl SMapCoefficients {
    /// Stack the coefficients carried by `records` (dimension `e`).
    pub fn from_records(records: &[PredictionRecord], e: usize) -> SMapCoefficients {
        let mut values = Array2::from_elem((records.len(), e + 1), f64::NAN);
        for (mut row, record) in values.rows_mut().into_iter().zip(records) {
            if let Some(c) = record.coefficients.as_ref().filter(|c| c.len() == e + 1) {
                row.assign(c);
            }
        }
        SMapCoefficients { query_index: records.iter().map(|r| r.query_index).collect(), values }
    }

    /// Coefficients of query row `query`, if that row was forecast.
    pub fn row_for(&self, query: usize) -> Option<ArrayView1<'_, f64>> {
        let pos = self.query_index.binary_search(&query).ok()?;
        Some(self.values.row(pos))
    }
}
