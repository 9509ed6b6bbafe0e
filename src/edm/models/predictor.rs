//! Predictor interface shared by simplex projection and S-map.
//!
//! - [`Predictor`]: turns a query vector and its neighbors into a forecast.
//! - [`Forecast`]: the value, its variance, and optional local coefficients.
//!
//! Convention: `neighbors[i]` and `targets[i]` describe the same library row;
//! `targets[i]` is the observed value `tp` steps after `neighbors[i].index`
//! and is always finite. Returning `None` marks the query's prediction as
//! missing; it is never an error.
use crate::edm::core::{embedding::Embedding, neighbors::NeighborRecord};
use ndarray::{Array1, ArrayView1};

/// Forecast for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub value: f64,
    pub variance: f64,
    pub coefficients: Option<Array1<f64>>,
}

/// Forecasting rule applied independently to every query.
///
/// Implementations must be `Sync`; the evaluator calls `forecast` from
/// worker threads.
pub trait Predictor: Sync {
    /// Forecast the target of one query.
    ///
    /// - `query`: embedding vector of the query row.
    /// - `neighbors`: selected neighbors, sorted by `(distance, index)`,
    ///   never empty.
    /// - `embedding`: gives access to neighbor vectors.
    /// - `targets`: neighbor target values aligned with `neighbors`.
    fn forecast(
        &self, query: ArrayView1<f64>, neighbors: &[NeighborRecord], embedding: &Embedding,
        targets: &[f64],
    ) -> Option<Forecast>;
}
