//! Evaluator — one full prediction pass for a single parameter set.
//!
//! Purpose
//! -------
//! Forecast every valid query row of the prediction set with a given
//! [`Predictor`], producing one [`PredictionRecord`] per query in row-index
//! order.
//!
//! Key behaviors
//! -------------
//! - For each query: select neighbors via [`NeighborSearch`], gather their
//!   target values, call the predictor, and fill in observed/reference
//!   values from the series.
//! - Queries without admissible neighbors, and queries whose local fit
//!   fails, are still reported with `predicted = None`.
//! - With the `parallel` feature (default) queries are processed on the
//!   `rayon` pool; output order is identical to the sequential path.
//!
//! Invariants & assumptions
//! ------------------------
//! - `queries` is sorted ascending and contains only rows with a valid
//!   embedding.
//! - Every pooled candidate has an in-bounds, non-missing target (see
//!   [`CandidateIndex`]).
//!
//! Conventions
//! -----------
//! - `trace!` events are emitted for queries left without neighbors; no
//!   other logging happens here.
use crate::edm::{
    core::{
        candidates::CandidateIndex, embedding::Embedding, neighbors::NeighborSearch,
        records::PredictionRecord, series::Series,
    },
    models::predictor::Predictor,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

/// Evaluator — shared, read-only state of one prediction pass.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    series: &'a Series,
    embedding: &'a Embedding,
    candidates: &'a CandidateIndex<'a>,
    search: NeighborSearch<'a, 'a, 'a>,
    tp: isize,
    neighbor_limit: Option<usize>,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        series: &'a Series, embedding: &'a Embedding, candidates: &'a CandidateIndex<'a>,
        search: NeighborSearch<'a, 'a, 'a>, tp: isize, neighbor_limit: Option<usize>,
    ) -> Self {
        Evaluator { series, embedding, candidates, search, tp, neighbor_limit }
    }

    /// Forecast every query.
    ///
    /// Parameters
    /// ----------
    /// - `queries`: `&[usize]`
    ///   Ascending query rows with valid embeddings.
    /// - `predictor`: `&P`
    ///   Forecasting rule.
    ///
    /// Returns
    /// -------
    /// `Vec<PredictionRecord>`
    ///   One record per query, in the order of `queries`.
    pub fn evaluate<P: Predictor>(
        &self, queries: &[usize], predictor: &P,
    ) -> Vec<PredictionRecord> {
        #[cfg(feature = "parallel")]
        {
            queries.par_iter().map(|&q| self.predict_one(q, predictor)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|&q| self.predict_one(q, predictor)).collect()
        }
    }

    /// Forecast a single query row.
    pub fn predict_one<P: Predictor>(&self, query: usize, predictor: &P) -> PredictionRecord {
        let target_index = self.series.offset(query, self.tp);
        let time = self.series.time(target_index.unwrap_or(query));
        let observed = target_index.and_then(|t| self.series.value(t));
        let reference = self.series.value(query);

        let neighbors = self.search.search(query, self.neighbor_limit);
        let targets: Vec<f64> = neighbors
            .iter()
            .map(|n| {
                self.candidates
                    .target_index(n.index)
                    .and_then(|t| self.series.value(t))
                    .unwrap_or(f64::NAN)
            })
            .collect();

        let forecast = if neighbors.is_empty() {
            trace!(query = query, "no admissible neighbors");
            None
        } else {
            let f = predictor.forecast(
                self.embedding.vector(query),
                &neighbors,
                self.embedding,
                &targets,
            );
            if f.is_none() {
                trace!(query = query, neighbors = neighbors.len(), "local forecast failed");
            }
            f
        };

        let (predicted, variance, coefficients) = match forecast {
            Some(f) => (Some(f.value), Some(f.variance), f.coefficients),
            None => (None, None, None),
        };
        PredictionRecord {
            query_index: query,
            target_index,
            time,
            observed,
            predicted,
            variance,
            reference,
            neighbors_used: neighbors.len(),
            coefficients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edm::{
        core::{
            norm::DistanceNorm, options::EngineOptions, ranges::IndexRange, records::PairedColumns,
        },
        models::simplex::SimplexProjector,
    };
    use approx::assert_abs_diff_eq;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Record layout (time, observed, reference) for in-range and
    //   out-of-range targets.
    // - The hand-computed simplex forecast on the series 1..10.
    // - Queries starved of neighbors.
    //
    // They intentionally DO NOT cover:
    // - Statistics and run-level error handling; see `runner`.
    // -------------------------------------------------------------------------

    fn ramp() -> Series {
        Series::from_values(Array1::from_iter((1..=10).map(|v| v as f64))).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Check the simplex forecast and record fields on the series 1..10.
    //
    // Given
    // -----
    // - E = 2, tau = 1, tp = 1, k = 3, library = prediction = all rows.
    //
    // Expect
    // ------
    // - Query 1 forecasts (4e⁻¹ + 5e⁻² + 6e⁻³)/(e⁻¹ + e⁻² + e⁻³) ≈ 4.4247.
    // - Query 9 is forecast but its observed value is missing and its time
    //   falls back to the query's own time.
    fn evaluate_reports_simplex_forecasts_in_query_order() {
        // Arrange
        let s = ramp();
        let emb = Embedding::new(&s, 2, 1).unwrap();
        let lib = [IndexRange::full(10).unwrap()];
        let cands = CandidateIndex::new(&s, &emb, &lib, 1, &EngineOptions::default());
        let search = NeighborSearch::new(&emb, &cands, DistanceNorm::L2, None);
        let eval = Evaluator::new(&s, &emb, &cands, search, 1, Some(3));
        let queries: Vec<usize> = (1..10).collect();

        // Act
        let records = eval.evaluate(&queries, &SimplexProjector);

        // Assert
        let (e1, e2, e3) = ((-1.0_f64).exp(), (-2.0_f64).exp(), (-3.0_f64).exp());
        let expected = (4.0 * e1 + 5.0 * e2 + 6.0 * e3) / (e1 + e2 + e3);
        assert_eq!(records.len(), 9);
        assert_eq!(records[0].query_index, 1);
        assert_abs_diff_eq!(records[0].predicted.unwrap(), expected, epsilon = 1e-12);
        assert_eq!(records[0].observed, Some(3.0));
        assert_eq!(records[0].reference, Some(2.0));
        assert_eq!(records[0].time, 2.0);
        assert_eq!(records[0].neighbors_used, 3);

        let last = &records[8];
        assert_eq!(last.query_index, 9);
        assert_eq!(last.target_index, None);
        assert!(last.predicted.is_some());
        assert_eq!(last.observed, None);
        assert_eq!(last.time, 9.0);

        let cols = PairedColumns::from_records(&records);
        assert!(cols.observed[8].is_nan());
    }

    #[test]
    // Purpose
    // -------
    // A query with no admissible neighbor yields a missing prediction.
    //
    // Given
    // -----
    // - Series 1..10, E = 1, tp = 1, epsilon = 0.5 (no two values that close).
    //
    // Expect
    // ------
    // - Every record has `predicted == None` and `neighbors_used == 0`.
    fn evaluate_marks_starved_queries_missing() {
        // Arrange
        let s = ramp();
        let emb = Embedding::new(&s, 1, 1).unwrap();
        let lib = [IndexRange::full(10).unwrap()];
        let cands = CandidateIndex::new(&s, &emb, &lib, 1, &EngineOptions::default());
        let search = NeighborSearch::new(&emb, &cands, DistanceNorm::L2, Some(0.5));
        let eval = Evaluator::new(&s, &emb, &cands, search, 1, None);
        let queries: Vec<usize> = (0..10).collect();

        // Act
        let records = eval.evaluate(&queries, &SimplexProjector);

        // Assert
        assert!(records.iter().all(|r| r.predicted.is_none() && r.neighbors_used == 0));
        assert!(records.iter().all(|r| r.variance.is_none()));
    }
}
