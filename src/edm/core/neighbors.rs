//! k-nearest-neighbor search over admissible candidates.
//!
//! Purpose
//! -------
//! For a query row, measure the distance to every admissible candidate under
//! the configured [`DistanceNorm`], drop candidates beyond `epsilon`, and
//! keep the `k` closest.
//!
//! Key behaviors
//! -------------
//! - Neighbors are ordered by `(distance ascending, row index ascending)`, so
//!   ties resolve deterministically toward earlier rows.
//! - Fewer than `k` admissible candidates ⇒ all of them are returned; zero ⇒
//!   an empty list (the caller reports a missing prediction).
//! - Partial selection (`select_nth_unstable_by`) keeps the cost near
//!   O(m) for `m` candidates before the final sort of the `k` survivors.
//!
//! Invariants & assumptions
//! ------------------------
//! - The query row never appears among its neighbors (enforced by
//!   [`CandidateIndex`]).
//! - Every admissible candidate receives a distance; only the `epsilon`
//!   cutoff and the `k` limit shrink the list.
//! - Every returned distance is non-negative and `≤ epsilon` when a cutoff
//!   is set.
//!
//! Downstream usage
//! ----------------
//! - `edm::models::evaluator` calls [`NeighborSearch::search`] once per
//!   query and hands the result to the active predictor.
use crate::edm::core::{candidates::CandidateIndex, embedding::Embedding, norm::DistanceNorm};
use std::cmp::Ordering;

/// NeighborRecord — one selected neighbor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborRecord {
    /// Candidate row index.
    pub index: usize,
    /// Distance from the query under the active norm.
    pub distance: f64,
}

impl NeighborRecord {
    fn ordering(&self, other: &NeighborRecord) -> Ordering {
        self.distance.total_cmp(&other.distance).then(self.index.cmp(&other.index))
    }
}

/// NeighborSearch — distance evaluation and k-selection for one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct NeighborSearch<'e, 'c, 's> {
    embedding: &'e Embedding,
    candidates: &'c CandidateIndex<'s>,
    norm: DistanceNorm,
    epsilon: Option<f64>,
}

impl<'e, 'c, 's> NeighborSearch<'e, 'c, 's> {
    pub fn new(
        embedding: &'e Embedding, candidates: &'c CandidateIndex<'s>, norm: DistanceNorm,
        epsilon: Option<f64>,
    ) -> Self {
        NeighborSearch { embedding, candidates, norm, epsilon }
    }

    /// Select up to `k` nearest admissible neighbors of `query`.
    ///
    /// Parameters
    /// ----------
    /// - `query`: `usize`
    ///   Query row; must have a valid embedding.
    /// - `k`: `Option<usize>`
    ///   Neighbor limit; `None` keeps every admissible candidate.
    ///
    /// Returns
    /// -------
    /// `Vec<NeighborRecord>`
    ///   Sorted by `(distance, index)`; possibly empty.
    pub fn search(&self, query: usize, k: Option<usize>) -> Vec<NeighborRecord> {
        let q = self.embedding.vector(query);
        let mut found: Vec<NeighborRecord> = self
            .candidates
            .admissible(query)
            .map(|index| {
                let distance = self.norm.distance(q, self.embedding.vector(index));
                debug_assert!(!distance.is_nan(), "distance to candidate {index} is NaN");
                NeighborRecord { index, distance }
            })
            .filter(|n| self.epsilon.is_none_or(|eps| n.distance <= eps))
            .collect();

        if let Some(k) = k {
            if k == 0 {
                return Vec::new();
            }
            if found.len() > k {
                found.select_nth_unstable_by(k - 1, NeighborRecord::ordering);
                found.truncate(k);
            }
        }
        found.sort_unstable_by(NeighborRecord::ordering);
        found
    }
}
