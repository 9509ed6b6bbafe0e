//! Admissible neighbor candidates for each query row.
//!
//! Purpose
//! -------
//! Decide which library rows may act as neighbors of a given query. The
//! query-independent filters are applied once per parameter set; the
//! query-dependent filters are applied lazily while iterating.
//!
//! Key behaviors
//! -------------
//! A library row `j` is admissible for query `q` only if all of the
//! following hold:
//! - the embedding of `j` is valid;
//! - the target row `j + tp` lies inside the series and is not missing;
//! - `j != q` (leave-one-out);
//! - `|time(j) − time(q)| > exclusion_radius` when a radius is set;
//! - `|j − q| > |tp|` when the horizon window is excluded and `q` itself is
//!   a library row.
//!
//! Invariants & assumptions
//! ------------------------
//! - Filters compose conjunctively; none of them depends on another.
//! - Queries are never filtered here; a query whose own target is missing is
//!   still forecast.
//!
//! Testing notes
//! -------------
//! - Unit tests toggle each filter in isolation on a short series.
use crate::edm::core::{
    embedding::Embedding,
    options::EngineOptions,
    ranges::{IndexRange, membership_mask},
    series::Series,
};

/// CandidateIndex — per-parameter-set candidate pool with exclusion rules.
#[derive(Debug, Clone)]
pub struct CandidateIndex<'a> {
    series: &'a Series,
    pool: Vec<usize>,
    in_library: Vec<bool>,
    tp: isize,
    exclusion_radius: Option<f64>,
    exclude_horizon_window: bool,
}

impl<'a> CandidateIndex<'a> {
    /// Build the candidate pool for one parameter set.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&Series`
    ///   Shared input series.
    /// - `embedding`: `&Embedding`
    ///   Embedding of `series` for the current `(E, tau)`.
    /// - `library`: `&[IndexRange]`
    ///   Library ranges; assumed validated against `series.len()`.
    /// - `tp`: `isize`
    ///   Forecast horizon.
    /// - `options`: `&EngineOptions`
    ///   Supplies the exclusion radius and the horizon-window flag.
    pub fn new(
        series: &'a Series, embedding: &Embedding, library: &[IndexRange], tp: isize,
        options: &EngineOptions,
    ) -> Self {
        let in_library = membership_mask(library, series.len());
        let pool = in_library
            .iter()
            .enumerate()
            .filter(|&(j, &inside)| {
                inside
                    && embedding.is_valid(j)
                    && series.offset(j, tp).and_then(|t| series.value(t)).is_some()
            })
            .map(|(j, _)| j)
            .collect();
        CandidateIndex {
            series,
            pool,
            in_library,
            tp,
            exclusion_radius: options.exclusion_radius,
            exclude_horizon_window: options.exclude_horizon_window,
        }
    }

    /// Rows passing the query-independent filters, ascending.
    pub fn pool(&self) -> &[usize] {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Target row of candidate `j`; always `Some` for pooled rows.
    pub fn target_index(&self, j: usize) -> Option<usize> {
        self.series.offset(j, self.tp)
    }

    /// Whether pooled row `j` survives the query-dependent filters for `query`.
    pub fn admits(&self, query: usize, j: usize) -> bool {
        if j == query {
            return false;
        }
        if let Some(radius) = self.exclusion_radius {
            if (self.series.time(j) - self.series.time(query)).abs() <= radius {
                return false;
            }
        }
        if self.exclude_horizon_window
            && self.in_library.get(query).copied().unwrap_or(false)
            && j.abs_diff(query) <= self.tp.unsigned_abs()
        {
            return false;
        }
        true
    }

    /// Admissible candidates for `query`, ascending by row index.
    pub fn admissible(&self, query: usize) -> impl Iterator<Item = usize> + '_ {
        self.pool.iter().copied().filter(move |&j| self.admits(query, j))
    }
}
