//! Inclusive row-index ranges for the library and the prediction set.
//!
//! Purpose
//! -------
//! Describe which rows of a [`Series`](crate::edm::core::series::Series) may
//! serve as neighbor candidates (the library) and which rows are forecast
//! (the prediction set). Both are given as unions of inclusive ranges that
//! may overlap each other.
//!
//! Key behaviors
//! -------------
//! - [`IndexRange`] stores one inclusive `[start, end]` pair.
//! - [`membership_mask`] marks which rows belong to a union of ranges.
//! - [`sorted_indices`] lists those rows once each, in row-index order.
//!
//! Conventions
//! -----------
//! - Indices are 0-based. Both ends are inclusive.
use crate::edm::errors::{EDMError, EDMResult};

/// `IndexRange` — inclusive `[start, end]` over 0-based row indices.
///
/// Invariants
/// ----------
/// - `start <= end` (enforced by [`IndexRange::new`]).
/// - Bounds against a concrete series are checked separately with
///   [`IndexRange::check_bounds`], since the range may be built before the
///   series is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// Construct an inclusive range.
    ///
    /// Errors
    /// ------
    /// - `EDMError::InvalidRange` when `start > end`.
    pub fn new(start: usize, end: usize) -> EDMResult<Self> {
        if start > end {
            return Err(EDMError::InvalidRange {
                start,
                end,
                len: 0,
                reason: "start exceeds end",
            });
        }
        Ok(IndexRange { start, end })
    }

    /// Range covering every row of a series of length `len`.
    ///
    /// Errors
    /// ------
    /// - `EDMError::EmptySeries` when `len == 0`.
    pub fn full(len: usize) -> EDMResult<Self> {
        if len == 0 {
            return Err(EDMError::EmptySeries);
        }
        Ok(IndexRange { start: 0, end: len - 1 })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether row `i` lies inside the range.
    pub fn contains(&self, i: usize) -> bool {
        self.start <= i && i <= self.end
    }

    /// Number of rows covered (always ≥ 1).
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`; an inclusive range covers at least one row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check that the range lies inside a series of length `len`.
    pub fn check_bounds(&self, len: usize) -> EDMResult<()> {
        if self.start > self.end {
            return Err(EDMError::InvalidRange {
                start: self.start,
                end: self.end,
                len,
                reason: "start exceeds end",
            });
        }
        if self.end >= len {
            return Err(EDMError::InvalidRange {
                start: self.start,
                end: self.end,
                len,
                reason: "end lies outside the series",
            });
        }
        Ok(())
    }
}

/// Boolean membership of each row `0..len` in the union of `ranges`.
///
/// Range ends beyond `len` are clipped; reversed ranges mark nothing.
pub fn membership_mask(ranges: &[IndexRange], len: usize) -> Vec<bool> {
    let mut mask = vec![false; len];
    for range in ranges {
        if range.start > range.end || range.start >= len {
            continue;
        }
        let end = range.end.min(len - 1);
        mask[range.start..=end].iter_mut().for_each(|m| *m = true);
    }
    mask
}

/// Rows in the union of `ranges`, deduplicated and in ascending order.
pub fn sorted_indices(ranges: &[IndexRange], len: usize) -> Vec<usize> {
    membership_mask(ranges, len)
        .into_iter()
        .enumerate()
        .filter_map(|(i, inside)| inside.then_some(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Reversed bounds are rejected; `full` covers every row.
    //
    // Given
    // -----
    // - new(5, 2) and full(8).
    //
    // Expect
    // ------
    // - An `InvalidRange` error and the range [0, 7] of length 8.
    fn new_and_full_enforce_ordering() {
        // Act
        let reversed = IndexRange::new(5, 2);
        let full = IndexRange::full(8).unwrap();

        // Assert
        assert!(matches!(reversed, Err(EDMError::InvalidRange { start: 5, end: 2, .. })));
        assert_eq!(full, IndexRange { start: 0, end: 7 });
        assert_eq!(full.len(), 8);
        assert!(full.contains(0) && full.contains(7) && !full.contains(8));
        assert_eq!(IndexRange::full(0), Err(EDMError::EmptySeries));
    }

    #[test]
    // Purpose
    // -------
    // Overlapping ranges are merged and each row listed once, in order.
    //
    // Given
    // -----
    // - Ranges [6, 8], [0, 2], [2, 3] on a length-10 series.
    //
    // Expect
    // ------
    // - Rows 0, 1, 2, 3, 6, 7, 8.
    fn sorted_indices_merges_overlapping_ranges() {
        // Arrange
        let ranges = [
            IndexRange::new(6, 8).unwrap(),
            IndexRange::new(0, 2).unwrap(),
            IndexRange::new(2, 3).unwrap(),
        ];

        // Act
        let rows = sorted_indices(&ranges, 10);

        // Assert
        assert_eq!(rows, vec![0, 1, 2, 3, 6, 7, 8]);
    }

    #[test]
    // Purpose
    // -------
    // Masks tolerate reversed and out-of-bounds ranges instead of panicking.
    //
    // Given
    // -----
    // - A reversed range [5, 2], a range [8, 20] past the end, and [0, 1],
    //   on a length-10 series.
    //
    // Expect
    // ------
    // - Rows 0, 1, 8, 9 only.
    fn membership_mask_skips_reversed_and_clips_overlong_ranges() {
        // Arrange
        let ranges = [
            IndexRange { start: 5, end: 2 },
            IndexRange { start: 8, end: 20 },
            IndexRange::new(0, 1).unwrap(),
        ];

        // Act
        let rows = sorted_indices(&ranges, 10);

        // Assert
        assert_eq!(rows, vec![0, 1, 8, 9]);
        assert_eq!((ranges[1].start(), ranges[1].end()), (8, 20));
    }
}
