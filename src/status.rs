//! The sweep-line status: the horizontal segments that the sweep-line is
//! currently crossing, ordered by height.

use std::collections::BTreeSet;

use crate::{num::CheapOrderedFloat, SegIdx};

/// The horizontal segments currently on the sweep-line.
///
/// Horizontal segments that are on the sweep-line at the same time never
/// cross, so their height is a valid sort key no matter where the
/// sweep-line is. Segments at the same height (which can only happen if they
/// overlap, or if one ends where the other starts) are ordered by index.
#[derive(Clone, Debug, Default)]
pub struct SweepStatus {
    entries: BTreeSet<(CheapOrderedFloat, SegIdx)>,
}

impl SweepStatus {
    /// Creates an empty status.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of segments on the sweep-line.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the sweep-line empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every segment.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Adds a segment at height `y`. Returns false if it was already there.
    pub fn insert(&mut self, seg: SegIdx, y: f64) -> bool {
        self.entries.insert((y.into(), seg))
    }

    /// Removes the segment at height `y`. Returns false if it wasn't there.
    pub fn remove(&mut self, seg: SegIdx, y: f64) -> bool {
        self.entries.remove(&(y.into(), seg))
    }

    /// Is the segment on the sweep-line at height `y`?
    pub fn contains(&self, seg: SegIdx, y: f64) -> bool {
        self.entries.contains(&(y.into(), seg))
    }

    /// Iterates over all segments, from lowest to highest.
    pub fn iter(&self) -> impl Iterator<Item = (f64, SegIdx)> + '_ {
        self.entries.iter().map(|(y, seg)| (y.into_inner(), *seg))
    }

    /// Iterates over the segments whose heights are between `y0` and `y1`,
    /// inclusive, from lowest to highest.
    ///
    /// If `y1 < y0` the range is empty.
    pub fn range(&self, y0: f64, y1: f64) -> impl Iterator<Item = SegIdx> + '_ {
        // BTreeSet::range panics on backwards ranges.
        let entries = (y0 <= y1).then(|| {
            let start = (CheapOrderedFloat::from(y0), SegIdx(0));
            let end = (CheapOrderedFloat::from(y1), SegIdx(usize::MAX));
            self.entries.range(start..=end)
        });
        entries.into_iter().flatten().map(|(_, seg)| *seg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn insert_remove() {
        let mut status = SweepStatus::new();
        assert!(status.insert(SegIdx(0), 1.0));
        assert!(status.insert(SegIdx(1), 1.0));
        assert!(!status.insert(SegIdx(0), 1.0));
        assert_eq!(status.len(), 2);

        assert!(status.remove(SegIdx(0), 1.0));
        assert!(!status.remove(SegIdx(0), 1.0));
        // Wrong height.
        assert!(!status.remove(SegIdx(1), 2.0));
        assert!(status.contains(SegIdx(1), 1.0));
        assert_eq!(status.len(), 1);

        status.clear();
        assert!(status.is_empty());
    }

    #[test]
    fn range_is_inclusive() {
        let mut status = SweepStatus::new();
        for (i, y) in [3.0, -1.0, 0.0, 2.0, 0.0, 5.0].into_iter().enumerate() {
            status.insert(SegIdx(i), y);
        }

        let found: Vec<_> = status.range(0.0, 3.0).collect();
        assert_eq!(found, vec![SegIdx(2), SegIdx(4), SegIdx(3), SegIdx(0)]);

        let found: Vec<_> = status.range(5.0, 5.0).collect();
        assert_eq!(found, vec![SegIdx(5)]);

        assert_eq!(status.range(0.5, 1.5).count(), 0);
        assert_eq!(status.range(3.0, 0.0).count(), 0);
    }

    proptest! {
        #[test]
        fn range_matches_filter(heights in prop::collection::vec(-100i32..100, 0..64), y0 in -120i32..120, y1 in -120i32..120) {
            let mut status = SweepStatus::new();
            for (i, y) in heights.iter().enumerate() {
                status.insert(SegIdx(i), *y as f64);
            }

            let mut found: Vec<_> = status.range(y0 as f64, y1 as f64).collect();
            found.sort();
            let expected: Vec<_> = heights
                .iter()
                .enumerate()
                .filter(|(_, y)| y0 <= **y && **y <= y1)
                .map(|(i, _)| SegIdx(i))
                .collect();
            prop_assert_eq!(found, expected);
        }
    }
}
