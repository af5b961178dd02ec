use std::collections::HashMap;

use crate::{
    geom::{Point, Segment},
    Error, DEFAULT_EPS,
};

/// An index into our segment arena.
///
/// Segments also carry their own [`Segment::id`], which is chosen by the
/// caller and is what intersections get reported with. This index is only
/// used internally and for looking segments up in [`Segments`]. (Of course,
/// this index-as-identifier breaks down if there are multiple `Segments` in
/// flight. Just be careful not to mix them up.)
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SegIdx(pub usize);

impl std::fmt::Debug for SegIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s_{}", self.0)
    }
}

/// An unvalidated input segment, as it comes out of a file.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentRecord {
    /// The segment's identifier.
    pub id: i64,
    /// One endpoint.
    pub p0: Point,
    /// The other endpoint.
    pub p1: Point,
}

impl SegmentRecord {
    /// Creates a new record.
    pub fn new(id: i64, p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        SegmentRecord {
            id,
            p0: p0.into(),
            p1: p1.into(),
        }
    }
}

/// An arena of validated, axis-aligned line segments.
///
/// Segments are indexed by [`SegIdx`] and can be retrieved by indexing (i.e.
/// with square brackets). Every segment in here is either horizontal or
/// vertical according to the arena's tolerance, and no two segments share an
/// identifier.
#[derive(Debug, Clone)]
pub struct Segments {
    segs: Vec<Segment>,
    by_id: HashMap<i64, SegIdx>,
    eps: f64,
}

impl Default for Segments {
    fn default() -> Self {
        Segments::new(DEFAULT_EPS)
    }
}

impl Segments {
    /// Creates an empty arena, using `eps` as the tolerance for classifying
    /// and intersecting segments.
    pub fn new(eps: f64) -> Self {
        debug_assert!(eps.is_finite() && eps >= 0.0);
        Segments {
            segs: Vec::new(),
            by_id: HashMap::new(),
            eps,
        }
    }

    /// Builds an arena out of a collection of records, failing on the first
    /// one that can't be added.
    pub fn from_records(
        records: impl IntoIterator<Item = SegmentRecord>,
        eps: f64,
    ) -> Result<Self, Error> {
        let mut ret = Segments::new(eps);
        for r in records {
            ret.add_record(&r)?;
        }
        Ok(ret)
    }

    /// The tolerance that this arena's segments were classified with.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// The number of line segments in this arena.
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    /// Are there no segments at all?
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Iterate over all segments in this arena.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segs.iter()
    }

    /// Iterate over all segments in this arena, along with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (SegIdx, &Segment)> {
        self.segs.iter().enumerate().map(|(i, s)| (SegIdx(i), s))
    }

    /// Iterate over the horizontal segments.
    pub fn horizontals(&self) -> impl Iterator<Item = &Segment> {
        self.segs.iter().filter(|s| s.is_horizontal())
    }

    /// Iterate over the vertical segments.
    pub fn verticals(&self) -> impl Iterator<Item = &Segment> {
        self.segs.iter().filter(|s| s.is_vertical())
    }

    /// Looks up a segment by its identifier.
    pub fn get_by_id(&self, id: i64) -> Option<&Segment> {
        self.by_id.get(&id).map(|idx| &self[*idx])
    }

    /// Adds a segment to this arena, returning its index.
    ///
    /// Nothing is added if the segment is rejected.
    pub fn add<P: Into<Point>>(&mut self, id: i64, p0: P, p1: P) -> Result<SegIdx, Error> {
        if self.by_id.contains_key(&id) {
            return Err(Error::DuplicateId { id });
        }
        let seg = Segment::new(id, p0.into(), p1.into(), self.eps)?;
        let idx = SegIdx(self.segs.len());
        self.segs.push(seg);
        self.by_id.insert(id, idx);
        Ok(idx)
    }

    /// Adds a record to this arena, returning its index.
    pub fn add_record(&mut self, record: &SegmentRecord) -> Result<SegIdx, Error> {
        self.add(record.id, record.p0, record.p1)
    }

    /// The smallest rectangle containing all the segments, or `None` if
    /// there aren't any.
    pub fn bounding_box(&self) -> Option<kurbo::Rect> {
        self.segs
            .iter()
            .map(|s| kurbo::Rect::from_points(s.p0.to_kurbo(), s.p1.to_kurbo()))
            .reduce(|a, b| a.union(b))
    }
}

impl std::ops::Index<SegIdx> for Segments {
    type Output = Segment;

    fn index(&self, index: SegIdx) -> &Self::Output {
        &self.segs[index.0]
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn add_and_look_up() {
        let mut segs = Segments::default();
        let h = segs.add(10, (0.0, 0.0), (4.0, 0.0)).unwrap();
        let v = segs.add(20, (1.0, 3.0), (1.0, -2.0)).unwrap();

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[h].id, 10);
        assert_eq!(segs[v].p0, Point::new(1.0, -2.0));
        assert_eq!(segs.get_by_id(20), Some(&segs[v]));
        assert_eq!(segs.get_by_id(30), None);
        assert_eq!(segs.horizontals().count(), 1);
        assert_eq!(segs.verticals().count(), 1);
    }

    #[test]
    fn rejected_segments_are_not_added() {
        let mut segs = Segments::default();
        segs.add(1, (0.0, 0.0), (4.0, 0.0)).unwrap();

        assert_matches!(
            segs.add(2, (0.0, 0.0), (4.0, 4.0)),
            Err(Error::UnsupportedOrientation { id: 2 })
        );
        assert_matches!(
            segs.add(1, (0.0, 1.0), (4.0, 1.0)),
            Err(Error::DuplicateId { id: 1 })
        );
        assert_eq!(segs.len(), 1);

        // The rejected id is still free.
        segs.add(2, (0.0, 1.0), (0.0, 4.0)).unwrap();
        assert_eq!(segs.len(), 2);
    }

    #[test]
    fn from_records_stops_at_first_error() {
        let records = [
            SegmentRecord::new(1, (0.0, 0.0), (1.0, 0.0)),
            SegmentRecord::new(2, (0.0, 0.0), (1.0, 1.0)),
            SegmentRecord::new(3, (0.0, 0.0), (0.0, 1.0)),
        ];
        assert_matches!(
            Segments::from_records(records, DEFAULT_EPS),
            Err(Error::UnsupportedOrientation { id: 2 })
        );
    }

    #[test]
    fn bounding_box() {
        let mut segs = Segments::default();
        assert_eq!(segs.bounding_box(), None);

        segs.add(1, (-1.0, 2.0), (3.0, 2.0)).unwrap();
        segs.add(2, (0.5, -4.0), (0.5, 1.0)).unwrap();
        assert_eq!(
            segs.bounding_box(),
            Some(kurbo::Rect::new(-1.0, -4.0, 3.0, 2.0))
        );
    }
}
