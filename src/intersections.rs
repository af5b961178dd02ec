//! Collecting intersections, one per pair of segments.

use std::collections::BTreeMap;

use crate::geom::Point;

/// An intersection between two segments, identified by their ids.
///
/// Intersections constructed with [`Intersection::new`] are normalized so
/// that `id1 <= id2`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Intersection {
    /// The smaller of the two ids.
    pub id1: i64,
    /// The larger of the two ids.
    pub id2: i64,
    /// Where the segments intersect.
    pub point: Point,
}

impl Intersection {
    /// Creates a new intersection between the segments `a` and `b`, in either order.
    pub fn new(a: i64, b: i64, point: Point) -> Self {
        Intersection {
            id1: a.min(b),
            id2: a.max(b),
            point,
        }
    }

    /// The (normalized) pair of ids.
    pub fn pair(&self) -> (i64, i64) {
        (self.id1.min(self.id2), self.id1.max(self.id2))
    }
}

/// A set of intersections, with at most one intersection per unordered pair
/// of segments.
///
/// Iteration is ordered by the pair of ids (smaller id first), not by the
/// order in which intersections were found, so the output of a sweep is
/// reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intersections {
    inner: BTreeMap<(i64, i64), Point>,
}

impl Intersections {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an intersection.
    ///
    /// If this pair of segments (in either order) is already present, nothing
    /// changes: the point that was there first is kept, and this returns false.
    pub fn insert(&mut self, intersection: Intersection) -> bool {
        match self.inner.entry(intersection.pair()) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(intersection.point);
                true
            }
        }
    }

    /// The number of intersecting pairs.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Are there no intersections?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Do the segments `a` and `b` intersect?
    pub fn contains_pair(&self, a: i64, b: i64) -> bool {
        self.get(a, b).is_some()
    }

    /// The intersection point of the segments `a` and `b`, if they intersect.
    pub fn get(&self, a: i64, b: i64) -> Option<Point> {
        self.inner.get(&(a.min(b), a.max(b))).copied()
    }

    /// Iterates over the intersections in order.
    pub fn iter(&self) -> impl Iterator<Item = Intersection> + '_ {
        self.inner
            .iter()
            .map(|(&(id1, id2), &point)| Intersection { id1, id2, point })
    }

    /// All the intersections, in order.
    pub fn to_vec(&self) -> Vec<Intersection> {
        self.iter().collect()
    }

    /// Draws the segments and the intersection points, for debugging.
    #[cfg(feature = "debug-svg")]
    pub fn dump_svg(&self, segments: &crate::Segments) -> svg::Document {
        use svg::node::element::{path::Data, Circle, Path};

        let bbox = segments
            .bounding_box()
            .unwrap_or(kurbo::Rect::new(0.0, 0.0, 1.0, 1.0));
        let size = bbox.width().max(bbox.height()).max(1.0);
        let pad = size / 16.0;
        let stroke_width = size / 512.0;
        let mut document = svg::Document::new().set(
            "viewBox",
            (
                bbox.min_x() - pad,
                bbox.min_y() - pad,
                bbox.width() + 2.0 * pad,
                bbox.height() + 2.0 * pad,
            ),
        );

        for seg in segments.segments() {
            let data = Data::new()
                .move_to((seg.p0.x, seg.p0.y))
                .line_to((seg.p1.x, seg.p1.y));
            let color = if seg.is_horizontal() { "blue" } else { "black" };
            let path = Path::new()
                .set("stroke", color)
                .set("stroke-width", stroke_width)
                .set("stroke-opacity", 0.7)
                .set("d", data);
            document = document.add(path);
        }

        for int in self.iter() {
            let c = Circle::new()
                .set("r", stroke_width * 3.0)
                .set("cx", int.point.x)
                .set("cy", int.point.y)
                .set("fill", "red");
            document = document.add(c);
        }

        document
    }
}

impl Extend<Intersection> for Intersections {
    fn extend<T: IntoIterator<Item = Intersection>>(&mut self, iter: T) {
        for int in iter {
            self.insert(int);
        }
    }
}

impl FromIterator<Intersection> for Intersections {
    fn from_iter<T: IntoIterator<Item = Intersection>>(iter: T) -> Self {
        let mut ret = Intersections::new();
        ret.extend(iter);
        ret
    }
}

impl IntoIterator for Intersections {
    type Item = Intersection;
    type IntoIter = std::iter::Map<
        std::collections::btree_map::IntoIter<(i64, i64), Point>,
        fn(((i64, i64), Point)) -> Intersection,
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn from_entry(((id1, id2), point): ((i64, i64), Point)) -> Intersection {
            Intersection { id1, id2, point }
        }
        self.inner
            .into_iter()
            .map(from_entry as fn(((i64, i64), Point)) -> Intersection)
    }
}
