//! Geometric primitives: points, axis-aligned segments, and their intersections.

use std::cmp::Ordering;

use arrayvec::ArrayVec;

use crate::{
    event::{Event, EventKind},
    num::CheapOrderedFloat,
    Error, SegIdx,
};

/// A two-dimensional point.
///
/// Points don't implement `Ord`, because the order we use for sweeping
/// depends on a tolerance. See [`Point::sweep_cmp`].
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal component. The sweep-line moves in increasing `x`.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Are the two points closer than `eps`?
    ///
    /// Note that this compares the *squared* distance against `eps`.
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy < eps
    }

    /// Compares two points in sweep-line order.
    ///
    /// Points whose `x` coordinates are more than `eps` apart are ordered by
    /// `x`. Otherwise they are ordered by `y`, with no tolerance at all.
    ///
    /// This isn't transitive if there are chains of `x` coordinates that are
    /// each within `eps` of the next, so it can't be used for sorting. The
    /// sweep orders its events by exact keys instead; see [`crate::event`].
    pub fn sweep_cmp(&self, other: &Point, eps: f64) -> Ordering {
        x_cmp(self.x, other.x, eps).then_with(|| {
            CheapOrderedFloat::from(self.y).cmp(&CheapOrderedFloat::from(other.y))
        })
    }

    /// Is `self` strictly before `other` in sweep-line order?
    pub fn sweep_lt(&self, other: &Point, eps: f64) -> bool {
        self.sweep_cmp(other, eps) == Ordering::Less
    }

    /// Converts to a `kurbo` point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Compares horizontal coordinates, treating anything within `eps` as equal.
fn x_cmp(x0: f64, x1: f64, eps: f64) -> Ordering {
    if x0 + eps < x1 {
        Ordering::Less
    } else if x0 > x1 + eps {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// How a segment is aligned with the axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Both endpoints have the same `y` coordinate (up to the tolerance).
    Horizontal,
    /// Both endpoints have the same `x` coordinate (up to the tolerance).
    Vertical,
    /// Neither horizontal nor vertical. These segments can't be swept.
    Diagonal,
}

impl Orientation {
    /// Classifies the segment between `p0` and `p1`.
    ///
    /// A segment that is short enough to be both horizontal and vertical
    /// counts as horizontal.
    pub fn classify(p0: &Point, p1: &Point, eps: f64) -> Orientation {
        if (p0.y - p1.y).abs() < eps {
            Orientation::Horizontal
        } else if (p0.x - p1.x).abs() < eps {
            Orientation::Vertical
        } else {
            Orientation::Diagonal
        }
    }
}

/// An axis-aligned line segment with a caller-supplied identifier.
///
/// The endpoints are stored in sweep-line order. For a horizontal segment
/// `p0` is the left end; for a vertical segment it's the lower one.
#[derive(Clone, Copy, PartialEq, serde::Serialize)]
pub struct Segment {
    /// The identifier that intersections are reported with.
    pub id: i64,
    /// The first endpoint, in sweep-line order.
    pub p0: Point,
    /// The second endpoint, in sweep-line order.
    pub p1: Point,
    orientation: Orientation,
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Segment { id, p0, p1, .. } = self;
        write!(f, "#{id} {p0:?} -- {p1:?}")
    }
}

impl Segment {
    /// Creates a new segment between `a` and `b`, in either order.
    ///
    /// Fails if any coordinate isn't finite, or if the segment is neither
    /// horizontal nor vertical.
    pub fn new(id: i64, a: Point, b: Point, eps: f64) -> Result<Self, Error> {
        if a.is_nan() || b.is_nan() {
            return Err(Error::NaN { id });
        }
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::Infinity { id });
        }

        let orientation = Orientation::classify(&a, &b, eps);
        if orientation == Orientation::Diagonal {
            return Err(Error::UnsupportedOrientation { id });
        }

        // Exact comparisons along the segment's own axis.
        let key = |p: &Point| {
            let (along, across) = if orientation == Orientation::Horizontal {
                (p.x, p.y)
            } else {
                (p.y, p.x)
            };
            (CheapOrderedFloat::from(along), CheapOrderedFloat::from(across))
        };
        let (p0, p1) = if key(&b) < key(&a) { (b, a) } else { (a, b) };

        Ok(Segment {
            id,
            p0,
            p1,
            orientation,
        })
    }

    /// This segment's orientation. It's never [`Orientation::Diagonal`].
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns true if this segment is horizontal.
    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    /// Returns true if this segment is vertical.
    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// The sweep events for this segment, which lives at `idx` in its arena.
    ///
    /// Horizontal segments enter and leave the sweep-line, so they get an
    /// event for each end. Vertical segments only get a single event, at
    /// their lower end.
    ///
    /// A horizontal segment is on the sweep-line for its whole `x` range
    /// widened by `eps` on both sides, the same range that
    /// [`perpendicular_intersection`] accepts.
    pub fn events(&self, idx: SegIdx, eps: f64) -> ArrayVec<Event, 2> {
        let mut ret = ArrayVec::new();
        if self.is_horizontal() {
            ret.push(Event {
                x: self.p0.x - eps,
                point: self.p0,
                kind: EventKind::LeftLow,
                seg: idx,
                orientation: self.orientation,
            });
            ret.push(Event {
                x: self.p1.x + eps,
                point: self.p1,
                kind: EventKind::RightUp,
                seg: idx,
                orientation: self.orientation,
            });
        } else {
            ret.push(Event {
                x: self.p0.x,
                point: self.p0,
                kind: EventKind::LeftLow,
                seg: idx,
                orientation: self.orientation,
            });
        }
        ret
    }

    /// Intersects two segments.
    ///
    /// Only a horizontal and a vertical segment can intersect: segments of the
    /// same orientation never do, even if they overlap.
    pub fn intersect(&self, other: &Segment, eps: f64) -> Option<Point> {
        match (self.orientation, other.orientation) {
            (Orientation::Vertical, Orientation::Horizontal) => {
                perpendicular_intersection(self, other, eps)
            }
            (Orientation::Horizontal, Orientation::Vertical) => {
                perpendicular_intersection(other, self, eps)
            }
            _ => None,
        }
    }

    /// Converts to a `kurbo` line.
    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.p0.to_kurbo(), self.p1.to_kurbo())
    }
}

/// Finds the crossing point of a vertical and a horizontal segment.
///
/// Both ranges are inclusive and widened by `eps`, so segments that only
/// touch (like a T-junction) intersect. The intersection point takes its `x`
/// coordinate from the vertical segment and its `y` coordinate from the
/// horizontal one.
///
/// Returns `None` if the segments don't cross, or if `vertical` isn't vertical
/// or `horizontal` isn't horizontal.
pub fn perpendicular_intersection(
    vertical: &Segment,
    horizontal: &Segment,
    eps: f64,
) -> Option<Point> {
    if !vertical.is_vertical() || !horizontal.is_horizontal() {
        return None;
    }

    let x = vertical.p0.x;
    let y = horizontal.p0.y;
    let x_inside = horizontal.p0.x - eps <= x && x <= horizontal.p1.x + eps;
    let y_inside = vertical.p0.y - eps <= y && y <= vertical.p1.y + eps;
    (x_inside && y_inside).then_some(Point::new(x, y))
}
