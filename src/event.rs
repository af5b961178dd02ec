//! Sweep events and the order in which they're processed.
//!
//! Every horizontal segment enters the sweep-line at its left end and leaves
//! at its right end. A vertical segment doesn't stay on the sweep-line at all:
//! it gets a single event that asks which horizontal segments it crosses.
//!
//! Events are sorted by an exact key, so that the order is total even when
//! many coordinates are within the tolerance of each other. The tolerance is
//! folded into the key instead: a horizontal segment enters at `x0 - eps` and
//! leaves at `x1 + eps`, so it's on the sweep-line for a vertical segment at
//! `x` exactly when `x0 - eps <= x <= x1 + eps`. That's the same test that
//! [`perpendicular_intersection`](crate::perpendicular_intersection) makes.
//!
//! At equal keys:
//!
//! - horizontal segments entering come first, so that a vertical segment
//!   touching their (widened) left end will find them;
//! - then the vertical segments;
//! - then the horizontal segments leaving, so that a vertical segment
//!   touching their (widened) right end still finds them.
//!
//! In particular, when one horizontal segment ends where another one starts,
//! the one that ends is *not* removed before the other is inserted: for a
//! moment both are on the sweep-line, and a vertical segment through the
//! shared point sees both of them. Don't swap the exits ahead of the
//! entrances. The status is keyed by segment as well as by height and
//! horizontal segments are never compared with each other, so the overlap is
//! harmless.

use std::cmp::Ordering;

use crate::{
    geom::{Orientation, Point},
    num::CheapOrderedFloat,
    SegIdx,
};

/// Which end of its segment an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum EventKind {
    /// The left end of a horizontal segment, or the lower end of a vertical one.
    LeftLow,
    /// The right end of a horizontal segment.
    RightUp,
}

/// A sweep-line event.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Event {
    /// The sweep-line position of this event.
    ///
    /// For a vertical segment this is its `x` coordinate. For a horizontal
    /// segment it's the `x` coordinate of the endpoint, pushed outwards by
    /// the tolerance.
    pub x: f64,
    /// The endpoint that this event belongs to.
    pub point: Point,
    /// Which end of the segment this is.
    pub kind: EventKind,
    /// The segment.
    pub seg: SegIdx,
    /// The segment's orientation, which is needed to break ties.
    pub orientation: Orientation,
}

impl Event {
    /// Is this the probe event of a vertical segment?
    pub fn is_probe(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    // The position of this event among all the events sharing its x coordinate.
    fn phase(&self) -> u8 {
        match (self.orientation, self.kind) {
            (Orientation::Vertical, _) => 1,
            (_, EventKind::LeftLow) => 0,
            (_, EventKind::RightUp) => 2,
        }
    }

    /// Compares two events in processing order.
    ///
    /// Events are ordered by [`Event::x`], then horizontal entrances before
    /// vertical probes before horizontal exits, then by `y`, and finally by
    /// segment index. Every comparison is exact, so this is a total order.
    pub fn sweep_cmp(&self, other: &Event) -> Ordering {
        CheapOrderedFloat::from(self.x)
            .cmp(&CheapOrderedFloat::from(other.x))
            .then_with(|| self.phase().cmp(&other.phase()))
            .then_with(|| {
                CheapOrderedFloat::from(self.point.y).cmp(&CheapOrderedFloat::from(other.point.y))
            })
            .then_with(|| self.seg.cmp(&other.seg))
    }
}

/// Fills `events` with the events of all segments, sorted in processing order.
///
/// `events` is cleared first; it's only passed in so that its allocation can
/// be reused.
pub(crate) fn sorted_events(segments: &crate::Segments, events: &mut Vec<Event>) {
    let eps = segments.eps();
    events.clear();
    events.extend(segments.iter().flat_map(|(idx, seg)| seg.events(idx, eps)));
    events.sort_unstable_by(Event::sweep_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Segments, DEFAULT_EPS};

    fn kinds(segs: &Segments) -> Vec<(i64, EventKind)> {
        let mut events = Vec::new();
        sorted_events(segs, &mut events);
        events
            .iter()
            .map(|ev| (segs[ev.seg].id, ev.kind))
            .collect()
    }

    #[test]
    fn entrances_before_probes_before_exits() {
        let mut segs = Segments::default();
        // A horizontal ending at x = 5, one starting at x = 5, and a vertical at x = 5.
        segs.add(1, (0.0, 0.0), (5.0, 0.0)).unwrap();
        segs.add(2, (5.0, 0.0), (10.0, 0.0)).unwrap();
        segs.add(3, (5.0, -1.0), (5.0, 1.0)).unwrap();

        assert_eq!(
            kinds(&segs),
            vec![
                (1, EventKind::LeftLow),
                (2, EventKind::LeftLow),
                (3, EventKind::LeftLow),
                (1, EventKind::RightUp),
                (2, EventKind::RightUp),
            ]
        );
    }

    #[test]
    fn phase_beats_height() {
        // With no tolerance, everything at x = 5 has the same key.
        let mut segs = Segments::new(0.0);
        // The entering horizontal is much higher than the probe, but it still goes first.
        segs.add(1, (5.0, 100.0), (10.0, 100.0)).unwrap();
        segs.add(2, (0.0, -100.0), (5.0, -100.0)).unwrap();
        segs.add(3, (5.0, 0.0), (5.0, 1.0)).unwrap();

        assert_eq!(
            kinds(&segs),
            vec![
                (2, EventKind::LeftLow),
                (1, EventKind::LeftLow),
                (3, EventKind::LeftLow),
                (2, EventKind::RightUp),
                (1, EventKind::RightUp),
            ]
        );
    }

    #[test]
    fn horizontals_are_widened() {
        let eps = DEFAULT_EPS;
        let mut segs = Segments::new(eps);
        segs.add(1, (0.0, 0.0), (5.0 - eps / 2.0, 0.0)).unwrap();
        segs.add(2, (5.0, -1.0), (5.0, 1.0)).unwrap();
        segs.add(3, (5.0 + eps / 2.0, 3.0), (8.0, 3.0)).unwrap();

        // The first horizontal ends a little to the left of the probe and the
        // second starts a little to the right, but both are within the tolerance.
        assert_eq!(
            kinds(&segs),
            vec![
                (1, EventKind::LeftLow),
                (3, EventKind::LeftLow),
                (2, EventKind::LeftLow),
                (1, EventKind::RightUp),
                (3, EventKind::RightUp),
            ]
        );
    }

    #[test]
    fn total_order_with_crowded_coordinates() {
        // Every x coordinate is within the tolerance of some other one.
        let eps = DEFAULT_EPS;
        let mut segs = Segments::new(eps);
        segs.add(0, (1.2e-5, 2.0), (2.4e-5, 2.0)).unwrap();
        segs.add(1, (2e-5, 0.0), (2e-5, 0.0)).unwrap();
        segs.add(2, (0.4e-5, 2.0), (0.4e-5, 0.0)).unwrap();
        segs.add(3, (0.8e-5, -1.0), (0.8e-5, 1.0)).unwrap();
        segs.add(4, (0.0, 1.0), (1.6e-5, 1.0)).unwrap();

        let mut events = Vec::new();
        sorted_events(&segs, &mut events);
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                assert_eq!(a.sweep_cmp(b), i.cmp(&j), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn ties_broken_by_height_then_index() {
        let mut segs = Segments::default();
        segs.add(1, (0.0, 2.0), (1.0, 2.0)).unwrap();
        segs.add(2, (0.0, 1.0), (1.0, 1.0)).unwrap();
        segs.add(3, (0.0, 1.0), (2.0, 1.0)).unwrap();

        assert_eq!(
            kinds(&segs),
            vec![
                (2, EventKind::LeftLow),
                (3, EventKind::LeftLow),
                (1, EventKind::LeftLow),
                (2, EventKind::RightUp),
                (1, EventKind::RightUp),
                (3, EventKind::RightUp),
            ]
        );
    }
}
