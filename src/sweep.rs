//! The sweep-line implementation.
//!
//! The main entry point is [`Intersector`], which computes all the
//! intersections between a collection of horizontal and vertical segments.
//! The results can either be collected into [`Intersections`] or handed to a
//! callback one at a time, as they're found.

use crate::{
    event::{sorted_events, Event, EventKind},
    geom::{perpendicular_intersection, Orientation},
    intersections::{Intersection, Intersections},
    status::SweepStatus,
    Segments,
};

/// Finds intersections between segments.
///
/// An `Intersector` doesn't remember anything between sweeps: every call to
/// [`Intersector::sweep`] starts from scratch. Holding on to one only saves
/// on re-allocating its buffers.
#[derive(Clone, Debug, Default)]
pub struct Intersector {
    events: Vec<Event>,
    status: SweepStatus,
}

impl Intersector {
    /// Creates a new intersector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweeps over `segments`, calling `callback` for each intersection as
    /// soon as it's found.
    ///
    /// Intersections are found in sweep-line order, which isn't the order
    /// that [`Intersections`] iterates in. Every pair of intersecting segments
    /// is reported exactly once.
    ///
    /// # Panics
    ///
    /// Panics if the sweep-line gets into an inconsistent state, which means
    /// there's a bug in the event ordering.
    pub fn sweep<C: FnMut(Intersection)>(&mut self, segments: &Segments, mut callback: C) {
        let eps = segments.eps();
        let Intersector { events, status } = self;
        status.clear();
        sorted_events(segments, events);
        tracing::debug!(
            segments = segments.len(),
            events = events.len(),
            "starting sweep"
        );

        let mut count = 0;
        for ev in events.iter() {
            let seg = &segments[ev.seg];
            match (ev.orientation, ev.kind) {
                (Orientation::Vertical, _) => {
                    for h_idx in status.range(seg.p0.y - eps, seg.p1.y + eps) {
                        let h = &segments[h_idx];
                        let Some(point) = perpendicular_intersection(seg, h, eps) else {
                            panic!("{seg:?} and {h:?} are both on the sweep-line, but don't cross");
                        };
                        tracing::trace!(vertical = seg.id, horizontal = h.id, ?point, "crossing");
                        callback(Intersection::new(seg.id, h.id, point));
                        count += 1;
                    }
                }
                (_, EventKind::LeftLow) => {
                    let inserted = status.insert(ev.seg, seg.p0.y);
                    debug_assert!(inserted, "{seg:?} entered the sweep-line twice");
                }
                (_, EventKind::RightUp) => {
                    if !status.remove(ev.seg, seg.p0.y) {
                        panic!("{seg:?} left the sweep-line without entering it");
                    }
                }
            }

            #[cfg(feature = "slow-asserts")]
            check_status(segments, status, ev, eps);
        }

        debug_assert!(status.is_empty());
        tracing::debug!(intersections = count, "finished sweep");
    }

    /// Sweeps over `segments`, collecting all the intersections.
    pub fn intersections(&mut self, segments: &Segments) -> Intersections {
        let mut ret = Intersections::new();
        self.sweep(segments, |int| {
            ret.insert(int);
        });
        ret
    }
}

// Every horizontal segment on the sweep-line should span the current event.
#[cfg(feature = "slow-asserts")]
fn check_status(segments: &Segments, status: &SweepStatus, ev: &Event, eps: f64) {
    let x = ev.x;
    for (y, idx) in status.iter() {
        let seg = &segments[idx];
        assert!(seg.is_horizontal(), "{seg:?} is on the sweep-line");
        assert_eq!(y, seg.p0.y);
        assert!(
            seg.p0.x - eps <= x && x <= seg.p1.x + eps,
            "{seg:?} is on the sweep-line at x = {x}"
        );
    }
}

/// Computes all the intersections between `segments`, calling `callback` on
/// each one as soon as it's found.
///
/// This is a shortcut for [`Intersector::sweep`] on a fresh intersector.
pub fn sweep<C: FnMut(Intersection)>(segments: &Segments, callback: C) {
    Intersector::new().sweep(segments, callback)
}

/// Computes all the intersections between `segments`.
pub fn intersections(segments: &Segments) -> Intersections {
    Intersector::new().intersections(segments)
}

/// Computes all the intersections between `segments` by checking every
/// horizontal segment against every vertical one.
///
/// This takes quadratic time. It's here as a reference for testing the sweep.
pub fn brute_force(segments: &Segments) -> Intersections {
    let eps = segments.eps();
    let mut ret = Intersections::new();
    for h in segments.horizontals() {
        for v in segments.verticals() {
            if let Some(point) = perpendicular_intersection(v, h, eps) {
                ret.insert(Intersection::new(v.id, h.id, point));
            }
        }
    }
    ret
}
