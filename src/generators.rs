//! Utilities for generating examples, benchmarks, and test cases.

use crate::SegmentRecord;

/// Generate an `n` by `n` lattice: `n` horizontal lines and `n` vertical
/// lines, each crossing all of the others.
///
/// There are `n * n` intersections. The horizontal lines get ids `0..n` and
/// the vertical lines get ids `n..2n`.
pub fn lattice(n: usize) -> Vec<SegmentRecord> {
    let len = 10.0 * n as f64;
    let mut ret = Vec::with_capacity(2 * n);
    for i in 0..n {
        let y = 10.0 * i as f64 + 5.0;
        ret.push(SegmentRecord::new(i as i64, (0.0, y), (len, y)));
    }
    for i in 0..n {
        let x = 10.0 * i as f64 + 5.0;
        ret.push(SegmentRecord::new((n + i) as i64, (x, 0.0), (x, len)));
    }
    ret
}

/// Generate `n` short, disjoint crosses along a diagonal.
///
/// There are `n` intersections, but the sweep-line never has more than one
/// horizontal segment on it. This is the case where the sweep is much faster
/// than checking every pair.
pub fn scattered_crosses(n: usize) -> Vec<SegmentRecord> {
    let mut ret = Vec::with_capacity(2 * n);
    for i in 0..n {
        let c = 10.0 * i as f64;
        ret.push(SegmentRecord::new(2 * i as i64, (c - 1.0, c), (c + 1.0, c)));
        ret.push(SegmentRecord::new(
            2 * i as i64 + 1,
            (c, c - 1.0),
            (c, c + 1.0),
        ));
    }
    ret
}

/// Generate a staircase of `n` steps, made of alternating horizontal and
/// vertical segments that meet end-to-end.
///
/// Every segment touches the next one at a corner, so there are `2n - 1`
/// intersections, all of them at endpoints.
pub fn staircase(n: usize) -> Vec<SegmentRecord> {
    let mut ret = Vec::with_capacity(2 * n);
    for i in 0..n {
        let c = i as f64;
        ret.push(SegmentRecord::new(2 * i as i64, (c, c), (c + 1.0, c)));
        ret.push(SegmentRecord::new(
            2 * i as i64 + 1,
            (c + 1.0, c),
            (c + 1.0, c + 1.0),
        ));
    }
    ret
}
