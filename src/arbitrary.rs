//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::{SegmentRecord, Segments, DEFAULT_EPS};

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

/// Generate a coordinate, with a strong bias towards a small set of integers.
///
/// Segments that share coordinates produce shared endpoints and T-junctions,
/// which are the interesting cases for the sweep. Some coordinates are then
/// nudged by a fraction of the default tolerance, so that nearby segments
/// only just meet (or only just miss).
fn coordinate(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    let base = if u.ratio(1u8, 8u8)? {
        let x = float_in_range(-16.0, 16.0, u)?;
        (x * 8.0).round() / 8.0
    } else {
        f64::from(u.int_in_range(-16i32..=16)?)
    };
    if u.ratio(1u8, 4u8)? {
        let nudge = u.int_in_range(-5i32..=5)?;
        Ok(base + f64::from(nudge) * 0.4 * DEFAULT_EPS)
    } else {
        Ok(base)
    }
}

/// Generate an arbitrary horizontal or vertical segment record.
pub fn orthogonal_record(
    id: i64,
    u: &mut Unstructured<'_>,
) -> Result<SegmentRecord, arbitrary::Error> {
    let horizontal: bool = u.arbitrary()?;
    let x = coordinate(u)?;
    let y = coordinate(u)?;
    let end = coordinate(u)?;
    Ok(if horizontal {
        SegmentRecord::new(id, (x, y), (end, y))
    } else {
        SegmentRecord::new(id, (x, y), (x, end))
    })
}

/// Generate an arbitrary collection of horizontal and vertical segments, using
/// the default tolerance.
pub fn orthogonal_segments(u: &mut Unstructured<'_>) -> Result<Segments, arbitrary::Error> {
    let len = u.int_in_range(0usize..=64)?;
    let mut ret = Segments::new(DEFAULT_EPS);
    for id in 0..len {
        let record = orthogonal_record(id as i64, u)?;
        ret.add_record(&record)
            .map_err(|_| arbitrary::Error::IncorrectFormat)?;
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{brute_force, intersections, Intersector};

    #[test]
    fn sweep_matches_brute_force() {
        arbtest::arbtest(|u| {
            let segs = orthogonal_segments(u)?;
            assert_eq!(intersections(&segs), brute_force(&segs));
            Ok(())
        });
    }

    #[test]
    fn stream_matches_collection() {
        arbtest::arbtest(|u| {
            let segs = orthogonal_segments(u)?;
            let mut intersector = Intersector::new();
            let mut streamed = Vec::new();
            intersector.sweep(&segs, |int| streamed.push(int));
            let collected = intersector.intersections(&segs);

            assert_eq!(streamed.len(), collected.len());
            for int in streamed {
                assert_eq!(collected.get(int.id1, int.id2), Some(int.point));
            }
            Ok(())
        });
    }
}
