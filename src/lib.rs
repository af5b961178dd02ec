#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
pub mod event;
mod geom;
pub mod intersections;
pub mod io;
mod num;
mod segments;
pub mod status;
pub mod sweep;

#[cfg(feature = "generators")]
pub mod generators;

pub use geom::{perpendicular_intersection, Orientation, Point, Segment};
pub use intersections::{Intersection, Intersections};
pub use segments::{SegIdx, SegmentRecord, Segments};
pub use sweep::{brute_force, intersections, sweep, Intersector};

/// The default tolerance for comparing coordinates.
///
/// Coordinates that differ by less than this are treated as equal when
/// classifying segments, ordering events, and testing for intersections.
pub const DEFAULT_EPS: f64 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A segment was rejected.
///
/// Each variant carries the id of the offending segment.
pub enum Error {
    /// At least one of the coordinates was infinite.
    Infinity {
        /// The segment's id.
        id: i64,
    },
    /// At least one of the coordinates was not a number.
    NaN {
        /// The segment's id.
        id: i64,
    },
    /// The segment was neither horizontal nor vertical.
    UnsupportedOrientation {
        /// The segment's id.
        id: i64,
    },
    /// Another segment already had the same id.
    DuplicateId {
        /// The segment's id.
        id: i64,
    },
}

impl Error {
    /// The id of the segment that was rejected.
    pub fn id(&self) -> i64 {
        match self {
            Error::Infinity { id }
            | Error::NaN { id }
            | Error::UnsupportedOrientation { id }
            | Error::DuplicateId { id } => *id,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Infinity { id } => write!(f, "segment {id} has an infinite coordinate"),
            Error::NaN { id } => write!(f, "segment {id} has a NaN coordinate"),
            Error::UnsupportedOrientation { id } => {
                write!(f, "segment {id} is neither horizontal nor vertical")
            }
            Error::DuplicateId { id } => write!(f, "segment id {id} is used more than once"),
        }
    }
}

impl std::error::Error for Error {}

/// Validates a collection of segment records and computes all their
/// intersections.
///
/// Fails without sweeping if any of the records is rejected.
pub fn find_intersections(
    records: impl IntoIterator<Item = SegmentRecord>,
    eps: f64,
) -> Result<Intersections, Error> {
    let segments = Segments::from_records(records, eps)?;
    Ok(intersections(&segments))
}
