//! A totally ordered wrapper for coordinates.

/// A wrapper for `f64` that implements `Ord`.
///
/// This doesn't guard against NaNs on construction, and it panics if it ever
/// compares one. Coordinates are checked for NaN when segments are added to
/// [`Segments`](crate::Segments), so everything that reaches the sweep is
/// safe to wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheapOrderedFloat(f64);

impl CheapOrderedFloat {
    /// Retrieve the inner `f64`.
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl Eq for CheapOrderedFloat {}

impl PartialOrd for CheapOrderedFloat {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CheapOrderedFloat {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.0 < other.0 {
            std::cmp::Ordering::Less
        } else if self.0 > other.0 {
            std::cmp::Ordering::Greater
        } else if self.0 == other.0 {
            std::cmp::Ordering::Equal
        } else {
            panic!("tried to compare NaN")
        }
    }
}

impl From<f64> for CheapOrderedFloat {
    fn from(value: f64) -> Self {
        CheapOrderedFloat(value)
    }
}
