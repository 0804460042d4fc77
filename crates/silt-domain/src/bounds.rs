//! Physical bounds of a domain along one axis.

use crate::error::DomainError;
use silt_core::Axis;
use std::fmt;

/// The half-open physical interval `[begin, end)` a domain spans along
/// one axis.
///
/// Construction rejects non-finite endpoints and empty or inverted
/// intervals; the `axis` argument only labels the error.
///
/// # Examples
///
/// ```
/// use silt_core::Axis;
/// use silt_domain::AxisBounds;
///
/// let b = AxisBounds::new(Axis::K, 0.0, 1.0).unwrap();
/// assert_eq!(b.span(), 1.0);
/// assert!(b.contains(0.0));
/// assert!(!b.contains(1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    begin: f64,
    end: f64,
}

impl AxisBounds {
    /// Create bounds for `axis`, validating `begin < end` and finiteness.
    pub fn new(axis: Axis, begin: f64, end: f64) -> Result<AxisBounds, DomainError> {
        if !begin.is_finite() || !end.is_finite() || begin >= end {
            return Err(DomainError::InvalidBounds { axis, begin, end });
        }
        Ok(AxisBounds { begin, end })
    }

    /// Start of the interval (inclusive).
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// End of the interval (exclusive).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length of the interval. Positive by construction.
    pub fn span(&self) -> f64 {
        self.end - self.begin
    }

    /// Whether `x` lies in `[begin, end)`.
    pub fn contains(&self, x: f64) -> bool {
        self.begin <= x && x < self.end
    }

    /// Map a unit sample `r` in `[0, 1)` onto the interval.
    ///
    /// `lerp(0.0) == begin`; `lerp(r) < end` for every `r < 1`.
    pub fn lerp(&self, r: f64) -> f64 {
        self.begin + r * self.span()
    }
}

impl fmt::Display for AxisBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
