//! Error types for domain-block construction.

use silt_core::Axis;
use std::fmt;

/// Errors arising from building a domain block.
///
/// All of these are construction-time failures. Once a block exists its
/// index ranges are valid by construction and the accessors perform no
/// release-path checking.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainError {
    /// The builder was not given an extent.
    MissingExtent,
    /// An extent component is zero.
    EmptyExtent {
        /// The axis with the zero extent.
        axis: Axis,
    },
    /// The per-axis extents multiply past `usize::MAX` cells.
    CellCountOverflow {
        /// The offending extent, `[ni, nj, nk]`.
        extent: [usize; 3],
    },
    /// The builder was not given bounds for an axis.
    MissingBounds {
        /// The axis with no bounds.
        axis: Axis,
    },
    /// Axis bounds are not a finite, non-empty half-open interval.
    InvalidBounds {
        /// The axis the bounds were given for.
        axis: Axis,
        /// Interval begin as given.
        begin: f64,
        /// Interval end as given.
        end: f64,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingExtent => write!(f, "domain extent is required"),
            Self::EmptyExtent { axis } => {
                write!(f, "extent along axis {axis} must be at least 1")
            }
            Self::CellCountOverflow { extent } => {
                write!(
                    f,
                    "extent {}x{}x{} overflows the addressable cell count",
                    extent[0], extent[1], extent[2]
                )
            }
            Self::MissingBounds { axis } => {
                write!(f, "bounds for axis {axis} are required")
            }
            Self::InvalidBounds { axis, begin, end } => {
                write!(
                    f,
                    "bounds [{begin}, {end}) for axis {axis} must be finite with begin < end"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
