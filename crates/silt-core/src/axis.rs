//! The three logical axes of a local domain.

use std::fmt;

/// A logical axis of the simulation grid.
///
/// Field storage is row-major with `I` fastest: a cell is addressed as
/// `(k, j, i)` and consecutive `i` values are adjacent in memory.
/// Extents and physical bounds are indexed by [`Axis::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Innermost (fastest-varying) axis.
    I,
    /// Middle axis.
    J,
    /// Outermost (slowest-varying) axis.
    K,
}

impl Axis {
    /// All three axes in storage order, innermost first.
    pub const ALL: [Axis; 3] = [Axis::I, Axis::J, Axis::K];

    /// Position of this axis in extent and bounds arrays: I=0, J=1, K=2.
    pub fn index(self) -> usize {
        match self {
            Axis::I => 0,
            Axis::J => 1,
            Axis::K => 2,
        }
    }

    /// Short lowercase name for messages and labels.
    pub fn name(self) -> &'static str {
        match self {
            Axis::I => "i",
            Axis::J => "j",
            Axis::K => "k",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
