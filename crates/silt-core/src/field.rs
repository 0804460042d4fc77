//! Per-cell field channels.

use crate::axis::Axis;
use std::fmt;

/// A named per-cell field slot in a domain block.
///
/// The channel set is fixed by the setup protocol: one density channel
/// and one velocity component per axis. Every channel stores one `f64`
/// per cell over the full local extent, ghost cells included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldChannel {
    /// Mass density per cell.
    Density,
    /// Velocity component along [`Axis::I`].
    VelocityX,
    /// Velocity component along [`Axis::J`].
    VelocityY,
    /// Velocity component along [`Axis::K`].
    VelocityZ,
}

impl FieldChannel {
    /// All channels, density first, in storage order.
    pub const ALL: [FieldChannel; 4] = [
        FieldChannel::Density,
        FieldChannel::VelocityX,
        FieldChannel::VelocityY,
        FieldChannel::VelocityZ,
    ];

    /// Number of channels in a domain block.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this channel in per-channel storage arrays.
    pub fn index(self) -> usize {
        match self {
            FieldChannel::Density => 0,
            FieldChannel::VelocityX => 1,
            FieldChannel::VelocityY => 2,
            FieldChannel::VelocityZ => 3,
        }
    }

    /// The velocity channel for the given axis.
    pub fn velocity(axis: Axis) -> FieldChannel {
        match axis {
            Axis::I => FieldChannel::VelocityX,
            Axis::J => FieldChannel::VelocityY,
            Axis::K => FieldChannel::VelocityZ,
        }
    }

    /// Human-readable name for messages and labels.
    pub fn name(self) -> &'static str {
        match self {
            FieldChannel::Density => "density",
            FieldChannel::VelocityX => "velocity_x",
            FieldChannel::VelocityY => "velocity_y",
            FieldChannel::VelocityZ => "velocity_z",
        }
    }
}

impl fmt::Display for FieldChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
