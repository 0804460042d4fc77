//! Per-particle scalar slots.

use crate::axis::Axis;
use std::fmt;

/// A named per-particle scalar slot in a domain block.
///
/// Each tracer particle carries a 3D position, a 3D velocity, and a
/// scalar mass. The activity flag is stored separately (it is a `bool`,
/// not a scalar — see `ParticleSet` in `silt-domain`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParticleSlot {
    /// Position component along [`Axis::I`].
    PositionX,
    /// Position component along [`Axis::J`].
    PositionY,
    /// Position component along [`Axis::K`].
    PositionZ,
    /// Velocity component along [`Axis::I`].
    VelocityX,
    /// Velocity component along [`Axis::J`].
    VelocityY,
    /// Velocity component along [`Axis::K`].
    VelocityZ,
    /// Particle mass.
    Mass,
}

impl ParticleSlot {
    /// All slots in storage order: positions, velocities, mass.
    pub const ALL: [ParticleSlot; 7] = [
        ParticleSlot::PositionX,
        ParticleSlot::PositionY,
        ParticleSlot::PositionZ,
        ParticleSlot::VelocityX,
        ParticleSlot::VelocityY,
        ParticleSlot::VelocityZ,
        ParticleSlot::Mass,
    ];

    /// Number of scalar slots per particle.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this slot in per-slot storage arrays.
    pub fn index(self) -> usize {
        match self {
            ParticleSlot::PositionX => 0,
            ParticleSlot::PositionY => 1,
            ParticleSlot::PositionZ => 2,
            ParticleSlot::VelocityX => 3,
            ParticleSlot::VelocityY => 4,
            ParticleSlot::VelocityZ => 5,
            ParticleSlot::Mass => 6,
        }
    }

    /// The position slot for the given axis.
    pub fn position(axis: Axis) -> ParticleSlot {
        match axis {
            Axis::I => ParticleSlot::PositionX,
            Axis::J => ParticleSlot::PositionY,
            Axis::K => ParticleSlot::PositionZ,
        }
    }

    /// The velocity slot for the given axis.
    pub fn velocity(axis: Axis) -> ParticleSlot {
        match axis {
            Axis::I => ParticleSlot::VelocityX,
            Axis::J => ParticleSlot::VelocityY,
            Axis::K => ParticleSlot::VelocityZ,
        }
    }

    /// Human-readable name for messages and labels.
    pub fn name(self) -> &'static str {
        match self {
            ParticleSlot::PositionX => "position_x",
            ParticleSlot::PositionY => "position_y",
            ParticleSlot::PositionZ => "position_z",
            ParticleSlot::VelocityX => "velocity_x",
            ParticleSlot::VelocityY => "velocity_y",
            ParticleSlot::VelocityZ => "velocity_z",
            ParticleSlot::Mass => "mass",
        }
    }
}

impl fmt::Display for ParticleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
