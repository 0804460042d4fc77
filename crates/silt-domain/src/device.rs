//! The published device-side image of a domain block.

use crate::particles::ParticleSet;
use silt_core::{FieldChannel, ParticleSlot};

/// Read-only device-side copy of a domain block's state.
///
/// The compute pipeline reads this image, never the host-side buffers:
/// host writes become visible here only when the owning block calls
/// [`publish`](crate::DomainBlock::publish), which replaces the whole
/// image and advances its generation. Generation 0 is the
/// allocation-time state.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceImage {
    pub(crate) fields: [Vec<f64>; FieldChannel::COUNT],
    pub(crate) particles: ParticleSet,
    pub(crate) generation: u64,
}

impl DeviceImage {
    /// Flat view of one field channel, `i` fastest.
    pub fn field(&self, channel: FieldChannel) -> &[f64] {
        &self.fields[channel.index()]
    }

    /// Read one scalar slot of particle `k`.
    pub fn particle(&self, slot: ParticleSlot, k: usize) -> f64 {
        self.particles.get(slot, k)
    }

    /// Whether particle `k` is active in the published image.
    pub fn is_active(&self, k: usize) -> bool {
        self.particles.is_active(k)
    }

    /// Number of particles in the image.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// How many times the owning block has published. 0 = never.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
