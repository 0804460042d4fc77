//! Fixed-capacity per-particle storage.

use silt_core::ParticleSlot;

/// Struct-of-arrays storage for the tracer particle population.
///
/// Capacity is fixed when the owning block is built; setup code mutates
/// particles in place by index and never resizes the collection. Every
/// scalar slot starts at zero and every particle starts active — the
/// framework allocates particles live and setup decides which to keep.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSet {
    slots: [Vec<f64>; ParticleSlot::COUNT],
    active: Vec<bool>,
}

impl ParticleSet {
    pub(crate) fn new(capacity: usize) -> ParticleSet {
        ParticleSet {
            slots: std::array::from_fn(|_| vec![0.0; capacity]),
            active: vec![true; capacity],
        }
    }

    /// Number of particles. Fixed for the lifetime of the block.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Read one scalar slot of particle `k`.
    pub fn get(&self, slot: ParticleSlot, k: usize) -> f64 {
        debug_assert!(k < self.len(), "particle index {k} out of range");
        self.slots[slot.index()][k]
    }

    /// Write one scalar slot of particle `k`.
    pub fn set(&mut self, slot: ParticleSlot, k: usize, value: f64) {
        debug_assert!(k < self.len(), "particle index {k} out of range");
        self.slots[slot.index()][k] = value;
    }

    /// Whether particle `k` participates in the simulation.
    pub fn is_active(&self, k: usize) -> bool {
        debug_assert!(k < self.len(), "particle index {k} out of range");
        self.active[k]
    }

    /// Mark particle `k` active or inactive.
    pub fn set_active(&mut self, k: usize, active: bool) {
        debug_assert!(k < self.len(), "particle index {k} out of range");
        self.active[k] = active;
    }

    /// Bulk read-only view of one scalar slot across all particles.
    pub fn slot(&self, slot: ParticleSlot) -> &[f64] {
        &self.slots[slot.index()]
    }

    /// Bulk read-only view of the activity flags.
    pub fn active(&self) -> &[bool] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed_and_active() {
        let set = ParticleSet::new(3);
        assert_eq!(set.len(), 3);
        for slot in ParticleSlot::ALL {
            assert!(set.slot(slot).iter().all(|&v| v == 0.0));
        }
        assert!(set.active().iter().all(|&a| a));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut set = ParticleSet::new(2);
        set.set(ParticleSlot::Mass, 1, 2.5);
        assert_eq!(set.get(ParticleSlot::Mass, 1), 2.5);
        assert_eq!(set.get(ParticleSlot::Mass, 0), 0.0);
    }

    #[test]
    fn activity_flags_are_independent() {
        let mut set = ParticleSet::new(4);
        set.set_active(0, false);
        set.set_active(2, false);
        assert_eq!(set.active(), &[false, true, false, true]);
    }

    #[test]
    fn zero_capacity_is_allowed() {
        let set = ParticleSet::new(0);
        assert!(set.is_empty());
        assert!(set.slot(ParticleSlot::Mass).is_empty());
    }
}
