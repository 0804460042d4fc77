//! The [`Setup`] type: run configuration intake and domain initialization.

use rand::{Rng, RngExt};
use silt_config::{ConfigError, Input};
use silt_core::{Axis, FieldChannel, ParticleSlot};
use silt_domain::DomainBlock;

/// Run-scoped setup state and the domain initializer.
///
/// Constructed once per run; the framework then calls
/// [`init_flow`](Setup::init_flow) exactly once per local domain before
/// the simulation loop starts. Construction only reads configuration —
/// it never touches field or particle state.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use silt_config::Input;
/// use silt_core::Axis;
/// use silt_domain::DomainBlock;
/// use silt_setup::Setup;
///
/// let input: Input = "[Setup]\nmass 2.5\n".parse().unwrap();
/// let setup = Setup::from_input(&input).unwrap();
///
/// let mut block = DomainBlock::builder()
///     .extent([8, 8, 8])
///     .bounds(Axis::I, 0.0, 1.0)
///     .bounds(Axis::J, 0.0, 1.0)
///     .bounds(Axis::K, 0.0, 1.0)
///     .particle_capacity(4)
///     .build()
///     .unwrap();
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// setup.init_flow(&mut block, &mut rng);
/// assert_eq!(block.device().generation(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Setup {
    particle_mass: f64,
}

impl Setup {
    /// Construct from run configuration.
    ///
    /// Reads `mass` from the `[Setup]` section, defaulting to 0 when the
    /// entry is absent. The only failure mode is a configuration value
    /// that cannot be parsed as a real number, which is fatal to run
    /// startup.
    pub fn from_input(input: &Input) -> Result<Setup, ConfigError> {
        let particle_mass = input.get_or("Setup", "mass", 0.0)?;
        Ok(Setup { particle_mass })
    }

    /// The configured tracer particle mass.
    pub fn particle_mass(&self) -> f64 {
        self.particle_mass
    }

    /// Write the initial condition into `block` and publish it.
    ///
    /// Fills density with 1 and every velocity channel with 0 over the
    /// full local extent (ghost cells included), seeds every particle
    /// with a random position, zero velocity, the configured mass, and
    /// its parity-derived activity flag, then publishes the block so the
    /// device image sees the new state. The field fill
    /// is idempotent; particle seeding consumes randomness, so a second
    /// call produces a different but distributionally equivalent
    /// population.
    pub fn init_flow<R: Rng>(&self, block: &mut DomainBlock, rng: &mut R) {
        fill_fields(block);
        self.seed_particles(block, rng);
        block.publish();
    }

    /// Seed the particle population in place.
    ///
    /// For every particle index `k`: each position component is an
    /// independent uniform sample mapped into the K-axis interval — all
    /// three components draw from that one axis's bounds; every velocity
    /// component is 0; mass is the configured particle mass; even `k`
    /// are marked inactive, odd `k` active.
    fn seed_particles<R: Rng>(&self, block: &mut DomainBlock, rng: &mut R) {
        let interval = block.bounds(Axis::K);
        let particles = block.particles_mut();
        for k in 0..particles.len() {
            for axis in Axis::ALL {
                let r: f64 = rng.random();
                particles.set(ParticleSlot::position(axis), k, interval.lerp(r));
            }
            for axis in Axis::ALL {
                particles.set(ParticleSlot::velocity(axis), k, 0.0);
            }
            particles.set(ParticleSlot::Mass, k, self.particle_mass);
            particles.set_active(k, k % 2 != 0);
        }
    }
}

/// Uniform starting fields: density 1, velocities 0, ghosts included.
fn fill_fields(block: &mut DomainBlock) {
    block.field_mut(FieldChannel::Density).fill(1.0);
    for axis in Axis::ALL {
        block.field_mut(FieldChannel::velocity(axis)).fill(0.0);
    }
}
