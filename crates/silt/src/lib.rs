//! Silt: initial-state construction for grid-and-particle simulations.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Silt sub-crates. For most users, adding `silt` as a single
//! dependency is sufficient.
//!
//! Silt builds the starting condition of a run: a uniform field state
//! and a randomly placed tracer-particle population, written into a
//! per-domain block and published to the device image the compute
//! pipeline reads. The surrounding framework owns everything else —
//! grid geometry, time integration, particle push, I/O.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use silt::prelude::*;
//!
//! // Run configuration: one section, one entry.
//! let input: Input = "[Setup]\nmass 2.5\n".parse().unwrap();
//! let setup = Setup::from_input(&input).unwrap();
//!
//! // One local domain: 8x8x8 cells, unit bounds, four tracers.
//! let mut block = DomainBlock::builder()
//!     .extent([8, 8, 8])
//!     .bounds(Axis::I, 0.0, 1.0)
//!     .bounds(Axis::J, 0.0, 1.0)
//!     .bounds(Axis::K, 0.0, 1.0)
//!     .particle_capacity(4)
//!     .build()
//!     .unwrap();
//!
//! // Initialize once, before the simulation loop.
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! setup.init_flow(&mut block, &mut rng);
//!
//! // The device image now holds the starting condition.
//! let device = block.device();
//! assert_eq!(device.generation(), 1);
//! assert!(device.field(FieldChannel::Density).iter().all(|&v| v == 1.0));
//! assert!(!device.is_active(0)); // even indices start inactive
//! assert!(device.is_active(1));
//! assert_eq!(device.particle(ParticleSlot::Mass, 1), 2.5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | Axes, field channels, particle slots |
//! | [`config`] | `silt-config` | Run-configuration input files |
//! | [`domain`] | `silt-domain` | The per-domain block and device image |
//! | [`setup`] | `silt-setup` | The setup protocol and analysis observers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`silt-core`): axes, field channels, particle slots.
pub use silt_core as types;

/// Run-configuration input files (`silt-config`).
///
/// [`config::Input`] parses the ini-style run file format and hands out
/// typed values with optional defaults.
pub use silt_config as config;

/// Per-domain storage (`silt-domain`).
///
/// [`domain::DomainBlock`] owns field and particle state for one local
/// domain plus the published [`domain::DeviceImage`].
pub use silt_domain as domain;

/// The setup protocol (`silt-setup`).
///
/// [`setup::Setup`] builds the initial condition; [`setup::Analysis`]
/// is the post-output observer capability.
pub use silt_setup as setup;

/// Common imports for typical Silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
pub mod prelude {
    pub use silt_config::{ConfigError, Input};
    pub use silt_core::{Axis, FieldChannel, ParticleSlot};
    pub use silt_domain::{AxisBounds, DeviceImage, DomainBlock, DomainError, ParticleSet};
    pub use silt_setup::{Analysis, AnalysisError, NoAnalysis, Setup};
}
