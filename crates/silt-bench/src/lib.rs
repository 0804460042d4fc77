//! Benchmark profiles for the Silt setup library.
//!
//! Provides pre-built domain profiles for benchmarking:
//!
//! - [`reference_block`]: 64x64x64 cells with 10K tracer particles
//! - [`stress_block`]: 128x128x128 cells with 100K tracer particles
//! - [`reference_setup`]: a setup with a fixed tracer mass

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silt_config::Input;
use silt_core::Axis;
use silt_domain::DomainBlock;
use silt_setup::Setup;

/// Build the reference benchmark domain: 64x64x64 cells, 10K particles.
pub fn reference_block() -> DomainBlock {
    block([64, 64, 64], 10_000)
}

/// Build the stress benchmark domain: 128x128x128 cells, 100K particles.
pub fn stress_block() -> DomainBlock {
    block([128, 128, 128], 100_000)
}

/// Build a setup with `mass 2.5` configured.
pub fn reference_setup() -> Setup {
    let input: Input = "[Setup]\nmass 2.5\n".parse().expect("static input parses");
    Setup::from_input(&input).expect("static input is well-typed")
}

fn block(extent: [usize; 3], particles: usize) -> DomainBlock {
    DomainBlock::builder()
        .extent(extent)
        .bounds(Axis::I, 0.0, 1.0)
        .bounds(Axis::J, 0.0, 1.0)
        .bounds(Axis::K, 0.0, 1.0)
        .particle_capacity(particles)
        .build()
        .expect("static profile is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_block_shape() {
        let block = reference_block();
        assert_eq!(block.cell_count(), 64 * 64 * 64);
        assert_eq!(block.particle_count(), 10_000);
    }

    #[test]
    fn reference_setup_mass() {
        assert_eq!(reference_setup().particle_mass(), 2.5);
    }
}
