//! Per-domain field and particle storage for the Silt setup library.
//!
//! A [`DomainBlock`] is the local portion of the simulation owned by one
//! process or partition: dense per-channel field arrays over the full
//! ghost-inclusive extent, fixed-capacity per-particle scalar slots with
//! activity flags, physical bounds per axis, and a [`DeviceImage`] that
//! the compute pipeline reads. Host-side writes are invisible to the
//! device image until [`DomainBlock::publish`] is called.
//!
//! Shapes and bounds are validated once at construction through
//! [`DomainBlock::builder`]; the per-cell and per-particle accessors are
//! `debug_assert`ed rather than checked in release paths.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;
mod bounds;
mod device;
mod error;
mod particles;

pub use block::{DomainBlock, DomainBlockBuilder};
pub use bounds::AxisBounds;
pub use device::DeviceImage;
pub use error::DomainError;
pub use particles::ParticleSet;
