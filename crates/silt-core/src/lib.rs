//! Core vocabulary for the Silt setup library.
//!
//! This is the leaf crate with zero dependencies. It defines the three
//! logical axes of a local domain and the closed sets of per-cell field
//! channels and per-particle scalar slots that the rest of the workspace
//! indexes by.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod axis;
mod field;
mod particle;

pub use axis::Axis;
pub use field::FieldChannel;
pub use particle::ParticleSlot;
