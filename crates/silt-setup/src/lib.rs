//! Initial-state construction for the Silt setup library.
//!
//! [`Setup`] is constructed once per run from a [`silt_config::Input`]
//! and invoked once per local domain through [`Setup::init_flow`], which
//! writes the starting condition — uniform fields, randomly placed
//! tracer particles — into a [`silt_domain::DomainBlock`] and publishes
//! it to the device image. [`Analysis`] is the post-output observer
//! capability; [`NoAnalysis`] is its documented no-op default.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod analysis;
mod setup;

pub use analysis::{Analysis, AnalysisError, NoAnalysis};
pub use setup::Setup;
