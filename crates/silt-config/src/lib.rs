//! Run-configuration input files for the Silt setup library.
//!
//! Simulations are configured through small ini-style text files:
//! `[section]` headers, whitespace-separated `key value...` entries, and
//! `#` comments. [`Input`] parses a file once at startup and hands out
//! typed values; [`Input::get_or`] is the get-or-default access the
//! setup protocol is built on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod input;

pub use error::ConfigError;
pub use input::Input;
