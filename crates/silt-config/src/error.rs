//! Error types for configuration parsing and access.

use std::fmt;

/// Errors arising from parsing an input file or reading a typed value.
///
/// Any of these is fatal to run startup: a run cannot proceed from a
/// configuration it could not read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The input file could not be read.
    Io {
        /// Path of the file that failed to open or read.
        path: String,
        /// Human-readable description of the I/O failure.
        reason: String,
    },
    /// A line starting with `[` is not a well-formed `[section]` header.
    MalformedSectionHeader {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },
    /// An entry appeared before the first section header.
    EntryOutsideSection {
        /// 1-based line number.
        line: usize,
        /// Key of the offending entry.
        key: String,
    },
    /// An entry has a key but no values.
    EmptyEntry {
        /// 1-based line number.
        line: usize,
        /// Section the entry belongs to.
        section: String,
        /// Key of the offending entry.
        key: String,
    },
    /// A required entry is absent.
    MissingEntry {
        /// Section that was searched.
        section: String,
        /// Key that was not found.
        key: String,
    },
    /// A multi-valued entry has fewer elements than the requested position.
    MissingPosition {
        /// Section the entry belongs to.
        section: String,
        /// Key of the entry.
        key: String,
        /// Requested 0-based element position.
        position: usize,
        /// Number of elements the entry actually has.
        len: usize,
    },
    /// A stored value could not be parsed as the requested type.
    Parse {
        /// Section the entry belongs to.
        section: String,
        /// Key of the entry.
        key: String,
        /// The stored text that failed to parse.
        value: String,
        /// Name of the requested Rust type.
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, reason } => write!(f, "cannot read '{path}': {reason}"),
            Self::MalformedSectionHeader { line, text } => {
                write!(f, "line {line}: malformed section header '{text}'")
            }
            Self::EntryOutsideSection { line, key } => {
                write!(f, "line {line}: entry '{key}' appears before any [section]")
            }
            Self::EmptyEntry { line, section, key } => {
                write!(f, "line {line}: entry '{key}' in [{section}] has no value")
            }
            Self::MissingEntry { section, key } => {
                write!(f, "missing entry '{key}' in section [{section}]")
            }
            Self::MissingPosition {
                section,
                key,
                position,
                len,
            } => write!(
                f,
                "entry '{key}' in [{section}] has {len} element(s), position {position} requested"
            ),
            Self::Parse {
                section,
                key,
                value,
                expected,
            } => write!(
                f,
                "entry '{key}' in [{section}]: cannot parse '{value}' as {expected}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
