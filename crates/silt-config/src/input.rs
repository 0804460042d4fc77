//! The [`Input`] store: parsed run configuration with typed access.

use crate::error::ConfigError;
use indexmap::IndexMap;
use std::path::Path;
use std::str::FromStr;

/// A parsed run-configuration file.
///
/// Sections map entry keys to one or more whitespace-separated values,
/// all kept as text until a typed accessor is called. Section and entry
/// order follow the file. Re-defining an entry replaces it.
///
/// # Examples
///
/// ```
/// use silt_config::Input;
///
/// let input: Input = "\
/// ## run parameters
/// [Setup]
/// mass    2.5
/// ".parse().unwrap();
///
/// assert_eq!(input.get::<f64>("Setup", "mass").unwrap(), 2.5);
/// assert_eq!(input.get_or::<f64>("Setup", "absent", 0.0).unwrap(), 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    sections: IndexMap<String, IndexMap<String, Vec<String>>>,
}

impl Input {
    /// Read and parse an input file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Input, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        text.parse()
    }

    /// Raw values of an entry, or `None` if the section or entry is absent.
    ///
    /// Parsed entries always have at least one value.
    pub fn entry(&self, section: &str, key: &str) -> Option<&[String]> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(Vec::as_slice)
    }

    /// Whether the file defines the given section.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Section names in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Entry keys of a section in file order. Empty for an absent section.
    pub fn entry_names<'a>(&'a self, section: &str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self.sections.get(section) {
            Some(entries) => Box::new(entries.keys().map(String::as_str)),
            None => Box::new(std::iter::empty()),
        }
    }

    /// The `position`-th value of a multi-valued entry, parsed as `T`.
    ///
    /// # Errors
    ///
    /// `MissingEntry` if the section or entry is absent, `MissingPosition`
    /// if the entry has fewer than `position + 1` values, `Parse` if the
    /// stored text does not parse as `T`.
    pub fn get_at<T: FromStr>(
        &self,
        section: &str,
        key: &str,
        position: usize,
    ) -> Result<T, ConfigError> {
        let values = self
            .entry(section, key)
            .ok_or_else(|| ConfigError::MissingEntry {
                section: section.to_string(),
                key: key.to_string(),
            })?;
        let value = values
            .get(position)
            .ok_or_else(|| ConfigError::MissingPosition {
                section: section.to_string(),
                key: key.to_string(),
                position,
                len: values.len(),
            })?;
        value.parse().map_err(|_| ConfigError::Parse {
            section: section.to_string(),
            key: key.to_string(),
            value: value.clone(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// The first value of a required entry, parsed as `T`.
    pub fn get<T: FromStr>(&self, section: &str, key: &str) -> Result<T, ConfigError> {
        self.get_at(section, key, 0)
    }

    /// The first value of an entry, parsed as `T`, or `default` when the
    /// section or entry is absent.
    ///
    /// Absence falls back to the default; a present value that fails to
    /// parse is still an error. A typo'd value must never be silently
    /// replaced by the default.
    pub fn get_or<T: FromStr>(
        &self,
        section: &str,
        key: &str,
        default: T,
    ) -> Result<T, ConfigError> {
        match self.entry(section, key) {
            None => Ok(default),
            Some(_) => self.get_at(section, key, 0),
        }
    }
}

impl FromStr for Input {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Input, ConfigError> {
        let mut sections: IndexMap<String, IndexMap<String, Vec<String>>> = IndexMap::new();
        let mut current: Option<String> = None;

        for (idx, raw_line) in text.lines().enumerate() {
            let line = idx + 1;
            // Everything after '#' is a comment.
            let content = match raw_line.split_once('#') {
                Some((before, _)) => before,
                None => raw_line,
            };
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            if content.starts_with('[') {
                let name = content
                    .strip_prefix('[')
                    .and_then(|s| s.strip_suffix(']'))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| ConfigError::MalformedSectionHeader {
                        line,
                        text: content.to_string(),
                    })?;
                sections.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                continue;
            }

            let mut tokens = content.split_whitespace();
            let key = tokens.next().expect("non-empty line has a first token");
            let values: Vec<String> = tokens.map(str::to_string).collect();

            let section = current
                .as_deref()
                .ok_or_else(|| ConfigError::EntryOutsideSection {
                    line,
                    key: key.to_string(),
                })?;
            if values.is_empty() {
                return Err(ConfigError::EmptyEntry {
                    line,
                    section: section.to_string(),
                    key: key.to_string(),
                });
            }
            sections
                .get_mut(section)
                .expect("current section was inserted on its header line")
                .insert(key.to_string(), values);
        }

        Ok(Input { sections })
    }
}
