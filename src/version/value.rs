//! Version values reported for each dependency

use std::fmt;

use indexmap::IndexMap;
use semver::Version;
use serde::{Deserialize, Serialize};

/// A version as reported by a dependency
///
/// Most libraries report a plain string. Some report a few named fields
/// instead, e.g. the compiler (`name`, `version`) or NumPy (`abi`, `api`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionValue {
    Text(String),
    Fields(IndexMap<String, String>),
}

impl VersionValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Build a structured value, keeping the field order given
    pub fn fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fields(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a field of a structured value
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Fields(fields) => fields.get(name).map(String::as_str),
        }
    }

    /// Interpret the value as a semantic version
    ///
    /// Plain strings are used as-is, structured values through their
    /// `version` field. Returns None if nothing parses.
    pub fn semver(&self) -> Option<Version> {
        let raw = match self {
            Self::Text(text) => text.as_str(),
            Self::Fields(_) => self.field("version")?,
        };
        parse_version(raw)
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Fields(fields) => {
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}={value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for VersionValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for VersionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Strips a leading 'v' and pads partial versions with zeros:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}
