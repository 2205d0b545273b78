//! Version descriptor construction
//!
//! Probes are queried in declaration order and their results collected into
//! an ordered, read-only [`VersionInfo`]. A single failing probe fails the
//! whole build.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use tracing::debug;

use crate::version::error::DescriptorError;
use crate::version::probe::VersionProbe;
use crate::version::value::VersionValue;

/// Ordered mapping from dependency name to its version
///
/// There is no way to modify a `VersionInfo` once it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionInfo(IndexMap<String, VersionValue>);

impl VersionInfo {
    pub fn get(&self, label: &str) -> Option<&VersionValue> {
        self.0.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    /// Dependency names in declaration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionValue)> {
        self.0.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds a [`VersionInfo`] from an ordered list of probes
pub struct VersionDescriptorBuilder {
    probes: Vec<Box<dyn VersionProbe>>,
}

impl VersionDescriptorBuilder {
    pub fn new(probes: Vec<Box<dyn VersionProbe>>) -> Self {
        Self { probes }
    }

    /// Query every probe in order and collect the results
    ///
    /// # Returns
    /// * `Ok(VersionInfo)` - One entry per probe, in probe order
    /// * `Err(DescriptorError)` - The first probe that failed, or the first
    ///   label declared twice. No partial mapping is ever returned.
    pub fn build(&self) -> Result<VersionInfo, DescriptorError> {
        let mut versions = IndexMap::with_capacity(self.probes.len());

        for probe in &self.probes {
            let label = probe.label();
            let value = probe
                .probe()
                .map_err(|source| DescriptorError::Retrieval {
                    label: label.to_string(),
                    source,
                })?;
            debug!("{} version: {}", label, value);

            match versions.entry(label.to_string()) {
                Entry::Occupied(_) => {
                    return Err(DescriptorError::DuplicateDependency(label.to_string()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }

        Ok(VersionInfo(versions))
    }
}
