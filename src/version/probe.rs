//! Probe trait for retrieving the version of one dependency

#[cfg(test)]
use mockall::automock;

use crate::version::error::ProbeError;
use crate::version::value::VersionValue;

/// Trait for retrieving the version of a single dependency
#[cfg_attr(test, automock)]
pub trait VersionProbe: Send + Sync {
    /// Name the dependency is reported under (e.g., "HDF5")
    fn label(&self) -> &'static str;

    /// Retrieves the version of the dependency
    ///
    /// # Returns
    /// * `Ok(VersionValue)` - The version, plain or structured
    /// * `Err(ProbeError)` - If the version is missing or can't be interpreted
    fn probe(&self) -> Result<VersionValue, ProbeError>;
}

/// A probe that always reports the same value
///
/// Handy for hosts that already know a version and for tests.
#[derive(Debug, Clone)]
pub struct FixedProbe {
    label: &'static str,
    value: Result<VersionValue, ProbeError>,
}

impl FixedProbe {
    pub fn new(label: &'static str, value: impl Into<VersionValue>) -> Self {
        Self {
            label,
            value: Ok(value.into()),
        }
    }

    pub fn failing(label: &'static str, error: ProbeError) -> Self {
        Self {
            label,
            value: Err(error),
        }
    }
}

impl VersionProbe for FixedProbe {
    fn label(&self) -> &'static str {
        self.label
    }

    fn probe(&self) -> Result<VersionValue, ProbeError> {
        self.value.clone()
    }
}
