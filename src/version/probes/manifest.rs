//! Probe backed by a version manifest file

use crate::version::error::ProbeError;
use crate::version::probe::VersionProbe;
use crate::version::probes::normalize;
use crate::version::value::VersionValue;

/// Reports the version a manifest lists for one dependency
///
/// Boost and compiler entries are brought into the same form the build
/// environment probes report.
#[derive(Debug, Clone)]
pub struct ManifestProbe {
    label: &'static str,
    value: Option<VersionValue>,
}

impl ManifestProbe {
    pub fn new(label: &'static str, value: Option<VersionValue>) -> Self {
        Self { label, value }
    }
}

impl VersionProbe for ManifestProbe {
    fn label(&self) -> &'static str {
        self.label
    }

    fn probe(&self) -> Result<VersionValue, ProbeError> {
        let value = self
            .value
            .clone()
            .ok_or_else(|| ProbeError::Unavailable(format!("{} in version manifest", self.label)))?;
        normalize(self.label, value)
    }
}
