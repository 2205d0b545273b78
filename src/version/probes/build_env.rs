//! Probe for versions captured from the build environment

use crate::version::error::ProbeError;
use crate::version::probe::VersionProbe;
use crate::version::value::VersionValue;

/// Reports a version string the build system supplied at compile time
///
/// The value is captured with `option_env!`, so a missing variable shows up
/// here as `None` and the probe fails instead of reporting a placeholder.
#[derive(Debug, Clone)]
pub struct BuildEnvProbe {
    label: &'static str,
    var: &'static str,
    value: Option<&'static str>,
}

impl BuildEnvProbe {
    pub fn new(label: &'static str, var: &'static str, value: Option<&'static str>) -> Self {
        Self { label, var, value }
    }
}

impl VersionProbe for BuildEnvProbe {
    fn label(&self) -> &'static str {
        self.label
    }

    fn probe(&self) -> Result<VersionValue, ProbeError> {
        captured(self.var, self.value).map(VersionValue::text)
    }
}

/// Returns the trimmed captured value, failing when it is missing or blank
pub(crate) fn captured(var: &str, value: Option<&'static str>) -> Result<&'static str, ProbeError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ProbeError::Unavailable(var.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("1.8.12"), Ok(VersionValue::text("1.8.12")))]
    #[case(Some(" 0.10\n"), Ok(VersionValue::text("0.10")))]
    #[case(Some(""), Err(ProbeError::Unavailable("FACEDETECT_HDF5_VERSION".to_string())))]
    #[case(Some("   "), Err(ProbeError::Unavailable("FACEDETECT_HDF5_VERSION".to_string())))]
    #[case(None, Err(ProbeError::Unavailable("FACEDETECT_HDF5_VERSION".to_string())))]
    fn probe_returns_expected(
        #[case] value: Option<&'static str>,
        #[case] expected: Result<VersionValue, ProbeError>,
    ) {
        let probe = BuildEnvProbe::new("HDF5", "FACEDETECT_HDF5_VERSION", value);

        assert_eq!(probe.label(), "HDF5");
        assert_eq!(probe.probe(), expected);
    }
}
