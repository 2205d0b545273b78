//! Version probes for the dependencies the extension reports
//!
//! The dependency list is fixed. [`default_probes`] reads what the build
//! captured at compile time; [`manifest_probes`] reads a version manifest
//! written by the build system.

mod boost;
mod build_env;
mod compiler;
mod manifest;
mod numpy;

pub use boost::BoostProbe;
pub use build_env::BuildEnvProbe;
pub use compiler::CompilerProbe;
pub use manifest::ManifestProbe;
pub use numpy::NumpyProbe;

use tracing::warn;

use crate::config::VersionManifest;
use crate::version::error::ProbeError;
use crate::version::probe::VersionProbe;
use crate::version::value::VersionValue;

pub const BLITZ: &str = "Blitz++";
pub const BOOST: &str = "Boost";
pub const COMPILER: &str = "Compiler";
pub const PYTHON: &str = "Python";
pub const NUMPY: &str = "NumPy";
pub const HDF5: &str = "HDF5";
pub const BOB_BLITZ: &str = "bob.blitz";
pub const BOB_CORE: &str = "bob.core";
pub const BOB_IO_BASE: &str = "bob.io.base";
pub const BOB_IP_BASE: &str = "bob.ip.base";

/// Every reported dependency, in the order it is reported
pub const DEPENDENCY_LABELS: [&str; 10] = [
    BLITZ,
    BOOST,
    COMPILER,
    PYTHON,
    NUMPY,
    HDF5,
    BOB_BLITZ,
    BOB_CORE,
    BOB_IO_BASE,
    BOB_IP_BASE,
];

/// Bring a reported value into the form used for its dependency
///
/// Boost is reported dotted and the compiler as `{name, version}`, whatever
/// the source wrote. Other dependencies are reported as given.
pub(crate) fn normalize(label: &str, value: VersionValue) -> Result<VersionValue, ProbeError> {
    match label {
        BOOST => boost::normalize(value),
        COMPILER => compiler::normalize(value),
        _ => Ok(value),
    }
}

/// Probes reading the versions captured when this crate was built
pub fn default_probes() -> Vec<Box<dyn VersionProbe>> {
    vec![
        Box::new(BuildEnvProbe::new(
            BLITZ,
            "FACEDETECT_BLITZ_VERSION",
            option_env!("FACEDETECT_BLITZ_VERSION"),
        )),
        Box::new(BoostProbe::default()),
        Box::new(CompilerProbe::default()),
        Box::new(BuildEnvProbe::new(
            PYTHON,
            "FACEDETECT_PYTHON_VERSION",
            option_env!("FACEDETECT_PYTHON_VERSION"),
        )),
        Box::new(NumpyProbe::default()),
        Box::new(BuildEnvProbe::new(
            HDF5,
            "FACEDETECT_HDF5_VERSION",
            option_env!("FACEDETECT_HDF5_VERSION"),
        )),
        Box::new(BuildEnvProbe::new(
            BOB_BLITZ,
            "FACEDETECT_BOB_BLITZ_VERSION",
            option_env!("FACEDETECT_BOB_BLITZ_VERSION"),
        )),
        Box::new(BuildEnvProbe::new(
            BOB_CORE,
            "FACEDETECT_BOB_CORE_VERSION",
            option_env!("FACEDETECT_BOB_CORE_VERSION"),
        )),
        Box::new(BuildEnvProbe::new(
            BOB_IO_BASE,
            "FACEDETECT_BOB_IO_BASE_VERSION",
            option_env!("FACEDETECT_BOB_IO_BASE_VERSION"),
        )),
        Box::new(BuildEnvProbe::new(
            BOB_IP_BASE,
            "FACEDETECT_BOB_IP_BASE_VERSION",
            option_env!("FACEDETECT_BOB_IP_BASE_VERSION"),
        )),
    ]
}

/// Probes reading the versions listed in a manifest
///
/// Manifest entries for dependencies that aren't reported are ignored.
pub fn manifest_probes(manifest: &VersionManifest) -> Vec<Box<dyn VersionProbe>> {
    for label in manifest.externals.keys() {
        if !DEPENDENCY_LABELS.contains(&label.as_str()) {
            warn!("Ignoring unknown dependency in version manifest: {}", label);
        }
    }

    DEPENDENCY_LABELS
        .iter()
        .map(|&label| {
            let value = manifest.externals.get(label).cloned();
            Box::new(ManifestProbe::new(label, value)) as Box<dyn VersionProbe>
        })
        .collect()
}
