//! NumPy version probe

use crate::version::error::ProbeError;
use crate::version::probe::VersionProbe;
use crate::version::probes::NUMPY;
use crate::version::probes::build_env::captured;
use crate::version::value::VersionValue;

const ABI_VAR: &str = "FACEDETECT_NUMPY_ABI_VERSION";
const API_VAR: &str = "FACEDETECT_NUMPY_API_VERSION";

/// Reports the NumPy C ABI and API versions as `{abi, api}`
#[derive(Debug, Clone)]
pub struct NumpyProbe {
    abi: Option<&'static str>,
    api: Option<&'static str>,
}

impl Default for NumpyProbe {
    fn default() -> Self {
        Self::new(
            option_env!("FACEDETECT_NUMPY_ABI_VERSION"),
            option_env!("FACEDETECT_NUMPY_API_VERSION"),
        )
    }
}

impl NumpyProbe {
    pub fn new(abi: Option<&'static str>, api: Option<&'static str>) -> Self {
        Self { abi, api }
    }
}

impl VersionProbe for NumpyProbe {
    fn label(&self) -> &'static str {
        NUMPY
    }

    fn probe(&self) -> Result<VersionValue, ProbeError> {
        let abi = captured(ABI_VAR, self.abi)?;
        let api = captured(API_VAR, self.api)?;
        Ok(VersionValue::fields([("abi", abi), ("api", api)]))
    }
}
