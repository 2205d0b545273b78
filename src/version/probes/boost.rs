//! Boost version probe

use crate::version::error::ProbeError;
use crate::version::probe::VersionProbe;
use crate::version::probes::BOOST;
use crate::version::probes::build_env::captured;
use crate::version::value::{VersionValue, parse_version};

const VAR: &str = "FACEDETECT_BOOST_VERSION";

/// Reports the Boost version the build was configured with
///
/// Boost publishes its version as a packed integer (`BOOST_VERSION`,
/// e.g. `105500`). Both that form and a dotted string are accepted; the
/// reported value is always dotted.
#[derive(Debug, Clone)]
pub struct BoostProbe {
    value: Option<&'static str>,
}

impl Default for BoostProbe {
    fn default() -> Self {
        Self::new(option_env!("FACEDETECT_BOOST_VERSION"))
    }
}

impl BoostProbe {
    pub fn new(value: Option<&'static str>) -> Self {
        Self { value }
    }
}

impl VersionProbe for BoostProbe {
    fn label(&self) -> &'static str {
        BOOST
    }

    fn probe(&self) -> Result<VersionValue, ProbeError> {
        normalize(VersionValue::text(captured(VAR, self.value)?))
    }
}

/// Bring a Boost version from any source into dotted form
///
/// Packed numbers are unpacked; the result has to read as a version.
pub(crate) fn normalize(value: VersionValue) -> Result<VersionValue, ProbeError> {
    let raw = match value {
        VersionValue::Text(raw) => raw,
        structured @ VersionValue::Fields(_) => {
            return Err(ProbeError::Malformed {
                value: structured.to_string(),
                reason: "expected a plain Boost version".to_string(),
            });
        }
    };

    let raw = raw.trim();
    let dotted = if raw.contains('.') {
        raw.to_string()
    } else {
        let packed: u32 = raw.parse().map_err(|_| ProbeError::Malformed {
            value: raw.to_string(),
            reason: "expected a dotted version or a packed BOOST_VERSION number".to_string(),
        })?;
        unpack(packed)
    };

    if parse_version(&dotted).is_none() {
        return Err(ProbeError::Malformed {
            value: raw.to_string(),
            reason: "not a version number".to_string(),
        });
    }
    Ok(VersionValue::Text(dotted))
}

/// `BOOST_VERSION % 100` is the patch level, `BOOST_VERSION / 100 % 1000`
/// the minor version and `BOOST_VERSION / 100000` the major version
fn unpack(packed: u32) -> String {
    format!(
        "{}.{}.{}",
        packed / 100_000,
        packed / 100 % 1000,
        packed % 100
    )
}
