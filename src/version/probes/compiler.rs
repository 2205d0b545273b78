//! Compiler version probe

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::ProbeError;
use crate::version::probe::VersionProbe;
use crate::version::probes::COMPILER;
use crate::version::probes::build_env::captured;
use crate::version::value::VersionValue;

const VAR: &str = "FACEDETECT_RUSTC_VERSION";

/// Regex for `<name> <major.minor.patch[-pre]>`
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][\w-]*)\s+(\d+\.\d+\.\d+(?:-[0-9A-Za-z.]+)?)")
        .expect("compiler version pattern is valid")
});

/// Reports the compiler that built this crate as `{name, version}`
///
/// The build script records `rustc --version`, which looks like
/// `rustc 1.82.0 (f6e511eec 2024-10-15)`.
#[derive(Debug, Clone)]
pub struct CompilerProbe {
    value: Option<&'static str>,
}

impl Default for CompilerProbe {
    fn default() -> Self {
        Self::new(option_env!("FACEDETECT_RUSTC_VERSION"))
    }
}

impl CompilerProbe {
    pub fn new(value: Option<&'static str>) -> Self {
        Self { value }
    }
}

impl VersionProbe for CompilerProbe {
    fn label(&self) -> &'static str {
        COMPILER
    }

    fn probe(&self) -> Result<VersionValue, ProbeError> {
        parse(captured(VAR, self.value)?)
    }
}

/// Split compiler output such as `rustc 1.82.0 (...)` into `{name, version}`
pub(crate) fn parse(raw: &str) -> Result<VersionValue, ProbeError> {
    let caps = VERSION_RE
        .captures(raw.trim())
        .ok_or_else(|| ProbeError::Malformed {
            value: raw.to_string(),
            reason: "expected `<compiler> <version>`".to_string(),
        })?;

    Ok(VersionValue::fields([
        ("name", &caps[1]),
        ("version", &caps[2]),
    ]))
}

/// Bring a compiler version from any source into `{name, version}` form
///
/// Plain strings are parsed like `rustc --version` output; structured
/// values must carry a `name` and a `version` that reads as a version.
pub(crate) fn normalize(value: VersionValue) -> Result<VersionValue, ProbeError> {
    match value {
        VersionValue::Text(raw) => parse(&raw),
        structured @ VersionValue::Fields(_) => {
            if structured.field("name").is_none() || structured.semver().is_none() {
                return Err(ProbeError::Malformed {
                    value: structured.to_string(),
                    reason: "expected `name` and `version` fields".to_string(),
                });
            }
            Ok(structured)
        }
    }
}
