use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::version::value::VersionValue;

/// Name the module is registered under by the host
pub const MODULE_NAME: &str = "bob.ip.facedetect.version";

/// Docstring attached to the module
pub const MODULE_DOC: &str = "Information about software used to compile the C++ Bob API";

/// Version of this module as supplied by the build, falling back to the crate version
pub const MODULE_VERSION: &str = match option_env!("FACEDETECT_MODULE_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "FACEDETECT_LOG";

/// Log filter used when `FACEDETECT_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read version manifest {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse version manifest {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Version manifest written by the build system
///
/// ```json
/// {
///   "module": "2.0.1",
///   "externals": {
///     "Blitz++": "0.10",
///     "NumPy": { "abi": "0x01000009", "api": "0x0000000D" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VersionManifest {
    /// Overrides the build-supplied module version when present
    pub module: Option<String>,
    pub externals: IndexMap<String, VersionValue>,
}

impl VersionManifest {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for facedetect-version.
/// Uses $XDG_DATA_HOME/facedetect-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/facedetect-version,
/// or ./facedetect-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("facedetect-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("facedetect-version")
}
