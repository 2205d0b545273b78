//! Version reporting layer
//!
//! Collects the versions of the libraries the extension was built against.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Probes   │────▶│  Descriptor │────▶│ VersionInfo │
//! │ (retrieve)  │     │   (build)   │     │ (read-only) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`probe`]: Probe trait for retrieving one dependency version
//! - [`probes`]: Concrete probes and the fixed dependency list
//! - [`descriptor`]: All-or-nothing construction of `VersionInfo`
//! - [`value`]: Plain and structured version values
//! - [`error`]: Error types for probes and descriptor construction

pub mod descriptor;
pub mod error;
pub mod probe;
pub mod probes;
pub mod value;

pub use descriptor::{VersionDescriptorBuilder, VersionInfo};
pub use error::{DescriptorError, ProbeError};
pub use probe::{FixedProbe, VersionProbe};
pub use value::VersionValue;
