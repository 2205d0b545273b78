//! Reports the versions of the libraries the face detection extension was
//! built against.
//!
//! - [`version`]: probes, version values and descriptor construction
//! - [`module`]: module initialization and the published `module` / `externals`
//! - [`config`]: build-supplied constants, version manifest and paths
//! - [`logging`]: subscriber setup for the command line tool
//! - [`render`]: plain text output

pub mod config;
pub mod logging;
pub mod module;
pub mod render;
pub mod version;
