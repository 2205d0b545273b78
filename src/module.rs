//! Module initialization
//!
//! A host loads the module through [`initialize`], which builds the version
//! descriptor and publishes the resulting [`ModuleHandle`] once per process.
//! A failed load publishes nothing.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::{error, info};

use crate::config::{MODULE_DOC, MODULE_NAME, MODULE_VERSION, VersionManifest};
use crate::version::descriptor::{VersionDescriptorBuilder, VersionInfo};
use crate::version::error::DescriptorError;
use crate::version::probe::VersionProbe;
use crate::version::probes::{default_probes, manifest_probes};

/// Attribute holding the module's own version
pub const MODULE_ATTRIBUTE: &str = "module";

/// Attribute holding the dependency versions
pub const EXTERNALS_ATTRIBUTE: &str = "externals";

static LOADED: OnceLock<ModuleHandle> = OnceLock::new();

/// A loaded module: its own version plus the versions of its dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleHandle {
    #[serde(skip)]
    name: &'static str,
    #[serde(skip)]
    doc: &'static str,
    module: String,
    externals: VersionInfo,
}

/// Value of a module attribute as a host would read it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Attribute<'a> {
    Str(&'a str),
    Map(&'a VersionInfo),
}

impl ModuleHandle {
    /// Build the module with the build-supplied module version
    pub fn load(probes: Vec<Box<dyn VersionProbe>>) -> Result<Self, DescriptorError> {
        Self::load_versioned(MODULE_VERSION, probes)
    }

    /// Build the module with an explicit module version
    pub fn load_versioned(
        module_version: impl Into<String>,
        probes: Vec<Box<dyn VersionProbe>>,
    ) -> Result<Self, DescriptorError> {
        let externals = VersionDescriptorBuilder::new(probes).build()?;
        Ok(Self {
            name: MODULE_NAME,
            doc: MODULE_DOC,
            module: module_version.into(),
            externals,
        })
    }

    /// Build the module from a version manifest
    ///
    /// The manifest's `module` entry, when present, replaces the
    /// build-supplied module version.
    pub fn from_manifest(manifest: &VersionManifest) -> Result<Self, DescriptorError> {
        let probes = manifest_probes(manifest);
        match &manifest.module {
            Some(version) => Self::load_versioned(version.as_str(), probes),
            None => Self::load(probes),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn doc(&self) -> &'static str {
        self.doc
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn externals(&self) -> &VersionInfo {
        &self.externals
    }

    /// Look up an attribute by name, e.g. `module` or `externals`
    pub fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            MODULE_ATTRIBUTE => Some(Attribute::Str(&self.module)),
            EXTERNALS_ATTRIBUTE => Some(Attribute::Map(&self.externals)),
            _ => None,
        }
    }

    pub fn attribute_names() -> [&'static str; 2] {
        [MODULE_ATTRIBUTE, EXTERNALS_ATTRIBUTE]
    }
}

/// Load the module with the default probes and publish it
pub fn initialize() -> Result<&'static ModuleHandle, DescriptorError> {
    initialize_with(default_probes())
}

/// Load the module with the given probes and publish it
///
/// Once a module has been published, later calls return it as-is and the
/// probes are not queried.
pub fn initialize_with(
    probes: Vec<Box<dyn VersionProbe>>,
) -> Result<&'static ModuleHandle, DescriptorError> {
    if let Some(handle) = LOADED.get() {
        return Ok(handle);
    }

    match ModuleHandle::load(probes) {
        Ok(handle) => Ok(publish(handle)),
        Err(e) => {
            error!("Failed to load module {}: {}", MODULE_NAME, e);
            Err(e)
        }
    }
}

/// Publish an already built module
///
/// Returns the handle that ended up published, which is the earlier one if
/// another module was published first.
pub fn publish(handle: ModuleHandle) -> &'static ModuleHandle {
    let published = LOADED.get_or_init(|| handle);
    info!(
        "Loaded module {} {} ({} externals)",
        published.name,
        published.module,
        published.externals.len()
    );
    published
}

/// The published module, if loading has succeeded
pub fn loaded() -> Option<&'static ModuleHandle> {
    LOADED.get()
}
