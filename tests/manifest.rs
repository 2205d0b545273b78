use std::io::Write;

use facedetect_version::config::VersionManifest;
use facedetect_version::module::ModuleHandle;
use facedetect_version::version::probes::{DEPENDENCY_LABELS, manifest_probes};
use facedetect_version::version::{DescriptorError, ProbeError, VersionValue};
use tempfile::NamedTempFile;

const FULL_MANIFEST: &str = r#"{
  "module": "2.0.1",
  "externals": {
    "bob.ip.base": "2.0.4",
    "bob.io.base": "2.0.6",
    "bob.core": "2.0.4",
    "bob.blitz": "2.0.4",
    "HDF5": "1.8.12",
    "NumPy": { "abi": "0x01000009", "api": "0x0000000D" },
    "Python": "2.7.6",
    "Compiler": { "name": "gcc", "version": "4.8.4" },
    "Boost": "1.55.0",
    "Blitz++": "0.10",
    "OpenCV": "3.1.0"
  }
}"#;

fn write_manifest(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_from_manifest_reports_fixed_dependencies_in_order() {
    let file = write_manifest(FULL_MANIFEST);
    let manifest = VersionManifest::load(file.path()).unwrap();

    let handle = ModuleHandle::load(manifest_probes(&manifest)).unwrap();

    let labels: Vec<_> = handle.externals().labels().collect();
    assert_eq!(labels, DEPENDENCY_LABELS);
    assert!(!handle.externals().contains("OpenCV"));
    assert_eq!(
        handle.externals().get("Compiler").and_then(VersionValue::semver),
        Some(semver::Version::new(4, 8, 4))
    );
}

#[test]
fn load_from_manifest_serializes_like_the_host_sees_it() {
    let file = write_manifest(FULL_MANIFEST);
    let manifest = VersionManifest::load(file.path()).unwrap();

    let handle = ModuleHandle::from_manifest(&manifest).unwrap();
    let json = serde_json::to_string(&handle).unwrap();

    assert!(json.starts_with(r#"{"module":"2.0.1","externals":{"Blitz++":"0.10","Boost":"1.55.0","#));
    assert!(json.contains(r#""NumPy":{"abi":"0x01000009","api":"0x0000000D"}"#));
}

#[test]
fn load_from_incomplete_manifest_fails() {
    let file = write_manifest(r#"{"externals": {"Blitz++": "0.10", "Boost": "1.55.0"}}"#);
    let manifest = VersionManifest::load(file.path()).unwrap();

    let result = ModuleHandle::load(manifest_probes(&manifest));

    assert_eq!(
        result,
        Err(DescriptorError::Retrieval {
            label: "Compiler".to_string(),
            source: ProbeError::Unavailable("Compiler in version manifest".to_string()),
        })
    );
}
