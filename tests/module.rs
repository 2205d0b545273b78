use facedetect_version::config::MODULE_VERSION;
use facedetect_version::module::{self, Attribute};
use facedetect_version::version::probes::DEPENDENCY_LABELS;
use facedetect_version::version::{FixedProbe, ProbeError, VersionProbe, VersionValue};

fn fixed_probes() -> Vec<Box<dyn VersionProbe>> {
    vec![
        Box::new(FixedProbe::new("Blitz++", "1.2")),
        Box::new(FixedProbe::new("Boost", "1.70")),
        Box::new(FixedProbe::new(
            "Compiler",
            VersionValue::fields([("name", "rustc"), ("version", "1.82.0")]),
        )),
        Box::new(FixedProbe::new("Python", "2.7.6")),
        Box::new(FixedProbe::new(
            "NumPy",
            VersionValue::fields([("abi", "0x01000009"), ("api", "0x0000000D")]),
        )),
        Box::new(FixedProbe::new("HDF5", "1.8.12")),
        Box::new(FixedProbe::new("bob.blitz", "2.0.4")),
        Box::new(FixedProbe::new("bob.core", "2.0.4")),
        Box::new(FixedProbe::new("bob.io.base", "2.0.6")),
        Box::new(FixedProbe::new("bob.ip.base", "2.0.4")),
    ]
}

// The published module is process-wide, so the whole lifecycle is one test
#[test]
fn initialize_publishes_once_and_only_on_success() {
    assert!(module::loaded().is_none());

    let mut failing = fixed_probes();
    failing[5] = Box::new(FixedProbe::failing(
        "HDF5",
        ProbeError::Unavailable("FACEDETECT_HDF5_VERSION".to_string()),
    ));
    assert!(module::initialize_with(failing).is_err());
    assert!(module::loaded().is_none());

    let handle = module::initialize_with(fixed_probes()).unwrap();
    assert_eq!(handle.module(), MODULE_VERSION);
    assert_eq!(
        handle.externals().labels().collect::<Vec<_>>(),
        DEPENDENCY_LABELS
    );
    assert_eq!(
        handle.externals().get("HDF5"),
        Some(&VersionValue::text("1.8.12"))
    );

    // Later loads hand back the published module untouched
    let again = module::initialize_with(vec![Box::new(FixedProbe::new("Boost", "1.71"))]).unwrap();
    assert!(std::ptr::eq(handle, again));
    assert_eq!(module::loaded(), Some(handle));
    assert_eq!(
        again.attribute("externals"),
        Some(Attribute::Map(handle.externals()))
    );
    assert_eq!(
        module::initialize().unwrap().externals().get("Boost"),
        Some(&VersionValue::text("1.70"))
    );

    let reader = std::thread::spawn(|| module::loaded().cloned());
    assert_eq!(reader.join().unwrap().as_ref(), Some(handle));
}
