//! Build script capturing the compiler version
//!
//! The remaining `FACEDETECT_*_VERSION` variables are supplied by the build
//! system and read with `option_env!`; this only makes cargo notice changes.

const BUILD_INPUTS: &[&str] = &[
    "FACEDETECT_MODULE_VERSION",
    "FACEDETECT_BLITZ_VERSION",
    "FACEDETECT_BOOST_VERSION",
    "FACEDETECT_PYTHON_VERSION",
    "FACEDETECT_NUMPY_ABI_VERSION",
    "FACEDETECT_NUMPY_API_VERSION",
    "FACEDETECT_HDF5_VERSION",
    "FACEDETECT_BOB_BLITZ_VERSION",
    "FACEDETECT_BOB_CORE_VERSION",
    "FACEDETECT_BOB_IO_BASE_VERSION",
    "FACEDETECT_BOB_IP_BASE_VERSION",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for var in BUILD_INPUTS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // Cargo hands build scripts the compiler it is going to use
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = std::process::Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    // Leave the variable unset when rustc can't be queried; the probe reports it
    if let Some(version) = version {
        println!("cargo:rustc-env=FACEDETECT_RUSTC_VERSION={version}");
    }
}
