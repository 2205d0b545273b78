use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use facedetect_version::config::{VersionManifest, log_path};
use facedetect_version::module::{self, ModuleHandle};

#[derive(Parser)]
#[command(name = "facedetect-version")]
#[command(
    version,
    about = "Report the versions of the libraries the face detection extension was built against"
)]
struct Cli {
    /// Read versions from a manifest instead of the values captured at build time
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only this module attribute
    #[arg(long, value_parser = ModuleHandle::attribute_names())]
    attribute: Option<String>,

    /// Write logs to a file instead of stderr (defaults to the data directory)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = cli.log_file.clone().map(|path| path.unwrap_or_else(log_path));
    let _guard = facedetect_version::logging::init(log_file.as_deref())?;

    let handle = match &cli.manifest {
        None => module::initialize().context("Failed to load module")?,
        Some(path) => {
            let manifest = VersionManifest::load(path)?;
            let handle = ModuleHandle::from_manifest(&manifest).context("Failed to load module")?;
            module::publish(handle)
        }
    };

    let output = match (&cli.attribute, cli.format) {
        (None, Format::Text) => facedetect_version::render::text(handle),
        (None, Format::Json) => serde_json::to_string_pretty(handle)?,
        (Some(name), format) => {
            let attribute = handle
                .attribute(name)
                .with_context(|| format!("Unknown attribute: {name}"))?;
            match format {
                Format::Text => facedetect_version::render::attribute_text(attribute),
                Format::Json => serde_json::to_string_pretty(&attribute)?,
            }
        }
    };
    println!("{output}");

    Ok(())
}

