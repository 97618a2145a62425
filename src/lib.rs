//! Browser extension asset builder
//!
//! Copies the Firefox, Safari and Chrome source trees into a fresh output
//! directory, minifies the shared script and stylesheet through remote
//! services, and writes the results into every browser package.

pub mod config;
pub mod error;
pub mod minifier;
pub mod models;
pub mod packager;
pub mod resolver;
pub mod workspace;
pub mod writer;

pub use config::BuildConfig;
pub use error::BuildError;
pub use minifier::{HttpTransport, Transport, TransportResponse};
pub use models::{AssetKind, Browser, BrowserTarget, BuildResult, MinifiedPayload};
pub use resolver::resolve_working_path;

use anyhow::Result;
use std::path::Path;

/// Main entry point: build every browser package under `working_path`.
pub fn build_extensions(
    working_path: &Path,
    config: &BuildConfig,
    options: &BuildOptions,
    transport: &dyn Transport,
) -> Result<BuildResult> {
    let output_root = config.output_root(working_path);

    // 1. Clean output, run setup, copy trees
    let copied = workspace::prepare_workspace(working_path, config, options)?;

    // 2. Minify both assets before touching any destination
    let (script, style) = minifier::minify_sources(working_path, config, transport)?;

    // 3. Fan out into every target
    let mut written = writer::write_payload(&output_root, &config.targets, &script)?;
    written.extend(writer::write_payload(&output_root, &config.targets, &style)?);

    // 4. Optional archives
    let archives = if options.package {
        packager::package_targets(&output_root, &config.targets)?
    } else {
        Vec::new()
    };

    Ok(BuildResult {
        working_path: working_path.to_path_buf(),
        output_root,
        copied,
        written,
        archives,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Run `setup.sh` / `setup.bat` before copying
    pub run_setup: bool,
    /// Zip each built tree into a distributable archive
    pub package: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            run_setup: true,
            package: false,
        }
    }
}
