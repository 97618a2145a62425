//! Output workspace preparation

pub mod copy;
pub mod setup;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::models::Browser;
use crate::BuildOptions;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Rebuild the output root from scratch and fill it with every target's
/// source tree. Returns the browsers copied, in copy order.
///
/// Nothing is rolled back on failure; the output root may be left half built.
pub fn prepare_workspace(
    working_path: &Path,
    config: &BuildConfig,
    options: &BuildOptions,
) -> Result<Vec<Browser>> {
    let output_root = config.output_root(working_path);

    if output_root.exists() {
        log::info!("{} already exists: erasing", output_root.display());
        fs::remove_dir_all(&output_root)
            .with_context(|| format!("Failed to remove {}", output_root.display()))?;
    }

    if options.run_setup {
        log::info!("Ensuring that all required libraries and resources are hardlinked");
        setup::run_setup(working_path)?;
    }

    log::info!("Generating {}", output_root.display());
    fs::create_dir_all(&output_root)
        .with_context(|| format!("Failed to create {}", output_root.display()))?;

    let mut copied = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let source = working_path.join(&target.source_dir);
        if !source.is_dir() {
            return Err(BuildError::MissingSource {
                browser: target.browser,
                path: source,
            }
            .into());
        }

        log::info!("Copying {} files", target.browser);
        let count = copy::copy_tree(&source, &output_root.join(&target.source_dir))?;
        log::debug!("{} files copied for {}", count, target.browser);
        copied.push(target.browser);
    }

    Ok(copied)
}
