//! Packaging of built browser trees

pub mod builder;

use crate::models::BrowserTarget;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Archive every target's tree under `output_root` next to it, e.g.
/// `gen/Firefox` becomes `gen/firefox.xpi`.
pub fn package_targets(output_root: &Path, targets: &[BrowserTarget]) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::with_capacity(targets.len());

    for target in targets {
        let tree = output_root.join(&target.source_dir);
        let archive = archive_path(output_root, target);
        let stored = builder::create_zip_from_directory(&tree, &archive)?;
        log::info!("Packaged {} ({} files) into {}", target.browser, stored, archive.display());
        archives.push(archive);
    }

    Ok(archives)
}

pub fn archive_path(output_root: &Path, target: &BrowserTarget) -> PathBuf {
    output_root.join(format!(
        "{}.{}",
        target.browser.to_string().to_lowercase(),
        target.browser.archive_extension()
    ))
}
