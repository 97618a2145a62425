//! Recursive directory copy

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copy `source` into `dest`, preserving the relative layout and file bytes.
/// Returns the number of files copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        let relative_path = entry
            .path()
            .strip_prefix(source)
            .context("Failed to get relative path")?;
        let target = dest.join(relative_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy {} to {}", entry.path().display(), target.display())
            })?;
            log::debug!("copied {}", relative_path.display());
            copied += 1;
        }
    }

    Ok(copied)
}
