//! Fan-out of minified payloads into every target

use crate::models::{BrowserTarget, MinifiedPayload, WrittenFile};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Overwrite the destination for `payload.kind` in each target with the
/// payload. Writes are plain truncating writes, one target at a time.
pub fn write_payload(
    output_root: &Path,
    targets: &[BrowserTarget],
    payload: &MinifiedPayload,
) -> Result<Vec<WrittenFile>> {
    let mut written = Vec::with_capacity(targets.len());

    for target in targets {
        let path = output_root.join(target.destination(payload.kind));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, &payload.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("{} has been saved", path.display());

        written.push(WrittenFile {
            kind: payload.kind,
            browser: target.browser,
            path,
            bytes: payload.len(),
        });
    }

    Ok(written)
}
