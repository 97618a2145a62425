//! Working path resolution

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolve the project root a build operates on.
///
/// An explicit path becomes the process working directory so that the setup
/// procedure and relative paths behave as if the tool had been started there.
/// Without one, the current directory is used as-is.
pub fn resolve_working_path(arg: Option<&Path>) -> Result<PathBuf> {
    match arg {
        Some(path) => {
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                env::current_dir()
                    .context("Failed to read current directory")?
                    .join(path)
            };
            env::set_current_dir(&absolute)
                .with_context(|| format!("Failed to enter {}", absolute.display()))?;
            Ok(absolute)
        }
        None => {
            log::info!("No path defined, using current working directory");
            env::current_dir().context("Failed to read current directory")
        }
    }
}
