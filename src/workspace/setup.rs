//! Platform setup procedure
//!
//! Projects ship a `setup.sh` (or `setup.bat` on Windows) that hardlinks shared
//! libraries and resources into each browser tree. It has to finish before the
//! trees are copied.

use crate::error::BuildError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(windows)]
pub const SETUP_SCRIPT: &str = "setup.bat";
#[cfg(not(windows))]
pub const SETUP_SCRIPT: &str = "setup.sh";

pub fn setup_script_path(working_path: &Path) -> PathBuf {
    working_path.join(SETUP_SCRIPT)
}

/// Interpreter and optional single argument named by a `#!` line, split the
/// way the kernel does.
#[cfg_attr(windows, allow(dead_code))]
fn parse_shebang(first_line: &str) -> Option<(String, Option<String>)> {
    let rest = first_line.strip_prefix("#!")?.trim();
    if rest.is_empty() {
        return None;
    }
    match rest.split_once(char::is_whitespace) {
        Some((interpreter, arg)) => Some((interpreter.to_string(), Some(arg.trim().to_string()))),
        None => Some((rest.to_string(), None)),
    }
}

#[cfg(windows)]
fn setup_command(script: &Path) -> Result<Command> {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(script);
    Ok(cmd)
}

/// `setup.sh` runs under its own `#!` interpreter, or POSIX `sh` when it has
/// none. The execute bit is not required.
#[cfg(not(windows))]
fn setup_command(script: &Path) -> Result<Command> {
    let content = std::fs::read_to_string(script)
        .with_context(|| format!("Failed to read {}", script.display()))?;
    let first_line = content.lines().next().unwrap_or_default();

    let mut cmd = match parse_shebang(first_line) {
        Some((interpreter, arg)) => {
            let mut cmd = Command::new(interpreter);
            cmd.args(arg);
            cmd
        }
        None => Command::new("sh"),
    };
    cmd.arg(script);
    Ok(cmd)
}

/// Run the setup procedure in `working_path` and wait for it.
pub fn run_setup(working_path: &Path) -> Result<()> {
    let script = setup_script_path(working_path);
    if !script.is_file() {
        return Err(BuildError::SetupMissing { path: script }.into());
    }

    let status = setup_command(&script)?
        .current_dir(working_path)
        .status()
        .with_context(|| format!("Failed to launch {}", script.display()))?;

    if !status.success() {
        return Err(BuildError::SetupFailed {
            path: script,
            status: status.to_string(),
        }
        .into());
    }

    Ok(())
}
