//! Build configuration
//!
//! Everything the pipeline needs to know about targets, sources and remote
//! services lives in [`BuildConfig`]. Defaults reproduce the stock layout; a
//! `extbuild.toml` at the working path overrides any subset of it.

use crate::error::BuildError;
use crate::models::{default_targets, BrowserTarget};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "extbuild.toml";

pub const DEFAULT_SCRIPT_ENDPOINT: &str = "http://closure-compiler.appspot.com/compile";
pub const DEFAULT_STYLE_ENDPOINT: &str = "http://reducisaurus.appspot.com/css";
pub const DEFAULT_COMPILATION_LEVEL: &str = "SIMPLE_OPTIMIZATIONS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Output root, relative to the working path
    pub output_dir: PathBuf,
    pub sources: SourceFiles,
    pub endpoints: Endpoints,
    pub targets: Vec<BrowserTarget>,
}

/// Canonical, unminified sources, relative to the working path
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceFiles {
    pub script: PathBuf,
    pub style: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
    pub script: String,
    pub style: String,
    pub compilation_level: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("gen"),
            sources: SourceFiles::default(),
            endpoints: Endpoints::default(),
            targets: default_targets(),
        }
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            script: PathBuf::from("lib/script.js"),
            style: PathBuf::from("res/style.css"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            script: DEFAULT_SCRIPT_ENDPOINT.to_string(),
            style: DEFAULT_STYLE_ENDPOINT.to_string(),
            compilation_level: DEFAULT_COMPILATION_LEVEL.to_string(),
        }
    }
}

impl BuildConfig {
    /// Parse a configuration file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: BuildConfig = toml::from_str(&content).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load `extbuild.toml` from the working path, or use defaults if there is none.
    pub fn load_or_default(working_path: &Path) -> Result<Self> {
        let path = working_path.join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("Loading configuration from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn output_root(&self, working_path: &Path) -> PathBuf {
        working_path.join(&self.output_dir)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: String| BuildError::Config {
            path: path.to_path_buf(),
            message,
        };

        if self.targets.is_empty() {
            return Err(invalid("at least one target is required".to_string()).into());
        }
        // `gen` is erased on every run, so it must name a real subdirectory
        if !self
            .output_dir
            .components()
            .any(|c| matches!(c, Component::Normal(_)))
        {
            return Err(invalid("output_dir must name a subdirectory".to_string()).into());
        }
        check_contained("output_dir", &self.output_dir).map_err(invalid)?;

        for target in &self.targets {
            check_contained("source_dir", &target.source_dir).map_err(invalid)?;
            check_contained("script", &target.script).map_err(invalid)?;
            check_contained("style", &target.style).map_err(invalid)?;

            if self.output_dir.starts_with(&target.source_dir) {
                return Err(invalid(format!(
                    "output_dir {} must not live inside {}",
                    self.output_dir.display(),
                    target.source_dir.display()
                ))
                .into());
            }
            if !target.script.starts_with(&target.source_dir)
                || !target.style.starts_with(&target.source_dir)
            {
                return Err(invalid(format!(
                    "{} destinations must live under {}",
                    target.browser,
                    target.source_dir.display()
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Configured paths are joined onto the working path or the output root and
/// must stay below it: relative, with no root, prefix or `..` components.
fn check_contained(field: &str, path: &Path) -> std::result::Result<(), String> {
    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(format!(
            "{} {} must be a relative path without '..'",
            field,
            path.display()
        ));
    }
    Ok(())
}
