//! Payloads and build results

use super::{AssetKind, Browser};
use std::path::PathBuf;

/// Minified text returned by a remote service for one asset kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifiedPayload {
    pub kind: AssetKind,
    pub content: String,
}

impl MinifiedPayload {
    pub fn new(kind: AssetKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub kind: AssetKind,
    pub browser: Browser,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct BuildResult {
    pub working_path: PathBuf,
    pub output_root: PathBuf,
    pub copied: Vec<Browser>,
    pub written: Vec<WrittenFile>,
    pub archives: Vec<PathBuf>,
}

impl BuildResult {
    pub fn written_of(&self, kind: AssetKind) -> impl Iterator<Item = &WrittenFile> {
        self.written.iter().filter(move |w| w.kind == kind)
    }
}
