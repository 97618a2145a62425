//! Typed build failures
//!
//! Pipeline functions return `anyhow::Result`; these variants travel inside it
//! and can be recovered with `downcast_ref` when a caller needs to branch.

use crate::models::{AssetKind, Browser};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    /// A browser source tree declared in the configuration is absent
    #[error("source directory for {browser} not found: {path}")]
    MissingSource { browser: Browser, path: PathBuf },

    #[error("setup procedure not found: {path}")]
    SetupMissing { path: PathBuf },

    /// The setup procedure ran but did not exit cleanly
    #[error("setup procedure {path} exited with {status}")]
    SetupFailed { path: PathBuf, status: String },

    #[error("{kind} minifier at {url} answered HTTP {status}")]
    RemoteStatus {
        kind: AssetKind,
        url: String,
        status: u16,
    },

    /// The service answered 2xx with nothing usable; compile errors look like this
    #[error("{kind} minifier at {url} returned an empty payload")]
    EmptyPayload { kind: AssetKind, url: String },

    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}
