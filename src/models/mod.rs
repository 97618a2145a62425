//! Core data models for extension builds

pub mod target;
pub mod build;

pub use target::*;
pub use build::*;
