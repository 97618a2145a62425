//! Browser target descriptors

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Firefox,
    Safari,
    Chrome,
}

impl Browser {
    /// File extension of the distributable archive for this browser
    pub fn archive_extension(&self) -> &'static str {
        match self {
            Browser::Firefox => "xpi",
            Browser::Safari | Browser::Chrome => "zip",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Browser::Firefox => "Firefox",
            Browser::Safari => "Safari",
            Browser::Chrome => "Chrome",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    Style,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Script => f.write_str("script"),
            AssetKind::Style => f.write_str("style"),
        }
    }
}

/// One browser package: where its sources live and where the minified
/// assets land inside the output root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrowserTarget {
    pub browser: Browser,
    /// Source tree, relative to the working path. Copied to the same
    /// relative location under the output root.
    pub source_dir: PathBuf,
    /// Script destination, relative to the output root
    pub script: PathBuf,
    /// Style destination, relative to the output root
    pub style: PathBuf,
}

impl BrowserTarget {
    pub fn new(
        browser: Browser,
        source_dir: impl Into<PathBuf>,
        script: impl Into<PathBuf>,
        style: impl Into<PathBuf>,
    ) -> Self {
        Self {
            browser,
            source_dir: source_dir.into(),
            script: script.into(),
            style: style.into(),
        }
    }

    pub fn destination(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Script => &self.script,
            AssetKind::Style => &self.style,
        }
    }
}

/// The three packages shipped by default, in copy order.
pub fn default_targets() -> Vec<BrowserTarget> {
    vec![
        BrowserTarget::new(
            Browser::Safari,
            "Safari.safariextension",
            "Safari.safariextension/js/script.js",
            "Safari.safariextension/res/style.css",
        ),
        BrowserTarget::new(Browser::Chrome, "Chrome", "Chrome/js/script.js", "Chrome/res/style.css"),
        BrowserTarget::new(
            Browser::Firefox,
            "Firefox",
            "Firefox/data/script.js",
            "Firefox/data/style.css",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Browser::Firefox, "xpi")]
    #[test_case(Browser::Safari, "zip")]
    #[test_case(Browser::Chrome, "zip")]
    fn test_archive_extension(browser: Browser, expected: &str) {
        assert_eq!(browser.archive_extension(), expected);
    }

    #[test]
    fn test_default_targets_live_under_their_source_dir() {
        let targets = default_targets();
        assert_eq!(targets.len(), 3);
        for target in &targets {
            assert!(target.script.starts_with(&target.source_dir));
            assert!(target.style.starts_with(&target.source_dir));
        }
    }

    #[test]
    fn test_destination_by_kind() {
        let target = &default_targets()[1];
        assert_eq!(target.destination(AssetKind::Script), Path::new("Chrome/js/script.js"));
        assert_eq!(target.destination(AssetKind::Style), Path::new("Chrome/res/style.css"));
    }
}
