//! Distributable archive builder

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Zip the contents of `source_dir` into `zip_path`. Entry names are relative
/// to `source_dir` with `/` separators. Returns the number of files stored.
pub fn create_zip_from_directory(source_dir: &Path, zip_path: &Path) -> Result<usize> {
    let file = File::create(zip_path)
        .with_context(|| format!("Failed to create {}", zip_path.display()))?;
    let mut zip = ZipWriter::new(file);

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut stored = 0;
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", source_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(source_dir)
            .context("Failed to get relative path")?;
        let name = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(name, options)?;
        let content = fs::read(entry.path())?;
        zip.write_all(&content)?;
        stored += 1;
    }

    zip.finish()?;
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn test_zip_uses_relative_forward_slash_names() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("Chrome");
        fs::create_dir_all(source.join("js")).unwrap();
        fs::write(source.join("manifest.json"), "{}").unwrap();
        fs::write(source.join("js/script.js"), "x();").unwrap();

        let zip_path = temp_dir.path().join("chrome.zip");
        let stored = create_zip_from_directory(&source, &zip_path).unwrap();
        assert_eq!(stored, 2);

        let mut archive = ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        assert_eq!(names, vec!["js/script.js", "manifest.json"]);

        let mut entry = archive.by_name("js/script.js").unwrap();
        let mut content = String::new();
        std::io::Read::read_to_string(&mut entry, &mut content).unwrap();
        assert_eq!(content, "x();");
    }
}
