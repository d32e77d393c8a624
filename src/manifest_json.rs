//! icons.json data model for the WebExtension manifest `icons` key
//!
//! This module defines the data structure that mirrors the `icons` object of
//! a WebExtension manifest.json, mapping pixel sizes to icon filenames. The
//! written fragment can be pasted into (or merged with) the extension's
//! manifest during development.

use crate::icon_gen::icon_filename;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The `icons` fragment of a WebExtension manifest.
///
/// Keys are pixel sizes, values are paths relative to the manifest. A
/// `BTreeMap` keeps the serialized object ordered by size.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconsManifest {
    /// Size-to-filename entries, serialized with string keys as the
    /// manifest schema requires.
    pub icons: BTreeMap<u32, String>,
}

impl IconsManifest {
    /// Creates an empty manifest fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry for one icon size.
    pub fn add_icon(&mut self, size: u32, filename: String) {
        self.icons.insert(size, filename);
    }
}

/// Writes an icons.json fragment covering the given sizes to `dir`.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_icons_json(dir: &Path, sizes: &[u32]) -> Result<()> {
    let mut manifest = IconsManifest::new();
    for &size in sizes {
        manifest.add_icon(size, icon_filename(size));
    }

    let json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize icons.json")?;
    std::fs::write(dir.join("icons.json"), json).context("Failed to write icons.json")?;

    println!("Created icons.json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_creation() {
        let manifest = IconsManifest::new();
        assert!(manifest.icons.is_empty());
    }

    #[test]
    fn test_add_icon() {
        let mut manifest = IconsManifest::new();
        manifest.add_icon(16, "icon16.png".to_string());
        manifest.add_icon(128, "icon128.png".to_string());

        assert_eq!(manifest.icons.len(), 2);
        assert_eq!(manifest.icons[&16], "icon16.png");
    }

    #[test]
    fn test_serialization_orders_by_size() {
        let mut manifest = IconsManifest::new();
        manifest.add_icon(128, "icon128.png".to_string());
        manifest.add_icon(16, "icon16.png".to_string());
        manifest.add_icon(48, "icon48.png".to_string());
        manifest.add_icon(32, "icon32.png".to_string());

        let json = serde_json::to_string(&manifest).unwrap();
        let pos = |needle: &str| json.find(needle).unwrap();
        assert!(pos("\"16\"") < pos("\"32\""));
        assert!(pos("\"32\"") < pos("\"48\""));
        assert!(pos("\"48\"") < pos("\"128\""));
    }

    #[test]
    fn test_write_icons_json() {
        let temp_dir = TempDir::new().unwrap();

        write_icons_json(temp_dir.path(), &[16, 32, 48, 128]).unwrap();

        let contents_path = temp_dir.path().join("icons.json");
        assert!(contents_path.exists());

        let file_content = std::fs::read_to_string(&contents_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&file_content)
            .expect("icons.json should contain valid JSON");

        assert!(parsed["icons"].is_object());
        assert_eq!(parsed["icons"]["16"], "icon16.png");
        assert_eq!(parsed["icons"]["32"], "icon32.png");
        assert_eq!(parsed["icons"]["48"], "icon48.png");
        assert_eq!(parsed["icons"]["128"], "icon128.png");
    }
}
