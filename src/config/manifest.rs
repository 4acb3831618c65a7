//! Collection manifest (content/manifest.json)
//!
//! A flat JSON object mapping each collection name to the file names of its
//! entries, e.g. `{"projects": ["folio.md", "parser.md"]}`. The CMS cannot list
//! directories over HTTP, so the manifest is what tells a load which files exist.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::warn;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::common::fs::write_atomic;
use crate::domain::Collection;
use crate::error::{FolioError, Result, manifest};

/// Manifest file name inside the content root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Pattern for entry files inside a collection folder
const ENTRY_PATTERN: &str = "*.md";

/// Collection manifest
///
/// Reading is lenient per key: a collection whose value is not a list of file
/// names is treated as empty, and keys that name no collection are kept as
/// they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<Collection, Vec<String>>,
    unknown: BTreeMap<String, Value>,
}

impl Manifest {
    /// Parse a manifest; `origin` names the manifest in error messages
    ///
    /// Only a document that is not a JSON object fails.
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        let raw: BTreeMap<String, Value> =
            serde_json::from_str(json).map_err(|e| manifest::parse_failed(origin, e.to_string()))?;

        let mut result = Self::default();
        for (key, value) in raw {
            match Collection::ALL.into_iter().find(|c| c.as_str() == key) {
                Some(collection) => {
                    result
                        .entries
                        .insert(collection, file_list(&key, value, origin));
                }
                None => {
                    result.unknown.insert(key, value);
                }
            }
        }
        Ok(result)
    }

    /// Serialize as pretty JSON with a trailing newline
    ///
    /// Keys are written in sorted order, unknown keys included.
    pub fn to_json(&self) -> Result<String> {
        let mut object: BTreeMap<&str, Value> = self
            .unknown
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        for (collection, files) in &self.entries {
            object.insert(collection.as_str(), Value::from(files.clone()));
        }

        let mut json = serde_json::to_string_pretty(&object)?;
        json.push('\n');
        Ok(json)
    }

    /// Write `manifest.json` into the content directory
    pub fn write(&self, content_dir: &Path) -> Result<()> {
        write_atomic(&content_dir.join(MANIFEST_FILE), &self.to_json()?)
    }

    /// Entry file names listed for a collection
    pub fn files(&self, collection: Collection) -> &[String] {
        self.entries.get(&collection).map_or(&[], Vec::as_slice)
    }

    /// Replace the entry list of a collection
    pub fn set(&mut self, collection: Collection, files: Vec<String>) {
        self.entries.insert(collection, files);
    }

    /// Keys that do not name a known collection
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    /// Whether both manifests list the same files for every one of `collections`
    pub fn lists_match(&self, other: &Manifest, collections: &[Collection]) -> bool {
        collections
            .iter()
            .all(|c| self.files(*c) == other.files(*c))
    }

    /// Number of entries across all known collections
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Build a manifest from the `*.md` files directly inside each collection folder
    ///
    /// Folders that do not exist produce an empty list, so every requested
    /// collection appears in the result.
    pub fn scan(content_dir: &Path, collections: &[Collection]) -> Result<Self> {
        let glob = Glob::new(ENTRY_PATTERN).map_err(|e| FolioError::IoError {
            message: format!("Invalid entry pattern '{}': {}", ENTRY_PATTERN, e),
        })?;

        let mut result = Self::default();
        for &collection in collections {
            let dir = content_dir.join(collection.as_str());
            let files = if dir.is_dir() {
                scan_folder(&dir, &glob)?
            } else {
                Vec::new()
            };
            result.set(collection, files);
        }
        Ok(result)
    }
}

/// File names of one collection; anything but a list of strings counts as empty
fn file_list(key: &str, value: Value, origin: &str) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(file) => Some(file),
                other => {
                    warn!("Ignoring non-string entry {} under '{}' in {}", other, key, origin);
                    None
                }
            })
            .collect(),
        Value::Null => {
            warn!("Collection '{}' in {} is null, treating it as empty", key, origin);
            Vec::new()
        }
        other => {
            warn!(
                "Collection '{}' in {} is not a list ({}), treating it as empty",
                key, origin, other
            );
            Vec::new()
        }
    }
}

fn scan_folder(dir: &Path, glob: &Glob<'_>) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| FolioError::IoError {
            message: format!("Failed to scan {}: {}", dir.display(), e),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        if glob.matched(&CandidatePath::from(&*name)).is_some() {
            files.push(name.into_owned());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_json() {
        let manifest = Manifest::from_json(
            r#"{"education": ["phd.md", "bsc.md"], "skills": []}"#,
            MANIFEST_FILE,
        )
        .unwrap();
        assert_eq!(manifest.files(Collection::Education), ["phd.md", "bsc.md"]);
        assert!(manifest.files(Collection::Skills).is_empty());
        assert!(manifest.files(Collection::Awards).is_empty());
        assert_eq!(manifest.total(), 2);
    }

    #[test]
    fn test_from_json_requires_object() {
        let err = Manifest::from_json(r#"["phd.md"]"#, "content/manifest.json").unwrap_err();
        assert!(matches!(err, FolioError::ManifestParseFailed { .. }));
        assert!(err.to_string().contains("content/manifest.json"));
    }

    #[test]
    fn test_malformed_collections_are_empty() {
        let manifest = Manifest::from_json(
            r#"{"education": "phd.md", "awards": null, "skills": ["rust.md", 3]}"#,
            MANIFEST_FILE,
        )
        .unwrap();
        assert!(manifest.files(Collection::Education).is_empty());
        assert!(manifest.files(Collection::Awards).is_empty());
        assert_eq!(manifest.files(Collection::Skills), ["rust.md"]);
    }

    #[test]
    fn test_unknown_keys_of_any_shape_kept() {
        let manifest = Manifest::from_json(
            r#"{"_meta": {"generated": "2024-01-01"}, "skills": ["rust.md"]}"#,
            MANIFEST_FILE,
        )
        .unwrap();
        assert_eq!(manifest.unknown_keys().collect::<Vec<_>>(), vec!["_meta"]);
        assert_eq!(manifest.files(Collection::Skills), ["rust.md"]);
        assert_eq!(
            manifest.to_json().unwrap(),
            "{\n  \"_meta\": {\n    \"generated\": \"2024-01-01\"\n  },\n  \"skills\": [\n    \"rust.md\"\n  ]\n}\n"
        );
    }

    #[test]
    fn test_lists_match_ignores_other_collections() {
        let mut scanned = Manifest::default();
        scanned.set(Collection::Skills, vec!["rust.md".to_string()]);
        let on_disk = Manifest::from_json(
            r#"{"skills": ["rust.md"], "awards": ["medal.md"], "notes": 1}"#,
            MANIFEST_FILE,
        )
        .unwrap();

        assert!(scanned.lists_match(&on_disk, &[Collection::Skills]));
        assert!(!scanned.lists_match(&on_disk, &Collection::ALL));
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let manifest =
            Manifest::from_json(r#"{"recipes": ["soup.md"], "videos": []}"#, MANIFEST_FILE)
                .unwrap();
        assert_eq!(manifest.unknown_keys().collect::<Vec<_>>(), vec!["recipes"]);
        assert!(manifest.to_json().unwrap().contains("soup.md"));
        assert_eq!(manifest.total(), 0);
    }

    #[test]
    fn test_to_json_is_pretty() {
        let mut manifest = Manifest::default();
        manifest.set(Collection::Skills, vec!["rust.md".to_string()]);
        assert_eq!(
            manifest.to_json().unwrap(),
            "{\n  \"skills\": [\n    \"rust.md\"\n  ]\n}\n"
        );
    }

    #[test]
    fn test_scan_sorts_and_filters() {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        std::fs::create_dir_all(projects.join("drafts")).unwrap();
        std::fs::write(projects.join("zeta.md"), "---\n---\n").unwrap();
        std::fs::write(projects.join("alpha.md"), "---\n---\n").unwrap();
        std::fs::write(projects.join("notes.txt"), "not content").unwrap();
        std::fs::write(projects.join(".hidden.md"), "---\n---\n").unwrap();
        std::fs::write(projects.join("drafts/nested.md"), "---\n---\n").unwrap();

        let manifest = Manifest::scan(temp.path(), &Collection::ALL).unwrap();
        assert_eq!(manifest.files(Collection::Projects), ["alpha.md", "zeta.md"]);
        assert!(manifest.files(Collection::Awards).is_empty());
        assert!(manifest.to_json().unwrap().contains("\"awards\": []"));
    }

    #[test]
    fn test_write_into_content_dir() {
        let temp = TempDir::new().unwrap();
        let mut manifest = Manifest::default();
        manifest.set(Collection::Awards, vec!["medal.md".to_string()]);
        manifest.write(temp.path()).unwrap();

        let written = std::fs::read_to_string(temp.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(Manifest::from_json(&written, MANIFEST_FILE).unwrap(), manifest);
    }

    #[test]
    fn test_scan_only_requested_collections() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::scan(temp.path(), &[Collection::Skills]).unwrap();
        assert_eq!(manifest.to_json().unwrap(), "{\n  \"skills\": []\n}\n");
    }
}
