//! Local directory content source

use std::io::ErrorKind;
use std::path::PathBuf;

use super::{ContentSource, ensure_relative};
use crate::error::{Result, content};

/// Reads content files from a local directory
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Open a content directory; the directory must exist
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(content::not_found(root.display().to_string()));
        }
        Ok(Self { root })
    }
}

impl ContentSource for FsSource {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn fetch(&self, path: &str) -> Result<Option<String>> {
        ensure_relative(path)?;
        match std::fs::read_to_string(self.root.join(path)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(content::fetch_failed(path, e.to_string())),
        }
    }
}
