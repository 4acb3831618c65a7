//! Content root parsing

use std::fmt;
use std::path::{Path, PathBuf};

/// A parsed content root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    /// Local content directory
    Dir(PathBuf),
    /// Remote base URL
    Url(String),
}

impl ContentLocation {
    /// Parse a content root, resolving relative directories against `base`
    ///
    /// Anything with a `scheme://` prefix other than `file://` is treated as a URL;
    /// unsupported schemes are rejected when the source is opened.
    pub fn parse(input: &str, base: &Path) -> Self {
        let input = input.trim();

        if let Some(path) = input.strip_prefix("file://") {
            return ContentLocation::Dir(PathBuf::from(path));
        }

        if input.contains("://") {
            return ContentLocation::Url(input.to_string());
        }

        let path = Path::new(input);
        if path.is_absolute() {
            ContentLocation::Dir(path.to_path_buf())
        } else {
            ContentLocation::Dir(base.join(path))
        }
    }

    /// Local directory, if this is not a remote location
    pub fn as_dir(&self) -> Option<&Path> {
        match self {
            ContentLocation::Dir(path) => Some(path),
            ContentLocation::Url(_) => None,
        }
    }
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLocation::Dir(path) => write!(f, "{}", path.display()),
            ContentLocation::Url(url) => f.write_str(url),
        }
    }
}
