//! Content sources
//!
//! A content root is either a local directory or an http(s) base URL:
//! - Local directory paths: `content`, `./site/content`, `/srv/site/content`
//! - `file:///srv/site/content` - Local directory with file:// protocol
//! - `https://example.com/content/` - Deployed site serving the CMS content
//!
//! ## Module Organization
//!
//! - `location.rs`: ContentLocation enum and parsing
//! - `fs.rs`: FsSource reading files from a directory
//! - `http.rs`: HttpSource issuing one GET per file

pub mod fs;
pub mod http;
pub mod location;

pub use fs::FsSource;
pub use http::HttpSource;
pub use location::ContentLocation;

use std::path::{Component, Path};

use crate::error::{Result, content};

/// Where content files are fetched from.
///
/// `fetch` distinguishes an absent file (`Ok(None)`, like a 404 response) from a
/// request that failed outright (`Err`). Callers treat both as non-fatal.
pub trait ContentSource {
    /// Human-readable content root, used in logs and summaries
    fn location(&self) -> String;

    /// Fetch the text of a file relative to the content root
    fn fetch(&self, path: &str) -> Result<Option<String>>;
}

/// Open the content source for a location
pub fn open(location: &ContentLocation) -> Result<Box<dyn ContentSource>> {
    match location {
        ContentLocation::Dir(path) => Ok(Box::new(FsSource::new(path)?)),
        ContentLocation::Url(url) => Ok(Box::new(HttpSource::new(url)?)),
    }
}

/// Reject paths that would resolve outside the content root.
///
/// Paths are relative and `/`-separated. Parent and root components are
/// refused, and so are backslashes and a `scheme:` prefix, which a URL base
/// would otherwise resolve against another directory or host.
pub(crate) fn ensure_relative(path: &str) -> Result<()> {
    let escapes = path.contains('\\')
        || path.split('/').next().is_some_and(|first| first.contains(':'))
        || Path::new(path)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(content::fetch_failed(
            path,
            "path must stay inside the content directory",
        ));
    }
    Ok(())
}
