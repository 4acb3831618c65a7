//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{FolioError, Result};
use crate::source::ContentLocation;

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| FolioError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}

/// Load the project configuration with the `--content` override applied
pub fn load_config(project: &Path, content: Option<String>) -> Result<SiteConfig> {
    Ok(SiteConfig::load(project)?.with_overrides(content, None))
}

/// Content root of a configuration, relative directories resolved against the project
pub fn content_location(project: &Path, config: &SiteConfig) -> ContentLocation {
    ContentLocation::parse(&config.content, project)
}
