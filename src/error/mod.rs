//! Error types and handling for Folio
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`content`]: Content source and fetch errors
//! - [`manifest`]: Manifest errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod content;
pub mod fs;
pub mod manifest;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Diagnostic, Debug)]
pub enum FolioError {
    // Content errors
    #[error("Content directory not found: {path}")]
    #[diagnostic(
        code(folio::content::not_found),
        help("Pass --content or set `content` in folio.yaml to the CMS content folder")
    )]
    ContentNotFound { path: String },

    #[error("Invalid content URL: {url}: {reason}")]
    #[diagnostic(
        code(folio::content::invalid_url),
        help("Remote content must be an absolute http:// or https:// URL")
    )]
    InvalidContentUrl { url: String, reason: String },

    #[error("Failed to fetch {path}: {reason}")]
    #[diagnostic(code(folio::content::fetch_failed))]
    FetchFailed { path: String, reason: String },

    #[error("Unknown collection: {name}")]
    #[diagnostic(
        code(folio::content::unknown_collection),
        help("Known collections: education, skills, projects, publications, podcasts, videos, awards")
    )]
    UnknownCollection { name: String },

    // Manifest errors
    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(folio::manifest::parse_failed),
        help("The manifest is a JSON object mapping collection names to lists of file names")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Manifest is out of date: {path}")]
    #[diagnostic(
        code(folio::manifest::outdated),
        help("Run 'folio manifest' without --check to regenerate it")
    )]
    ManifestOutdated { path: String },

    #[error("Manifest generation requires a local content directory, got: {location}")]
    #[diagnostic(code(folio::manifest::remote_content))]
    ManifestRequiresDirectory { location: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(folio::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(folio::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(folio::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(folio::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(folio::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(folio::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(folio::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FolioError {
    fn from(err: serde_yaml::Error) -> Self {
        FolioError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        FolioError::FetchFailed {
            path: err
                .url()
                .map_or_else(|| "unknown".to_string(), ToString::to_string),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FolioError>;
