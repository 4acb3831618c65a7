//! Manifest errors

use super::FolioError;

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest outdated error
pub fn outdated(path: impl Into<String>) -> FolioError {
    FolioError::ManifestOutdated { path: path.into() }
}
