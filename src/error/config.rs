//! Configuration errors

use super::FolioError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
