//! Content source and fetch errors

use super::FolioError;

/// Creates a content directory not found error
pub fn not_found(path: impl Into<String>) -> FolioError {
    FolioError::ContentNotFound { path: path.into() }
}

/// Creates an invalid content URL error
pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::InvalidContentUrl {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a fetch failed error
pub fn fetch_failed(path: impl Into<String>, reason: impl Into<String>) -> FolioError {
    FolioError::FetchFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown collection error
pub fn unknown_collection(name: impl Into<String>) -> FolioError {
    FolioError::UnknownCollection { name: name.into() }
}
