//! Remote content source
//!
//! Fetches content from a deployed site with one GET request per file.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use super::{ContentSource, ensure_relative};
use crate::error::{Result, content};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches content files over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    /// Create a source rooted at `base`
    ///
    /// The base is treated as a directory even without a trailing slash, so
    /// `https://example.com/content` fetches `https://example.com/content/hero.md`.
    pub fn new(base: &str) -> Result<Self> {
        let mut url = Url::parse(base).map_err(|e| content::invalid_url(base, e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(content::invalid_url(
                base,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base: url, client })
    }

    /// Absolute URL of a content file, always below the base
    pub fn url_for(&self, path: &str) -> Result<Url> {
        ensure_relative(path)?;
        self.base
            .join(path)
            .map_err(|e| content::invalid_url(path, e.to_string()))
    }
}

impl ContentSource for HttpSource {
    fn location(&self) -> String {
        self.base.to_string()
    }

    fn fetch(&self, path: &str) -> Result<Option<String>> {
        let url = self.url_for(path)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| content::fetch_failed(url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} returned {}", url, status);
            return Ok(None);
        }

        let text = response.text()?;
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[test]
    fn test_base_gets_trailing_slash() {
        let source = HttpSource::new("https://example.com/content").unwrap();
        assert_eq!(source.location(), "https://example.com/content/");
        assert_eq!(
            source.url_for("projects/folio.md").unwrap().as_str(),
            "https://example.com/content/projects/folio.md"
        );
    }

    #[test]
    fn test_base_with_trailing_slash_unchanged() {
        let source = HttpSource::new("http://localhost:8080/").unwrap();
        assert_eq!(
            source.url_for("hero.md").unwrap().as_str(),
            "http://localhost:8080/hero.md"
        );
    }

    #[test]
    fn test_url_for_stays_below_base() {
        let source = HttpSource::new("https://example.com/content/").unwrap();
        for path in ["../admin/config.yml", "/hero.md", "https://other.example/hero.md"] {
            let err = source.url_for(path).unwrap_err();
            assert!(matches!(err, FolioError::FetchFailed { .. }), "{path}");
        }
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        let err = HttpSource::new("ftp://example.com/content").unwrap_err();
        assert!(matches!(err, FolioError::InvalidContentUrl { .. }));
    }

    #[test]
    fn test_rejects_malformed_url() {
        assert!(HttpSource::new("https://").is_err());
    }
}
