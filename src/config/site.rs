//! Project configuration (folio.yaml)
//!
//! Every field is optional. Command line flags take precedence over values
//! read from the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Collection;
use crate::error::{Result, config};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "folio.yaml";

/// Project configuration (folio.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content root: a directory (relative to the project) or an http(s) URL
    pub content: String,

    /// Rendered page path (relative to the project)
    pub output: PathBuf,

    /// Collections rendered into the page
    pub collections: Vec<Collection>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            output: PathBuf::from("index.html"),
            collections: Collection::ALL.to_vec(),
        }
    }
}

impl SiteConfig {
    /// Parse project configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults configuration.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load `folio.yaml` from the project directory, or defaults when it does not exist
    pub fn load(project: &Path) -> Result<Self> {
        let path = project.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            crate::error::FolioError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Output path resolved against the project directory
    pub fn output_path(&self, project: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            project.join(&self.output)
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, content: Option<String>, output: Option<PathBuf>) -> Self {
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
