//! Configuration file handling for Folio
//!
//! This module contains data structures for:
//! - `folio.yaml` - Project configuration
//! - `manifest.json` - Collection manifest inside the content folder

pub mod manifest;
pub mod site;

// Re-export commonly used types
pub use manifest::{MANIFEST_FILE, Manifest};
pub use site::SiteConfig;
