//! Parsed site content produced by a load

use std::collections::BTreeMap;

use super::Collection;
use crate::frontmatter::Frontmatter;

/// One parsed collection entry.
#[derive(Debug, Clone)]
pub struct Entry {
    /// File name as listed in the manifest (e.g., "phd.md")
    pub file: String,

    /// Parsed frontmatter fields
    pub fields: Frontmatter,
}

/// Outcome of every request issued during a load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Paths fetched and parsed
    pub loaded: Vec<String>,

    /// Paths the source reported as absent
    pub missing: Vec<String>,

    /// Paths whose request failed, with the reason
    pub failed: Vec<(String, String)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Everything a load produced, ready to be applied to a page.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub personal: Option<Frontmatter>,
    pub hero: Option<Frontmatter>,
    pub about: Option<Frontmatter>,
    pub settings: Option<Frontmatter>,

    /// Entries per collection, in manifest order
    pub collections: BTreeMap<Collection, Vec<Entry>>,

    pub report: LoadReport,
}

impl SiteContent {
    /// Entries loaded for `collection`.
    pub fn entries(&self, collection: Collection) -> &[Entry] {
        self.collections
            .get(&collection)
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of collection entries.
    pub fn entry_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}
