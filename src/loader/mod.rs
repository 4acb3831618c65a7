//! Content loading pipeline
//!
//! A load issues one request per known content file and never aborts on a
//! single failure: a missing or unreadable file is logged, recorded in the
//! [`LoadReport`](crate::domain::LoadReport) and the page keeps its defaults
//! for whatever that file would have filled in.
//!
//! Order of requests:
//! 1. The fixed single files (`personal.md`, `hero.md`, `about.md`, `settings.md`)
//! 2. `manifest.json`, fetched once
//! 3. Every manifest entry of every enabled collection, collections in page
//!    order and entries in manifest order

use tracing::{debug, info, warn};

use crate::config::{MANIFEST_FILE, Manifest};
use crate::domain::{Collection, Entry, LoadReport, SiteContent};
use crate::frontmatter::{self, Frontmatter};
use crate::progress::ProgressReporter;
use crate::source::ContentSource;


pub const PERSONAL_FILE: &str = "personal.md";
pub const HERO_FILE: &str = "hero.md";
pub const ABOUT_FILE: &str = "about.md";
pub const SETTINGS_FILE: &str = "settings.md";

/// Load every content file for a page from `source`
pub fn load_site(
    source: &dyn ContentSource,
    collections: &[Collection],
    progress: &mut dyn ProgressReporter,
) -> SiteContent {
    info!("Loading content from {}", source.location());

    let mut site = SiteContent::default();
    site.personal = fetch_parsed(source, PERSONAL_FILE, &mut site.report);
    site.hero = fetch_parsed(source, HERO_FILE, &mut site.report);
    site.about = fetch_parsed(source, ABOUT_FILE, &mut site.report);
    site.settings = fetch_parsed(source, SETTINGS_FILE, &mut site.report);

    if let Some(manifest) = fetch_manifest(source, &mut site.report) {
        load_collections(source, &manifest, collections, progress, &mut site);
    }

    info!(
        "Content loading completed: {} loaded, {} missing, {} failed",
        site.report.loaded.len(),
        site.report.missing.len(),
        site.report.failed.len()
    );
    site
}

fn load_collections(
    source: &dyn ContentSource,
    manifest: &Manifest,
    collections: &[Collection],
    progress: &mut dyn ProgressReporter,
    site: &mut SiteContent,
) {
    for key in manifest.unknown_keys() {
        debug!("Ignoring unknown manifest collection '{}'", key);
    }

    // Page order, whatever order the configuration lists them in.
    let enabled: Vec<Collection> = Collection::ALL
        .into_iter()
        .filter(|c| collections.contains(c))
        .collect();

    let total: usize = enabled.iter().map(|c| manifest.files(*c).len()).sum();
    progress.start(total as u64);

    for collection in enabled {
        let mut entries = Vec::new();
        for file in manifest.files(collection) {
            let path = collection.entry_path(file);
            progress.advance(&path);
            if let Some(fields) = fetch_parsed(source, &path, &mut site.report) {
                entries.push(Entry {
                    file: file.clone(),
                    fields,
                });
            }
        }
        info!("{} loaded ({} entries)", collection.heading(), entries.len());
        site.collections.insert(collection, entries);
    }

    progress.finish();
}

/// Fetch and parse one document, recording the outcome
fn fetch_parsed(
    source: &dyn ContentSource,
    path: &str,
    report: &mut LoadReport,
) -> Option<Frontmatter> {
    fetch_text(source, path, report).map(|text| frontmatter::parse(&text))
}

fn fetch_text(source: &dyn ContentSource, path: &str, report: &mut LoadReport) -> Option<String> {
    match source.fetch(path) {
        Ok(Some(text)) => {
            info!("Loaded {}", path);
            report.loaded.push(path.to_string());
            Some(text)
        }
        Ok(None) => {
            debug!("{} not found, skipping", path);
            report.missing.push(path.to_string());
            None
        }
        Err(e) => {
            warn!("Could not load {}: {}", path, e);
            report.failed.push((path.to_string(), e.to_string()));
            None
        }
    }
}

fn fetch_manifest(source: &dyn ContentSource, report: &mut LoadReport) -> Option<Manifest> {
    let Some(text) = fetch_text(source, MANIFEST_FILE, report) else {
        warn!("Could not load content manifest, collections will be empty");
        return None;
    };

    match Manifest::from_json(&text, MANIFEST_FILE) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            warn!("{}", e);
            // The request succeeded but the content is unusable.
            report.loaded.retain(|p| p != MANIFEST_FILE);
            report.failed.push((MANIFEST_FILE.to_string(), e.to_string()));
            None
        }
    }
}
