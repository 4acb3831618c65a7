//! Manifest command implementation
//!
//! Regenerates `manifest.json` from the `*.md` files found in each collection
//! folder. With `--check` nothing is written and a stale manifest is an error,
//! which lets CI catch content commits that forgot to update it.

use std::path::PathBuf;

use console::Style;
use tracing::debug;

use super::helpers::{content_location, load_config, resolve_project_path};
use crate::cli::ManifestArgs;
use crate::config::{MANIFEST_FILE, Manifest};
use crate::error::{FolioError, Result, content, manifest};

/// Run manifest command
pub fn run(project: Option<PathBuf>, args: ManifestArgs) -> Result<()> {
    let project = resolve_project_path(project)?;
    let config = load_config(&project, args.content)?;
    let location = content_location(&project, &config);

    let content_dir = location
        .as_dir()
        .ok_or_else(|| FolioError::ManifestRequiresDirectory {
            location: location.to_string(),
        })?;
    if !content_dir.is_dir() {
        return Err(content::not_found(content_dir.display().to_string()));
    }

    let scanned = Manifest::scan(content_dir, &config.collections)?;
    let path = content_dir.join(MANIFEST_FILE);

    if args.check {
        let current = if path.is_file() {
            let text = crate::common::fs::read_text(&path)?;
            Some(Manifest::from_json(&text, &path.display().to_string())?)
        } else {
            None
        };
        let up_to_date = current
            .as_ref()
            .is_some_and(|current| current.lists_match(&scanned, &config.collections));
        if !up_to_date {
            return Err(manifest::outdated(path.display().to_string()));
        }
        println!(
            "{} {} is up to date",
            Style::new().green().bold().apply_to("✓"),
            path.display()
        );
        return Ok(());
    }

    scanned.write(content_dir)?;
    debug!("Wrote {}", path.display());

    println!(
        "{} {} ({} entries)",
        Style::new().green().bold().apply_to("Updated"),
        path.display(),
        scanned.total()
    );
    for &collection in &config.collections {
        println!(
            "  {} {}",
            Style::new().bold().apply_to(format!("{}:", collection)),
            scanned.files(collection).len()
        );
    }

    Ok(())
}
