//! List command implementation
//!
//! Lists the entries of every enabled collection as the manifest names them,
//! with each entry's title.

use std::path::PathBuf;

use console::Style;

use super::helpers::{content_location, load_config, resolve_project_path};
use crate::cli::ListArgs;
use crate::config::{MANIFEST_FILE, Manifest};
use crate::domain::Collection;
use crate::error::{Result, fs};
use crate::frontmatter;
use crate::source::{self, ContentSource};

/// Run list command
pub fn run(project: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let project = resolve_project_path(project)?;
    let config = load_config(&project, args.content)?;
    let source = source::open(&content_location(&project, &config))?;

    let text = source
        .fetch(MANIFEST_FILE)?
        .ok_or_else(|| fs::not_found(format!("{}/{}", source.location(), MANIFEST_FILE)))?;
    let manifest = Manifest::from_json(&text, MANIFEST_FILE)?;

    if config
        .collections
        .iter()
        .all(|c| manifest.files(*c).is_empty())
    {
        println!("No collection entries.");
        return Ok(());
    }

    let enabled = Collection::ALL
        .into_iter()
        .filter(|c| config.collections.contains(c));
    for collection in enabled {
        let files = manifest.files(collection);
        if files.is_empty() {
            continue;
        }
        println!(
            "{} ({}):",
            Style::new().bold().yellow().apply_to(collection.heading()),
            files.len()
        );
        for file in files {
            println!("  {}", entry_line(source.as_ref(), collection, file));
        }
        println!();
    }

    Ok(())
}

fn entry_line(source: &dyn ContentSource, collection: Collection, file: &str) -> String {
    let path = collection.entry_path(file);
    match source.fetch(&path) {
        Ok(Some(text)) => {
            let fields = frontmatter::parse(&text);
            match fields.get(collection.title_key()) {
                Some(title) => format!("{} {}", title, Style::new().dim().apply_to(file)),
                None => file.to_string(),
            }
        }
        Ok(None) => format!("{} {}", file, Style::new().red().apply_to("(missing)")),
        Err(e) => format!("{} {}", file, Style::new().red().apply_to(format!("({})", e))),
    }
}
