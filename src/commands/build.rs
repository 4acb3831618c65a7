//! Build command implementation
//!
//! Loads every content file, applies it to a fresh page and renders the
//! document. Individual content failures are reported in the summary; only
//! configuration, source and write errors fail the command.

use std::path::PathBuf;

use console::Style;
use tracing::info;

use super::helpers::{content_location, load_config, resolve_project_path};
use crate::cli::BuildArgs;
use crate::common::fs::write_atomic;
use crate::domain::SiteContent;
use crate::error::Result;
use crate::loader::load_site;
use crate::page::Page;
use crate::progress::{ProgressDisplay, ProgressReporter, SilentProgress};
use crate::render::layout::render_document;
use crate::source;

/// Run build command
pub fn run(project: Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let project = resolve_project_path(project)?;
    let config = load_config(&project, args.content)?.with_overrides(None, args.output);
    let location = content_location(&project, &config);
    let source = source::open(&location)?;

    let mut progress: Box<dyn ProgressReporter> = if args.stdout {
        Box::new(SilentProgress)
    } else {
        Box::new(ProgressDisplay::new())
    };
    let site = load_site(source.as_ref(), &config.collections, progress.as_mut());

    let page = Page::build(&site, &config.collections);
    let html = render_document(&page);

    if args.stdout {
        print!("{}", html);
        // The page owns stdout; only problems are worth mentioning.
        for line in failure_lines(&site) {
            eprintln!("{}", line);
        }
        return Ok(());
    }

    let output = config.output_path(&project);
    write_atomic(&output, &html)?;
    info!("Wrote {}", output.display());

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Built"),
        output.display()
    );
    for line in summary_lines(&location.to_string(), &site) {
        println!("{}", line);
    }

    Ok(())
}

fn summary_lines(location: &str, site: &SiteContent) -> Vec<String> {
    let report = &site.report;
    let mut lines = vec![
        format!("  {} {}", Style::new().bold().apply_to("Content:"), location),
        format!(
            "  {} {} loaded, {} missing, {} failed",
            Style::new().bold().apply_to("Files:"),
            report.loaded.len(),
            report.missing.len(),
            report.failed.len()
        ),
        format!(
            "  {} {}",
            Style::new().bold().apply_to("Entries:"),
            site.entry_count()
        ),
    ];
    if !report.is_clean() {
        lines.extend(failure_lines(site));
    }
    lines
}

fn failure_lines(site: &SiteContent) -> Vec<String> {
    site.report
        .failed
        .iter()
        .map(|(path, reason)| {
            format!(
                "  {} {}: {}",
                Style::new().yellow().bold().apply_to("Skipped"),
                path,
                reason
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Collection, Entry};
    use crate::frontmatter::Frontmatter;

    fn site_with_report() -> SiteContent {
        let mut site = SiteContent::default();
        site.report.loaded = vec!["hero.md".to_string(), "manifest.json".to_string()];
        site.report.missing = vec!["about.md".to_string()];
        site.report
            .failed
            .push(("projects/x.md".to_string(), "connection reset".to_string()));
        site.collections.insert(
            Collection::Skills,
            vec![Entry {
                file: "rust.md".to_string(),
                fields: Frontmatter::default(),
            }],
        );
        site
    }

    #[test]
    fn test_summary_counts() {
        console::set_colors_enabled(false);
        let lines = summary_lines("content", &site_with_report());
        assert_eq!(lines[0], "  Content: content");
        assert_eq!(lines[1], "  Files: 2 loaded, 1 missing, 1 failed");
        assert_eq!(lines[2], "  Entries: 1");
        assert_eq!(lines[3], "  Skipped projects/x.md: connection reset");
    }

    #[test]
    fn test_clean_load_has_no_failure_lines() {
        assert!(failure_lines(&SiteContent::default()).is_empty());
    }
}
