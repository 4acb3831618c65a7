//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - manifest: Manifest command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod list;
pub mod manifest;
pub mod show;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use manifest::ManifestArgs;
pub use show::ShowArgs;

/// Folio - portfolio page builder
///
/// Build a portfolio page from markdown content managed by a git-based CMS.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build a portfolio page from CMS-authored markdown content",
    long_about = "Folio reads markdown files with frontmatter (personal details, hero, about, \
                  settings and collections such as projects or publications) from a content \
                  folder or a deployed site and renders them into a single portfolio page.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  folio build                         \x1b[90m# Render index.html from ./content\x1b[0m\n   \
                  folio build --stdout                \x1b[90m# Print the page instead\x1b[0m\n   \
                  folio manifest                      \x1b[90m# Regenerate content/manifest.json\x1b[0m\n   \
                  folio list                          \x1b[90m# List collection entries\x1b[0m\n   \
                  folio show content/hero.md          \x1b[90m# Show parsed frontmatter\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory holding folio.yaml (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "FOLIO_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the portfolio page from content
    Build(BuildArgs),

    /// Regenerate the collection manifest
    Manifest(ManifestArgs),

    /// List collection entries
    List(ListArgs),

    /// Show the parsed frontmatter of a content file
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_parsing_build() {
        let cli = Cli::try_parse_from(["folio", "build"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert!(args.content.is_none());
                assert!(args.output.is_none());
                assert!(!args.stdout);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parsing_build_options() {
        let cli = Cli::try_parse_from([
            "folio",
            "build",
            "--content",
            "https://example.com/content",
            "-o",
            "public/index.html",
        ])
        .unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.content.as_deref(), Some("https://example.com/content"));
                assert_eq!(args.output, Some(PathBuf::from("public/index.html")));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_output_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["folio", "build", "--stdout", "-o", "x.html"]).is_err());
    }

    #[test]
    fn test_cli_parsing_manifest_check() {
        let cli = Cli::try_parse_from(["folio", "manifest", "--check"]).unwrap();
        assert!(matches!(cli.command, Commands::Manifest(ManifestArgs { check: true, .. })));
    }

    #[test]
    fn test_cli_parsing_show() {
        let cli = Cli::try_parse_from(["folio", "show", "content/hero.md"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.file, PathBuf::from("content/hero.md")),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_show_requires_file() {
        assert!(Cli::try_parse_from(["folio", "show"]).is_err());
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["folio", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["folio", "-v", "-p", "/tmp/site", "list"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/site")));
    }

    #[test]
    #[serial]
    fn test_cli_project_flag_overrides_env() {
        unsafe {
            std::env::set_var("FOLIO_PROJECT", "/tmp/env-site");
        }
        let cli = Cli::try_parse_from(["folio", "-p", "/tmp/flag-site", "list"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/flag-site")));
        let cli = Cli::try_parse_from(["folio", "list"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/env-site")));
        unsafe {
            std::env::remove_var("FOLIO_PROJECT");
        }
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["folio", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "bash"),
            _ => panic!("Expected Completions command"),
        }
    }
}
