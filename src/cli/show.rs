use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the fields of a content file:\n    folio show content/hero.md\n\n\
                  Show a collection entry:\n    folio show content/projects/folio.md")]
pub struct ShowArgs {
    /// Markdown file to parse
    pub file: PathBuf,
}
