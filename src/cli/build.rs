use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build index.html from ./content:\n    folio build\n\n\
                  Build from a deployed site's content:\n    folio build --content https://example.com/content\n\n\
                  Write to a different file:\n    folio build --output public/index.html\n\n\
                  Print the page instead of writing it:\n    folio build --stdout")]
pub struct BuildArgs {
    /// Content directory or URL (overrides `content` in folio.yaml)
    #[arg(long, short = 'c')]
    pub content: Option<String>,

    /// Output file (overrides `output` in folio.yaml)
    #[arg(long, short = 'o', conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the rendered page to stdout
    #[arg(long)]
    pub stdout: bool,
}
