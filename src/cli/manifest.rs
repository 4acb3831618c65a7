use clap::Parser;

/// Arguments for the manifest command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Regenerate content/manifest.json:\n    folio manifest\n\n\
                  Fail if the manifest is stale (for CI):\n    folio manifest --check")]
pub struct ManifestArgs {
    /// Content directory (overrides `content` in folio.yaml)
    #[arg(long, short = 'c')]
    pub content: Option<String>,

    /// Check that the manifest is up to date instead of writing it
    #[arg(long)]
    pub check: bool,
}
