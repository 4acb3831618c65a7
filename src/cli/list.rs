use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List collection entries:\n    folio list\n\n\
                  List entries of a deployed site:\n    folio list --content https://example.com/content")]
pub struct ListArgs {
    /// Content directory or URL (overrides `content` in folio.yaml)
    #[arg(long, short = 'c')]
    pub content: Option<String>,
}
