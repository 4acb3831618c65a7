//! Folio - portfolio page builder
//!
//! Builds a single-page portfolio from markdown content files with frontmatter,
//! as authored through a git-based CMS, read from a local content folder or a
//! deployed site.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod frontmatter;
mod loader;
mod logging;
mod page;
mod progress;
mod render;
mod source;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.project, args),
        Commands::Manifest(args) => commands::manifest::run(cli.project, args),
        Commands::List(args) => commands::list::run(cli.project, args),
        Commands::Show(args) => commands::show::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
