//! Show command implementation
//!
//! Prints the fields of one content file as the loader would see them.

use std::path::PathBuf;

use console::Style;

use crate::cli::ShowArgs;
use crate::common::fs::read_text;
use crate::error::Result;
use crate::frontmatter::{Frontmatter, parse_with_body};

/// Run show command
pub fn run(_project: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let text = read_text(&args.file)?;
    let (fields, body) = parse_with_body(&text);

    println!(
        "{} ({} fields)",
        Style::new().bold().yellow().apply_to(args.file.display()),
        fields.len()
    );
    for line in field_lines(&fields) {
        println!("{}", line);
    }
    println!(
        "  {} {} bytes",
        Style::new().bold().apply_to("Body:"),
        body.len()
    );

    Ok(())
}

fn field_lines(fields: &Frontmatter) -> Vec<String> {
    if fields.is_empty() {
        return vec![format!(
            "  {}",
            Style::new().dim().apply_to("(no frontmatter)")
        )];
    }

    fields
        .iter()
        .map(|(key, value)| {
            let value = if value.contains('\n') {
                format!("\n{}", indent_block(value))
            } else {
                value.to_string()
            };
            format!("  {} {}", Style::new().bold().apply_to(format!("{}:", key)), value)
        })
        .collect()
}

fn indent_block(value: &str) -> String {
    value
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
