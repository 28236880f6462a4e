//! List command implementation.
//!
//! Prints each abbreviation definition of a document as `SHORT: EXPANSION`,
//! one per line, after duplicates are resolved.

use std::io::Write;

use anyhow::{Context, Result};

use abbr_core::{Definitions, list_definitions};

use super::read_input;

/// Arguments for the list command
#[derive(Debug)]
pub struct ListArgs {
    /// Input file, stdin when `None` or `-`
    pub input: Option<String>,
}

/// Execute the list command
pub fn execute(args: ListArgs) -> Result<()> {
    let (document, source) = read_input(args.input.as_deref())?;
    let definitions = list_definitions(&source);
    tracing::debug!(
        "Found {} definitions in {}",
        definitions.len(),
        document.display_name()
    );

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(format_definitions(&definitions).as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

fn format_definitions(definitions: &Definitions) -> String {
    definitions
        .iter()
        .map(|(short, expansion)| format!("{}: {}\n", short, expansion))
        .collect()
}
