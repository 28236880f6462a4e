//! Command implementations for the abbr CLI
//!
//! Each command module handles the CLI interface and delegates to
//! abbr-core for actual implementation.

pub mod list;
pub mod render;

use std::io::Read;

use anyhow::{Context, Result};

use abbr_core::DocumentInfo;

/// Read the Markdown source named by `input`; `None` or `-` means stdin.
pub fn read_input(input: Option<&str>) -> Result<(DocumentInfo, String)> {
    match input {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read from stdin")?;
            Ok((DocumentInfo::anonymous(), source))
        }
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path))?;
            Ok((DocumentInfo::from_path(path), source))
        }
    }
}
