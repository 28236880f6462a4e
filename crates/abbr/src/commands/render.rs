/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! Render command implementation.
//!
//! `abbr render` parses one Markdown document, runs the transform pipeline
//! and writes the result as an HTML fragment or as the JSON document tree.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use abbr_core::{Format, RenderContext, render_markdown};

use super::read_input;

/// Arguments for the render command
#[derive(Debug)]
pub struct RenderArgs {
    /// Input file, stdin when `None` or `-`
    pub input: Option<String>,
    /// Output format
    pub to: Option<String>,
    /// Output file path, stdout when `None` or `-`
    pub output: Option<String>,
    /// Suppress informational messages
    pub quiet: bool,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let format = match &args.to {
        Some(format_str) => Format::try_from(format_str.as_str()).map_err(|e| anyhow::anyhow!(e))?,
        None => Format::Html,
    };

    let (document, source) = read_input(args.input.as_deref())?;
    debug!("Rendering {} to {}", document.display_name(), format);

    let mut ctx = RenderContext::new(&document, format);
    let output = render_markdown(&source, &mut ctx)
        .with_context(|| format!("Failed to render {}", document.display_name()))?;

    match args.output.as_deref() {
        None | Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.content.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
        Some(path) => {
            write_output(Path::new(path), &output.content)?;
            if !args.quiet {
                info!("Output: {}", path);
            }
        }
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render_file(source: &str, to: Option<&str>) -> String {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let input = temp.path().join("doc.md");
        let output = temp.path().join("out").join("doc.html");
        std::fs::write(&input, source).unwrap();

        execute(RenderArgs {
            input: Some(input.to_string_lossy().into_owned()),
            to: to.map(str::to_string),
            output: Some(output.to_string_lossy().into_owned()),
            quiet: true,
        })
        .unwrap();

        std::fs::read_to_string(&output).unwrap()
    }

    #[test]
    fn test_render_html_to_file() {
        let html = render_file("*[API]: Application Programming Interface\n\nAn API.\n", None);
        assert_eq!(
            html,
            "<p>An <abbr title=\"Application Programming Interface\">API</abbr>.</p>\n"
        );
    }

    #[test]
    fn test_render_json_to_file() {
        let json = render_file("*[API]: Application Programming Interface\n\nAPI\n", Some("json"));
        assert!(json.contains("\"Abbr\""));
        assert!(json.contains("Application Programming Interface"));
        assert!(!json.contains("*[API]"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = execute(RenderArgs {
            input: Some("unused.md".to_string()),
            to: Some("pdf".to_string()),
            output: None,
            quiet: true,
        })
        .unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
    }

    #[test]
    fn test_missing_input_is_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.md");
        let err = execute(RenderArgs {
            input: Some(missing.to_string_lossy().into_owned()),
            to: None,
            output: None,
            quiet: true,
        })
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
