/*
 * pipeline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render pipeline: Markdown source to HTML or JSON.
 */

//! Render pipeline.
//!
//! 1. **Parse**: CommonMark source → [`Document`] (via `comrak-to-abbr`)
//! 2. **Transform**: run the [`TransformPipeline`] built by
//!    [`build_transform_pipeline`]
//! 3. **Write**: [`Document`] → HTML or JSON (via `abbr-writers`)
//!
//! ```ignore
//! use abbr_core::pipeline::markdown_to_html;
//!
//! let html = markdown_to_html("*[W3C]: World Wide Web Consortium\n\nThe W3C.\n")?;
//! ```

use abbr_ast::Document;

use crate::Result;
use crate::error::AbbrError;
use crate::format::Format;
use crate::render::{DocumentInfo, RenderContext};
use crate::transform::TransformPipeline;
use crate::transforms::{AbbreviationTransform, Definitions, collect_definitions};

/// Output from the render pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Format the content was written in
    pub format: Format,
    /// The rendered content
    pub content: String,
}

/// Build the transform pipeline run on every document.
pub fn build_transform_pipeline() -> TransformPipeline {
    let mut pipeline = TransformPipeline::new();
    pipeline.push(Box::new(AbbreviationTransform::new()));
    pipeline
}

/// Parse `source`, run the transforms, and return the transformed tree.
pub fn transform_markdown(source: &str, ctx: &mut RenderContext) -> Result<Document> {
    let mut ast = comrak_to_abbr::read(source);
    let pipeline = build_transform_pipeline();

    tracing::debug!(
        document = %ctx.document.display_name(),
        transforms = ?pipeline.transform_names(),
        "Running transform pipeline"
    );
    pipeline.execute(&mut ast, ctx)?;
    Ok(ast)
}

/// Render `source` in the format named by `ctx`.
pub fn render_markdown(source: &str, ctx: &mut RenderContext) -> Result<RenderOutput> {
    let ast = transform_markdown(source, ctx)?;

    let content = match ctx.format {
        Format::Html => abbr_writers::html::to_string(&ast)?,
        Format::Json => abbr_writers::json::to_string(&ast)
            .map_err(|e| AbbrError::Render(format!("Failed to write JSON: {}", e)))?,
    };

    Ok(RenderOutput {
        format: ctx.format,
        content,
    })
}

/// Render `source` to an HTML fragment.
pub fn markdown_to_html(source: &str) -> Result<String> {
    let document = DocumentInfo::anonymous();
    let mut ctx = RenderContext::new(&document, Format::Html);
    Ok(render_markdown(source, &mut ctx)?.content)
}

/// The abbreviation definitions found in `source`, without rendering it.
pub fn list_definitions(source: &str) -> Definitions {
    let mut ast = comrak_to_abbr::read(source);
    collect_definitions(&mut ast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_contents() {
        let pipeline = build_transform_pipeline();
        assert_eq!(pipeline.transform_names(), vec!["abbreviations"]);
    }

    #[test]
    fn test_render_json_has_abbr_node() {
        let document = DocumentInfo::anonymous();
        let mut ctx = RenderContext::new(&document, Format::Json);
        let output = render_markdown("*[CSS]: Cascading Style Sheets\n\nCSS\n", &mut ctx).unwrap();

        assert_eq!(output.format, Format::Json);
        let value: serde_json::Value = serde_json::from_str(&output.content).unwrap();
        assert_eq!(
            value["blocks"][0]["Paragraph"]["content"][0]["Abbr"]["title"],
            "Cascading Style Sheets"
        );
    }

    #[test]
    fn test_list_definitions_in_order() {
        let defs = list_definitions("*[A]: Alpha\n*[B]: Beta\n\nText with A and B.\n");
        let pairs: Vec<(&str, &str)> = defs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("A", "Alpha"), ("B", "Beta")]);
    }

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html("*[W3C]: World Wide Web Consortium\n\nThe W3C.\n").unwrap();
        assert_eq!(
            html,
            "<p>The <abbr title=\"World Wide Web Consortium\">W3C</abbr>.</p>\n"
        );
    }
}
