//! Abbreviation transform and render pipeline
//!
//! This crate ties the document reader, the transforms and the writers
//! together:
//!
//! - [`AbbreviationTransform`] - Expands `*[ID]: text` definitions
//! - [`TransformPipeline`] - Ordered transforms run on every document
//! - [`RenderContext`] - Per-render state passed to each transform
//! - [`Format`] - Output format
//!
//! # Example
//!
//! ```ignore
//! use abbr_core::{DocumentInfo, Format, RenderContext, render_markdown};
//!
//! let document = DocumentInfo::from_path("notes.md");
//! let mut ctx = RenderContext::new(&document, Format::Html);
//! let output = render_markdown(&source, &mut ctx)?;
//! ```

pub mod error;
pub mod format;
pub mod pipeline;
pub mod render;
pub mod transform;
pub mod transforms;

// Re-export commonly used types
pub use error::{AbbrError, Result};
pub use format::Format;
pub use pipeline::{
    RenderOutput, build_transform_pipeline, list_definitions, markdown_to_html, render_markdown,
    transform_markdown,
};
pub use render::{DocumentInfo, RenderContext};
pub use transform::{AstTransform, TransformPipeline};
pub use transforms::{AbbreviationTransform, Definitions};
