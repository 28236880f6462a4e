/*
 * transforms/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document transforms for the render pipeline.
 */

//! Document transforms for the render pipeline.
//!
//! - [`AbbreviationTransform`] - Expands `*[ID]: text` definitions into
//!   abbreviation references
//!
//! These transforms implement [`AstTransform`](crate::transform::AstTransform) and
//! can be added to a [`TransformPipeline`](crate::transform::TransformPipeline).

mod abbreviations;

pub use abbreviations::{
    AbbreviationTransform, Definitions, collect_definitions, remove_empty_paragraphs,
    substitute_references,
};
