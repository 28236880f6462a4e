/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document transformation pipeline infrastructure.
 */

//! Document transformation pipeline infrastructure.
//!
//! - [`AstTransform`] - The trait implemented by all transformations
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//!
//! Transforms run in a flat, ordered sequence (insertion order). Each one
//! receives the whole [`Document`] and may add, remove or rewrite nodes.
//!
//! ```ignore
//! use abbr_core::transform::{AstTransform, TransformPipeline};
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(AbbreviationTransform::new()));
//! pipeline.execute(&mut document, &mut ctx)?;
//! ```

use abbr_ast::Document;

use crate::Result;
use crate::render::RenderContext;

/// Trait for document transformations.
///
/// Transforms must be `Send + Sync` so a pipeline can be shared between
/// threads rendering different documents.
pub trait AstTransform: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Apply the transformation to the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails. The document may have
    /// been partially rewritten at that point.
    fn transform(&self, ast: &mut Document, ctx: &mut RenderContext) -> Result<()>;
}

/// A pipeline of transforms to execute in order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn AstTransform>>,
}

impl TransformPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline.
    ///
    /// Transforms run in the order they are added.
    pub fn push(&mut self, transform: Box<dyn AstTransform>) {
        self.transforms.push(transform);
    }

    /// Add multiple transforms to the pipeline.
    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn AstTransform>>) {
        self.transforms.extend(transforms);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Execute all transforms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute(&self, ast: &mut Document, ctx: &mut RenderContext) -> Result<()> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.transform(ast, ctx)?;
        }

        Ok(())
    }

    /// List the names of all transforms in execution order.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
