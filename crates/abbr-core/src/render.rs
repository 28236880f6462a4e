/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-render context passed through the transform pipeline.
 */

use std::path::{Path, PathBuf};

use crate::format::Format;

/// Information about the document being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Input path, `None` when reading from stdin or an in-memory string
    pub input: Option<PathBuf>,
}

impl DocumentInfo {
    /// Document read from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Document with no backing file.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Name used in log messages.
    pub fn display_name(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}

/// Context for a single document render operation.
pub struct RenderContext<'a> {
    /// Information about the document being rendered
    pub document: &'a DocumentInfo,

    /// Target format for this render
    pub format: Format,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    pub fn new(document: &'a DocumentInfo, format: Format) -> Self {
        Self { document, format }
    }
}
