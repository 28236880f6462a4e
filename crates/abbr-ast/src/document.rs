/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::{Block, Blocks};
use crate::inline::inlines_to_plain_text;
use serde::{Deserialize, Serialize};

/// A parsed document: the root of the tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Blocks,
}

impl Document {
    pub fn new(blocks: Blocks) -> Self {
        Self { blocks }
    }

    /// Literal text of every paragraph and heading, one line per block.
    ///
    /// Verbatim content (code, raw) is not included.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        collect_plain_text(&self.blocks, &mut lines);
        lines.join("\n")
    }
}

fn collect_plain_text(blocks: &[Block], lines: &mut Vec<String>) {
    for block in blocks {
        if let Some(inlines) = block.inlines() {
            lines.push(inlines_to_plain_text(inlines));
        }
        for child in block.child_blocks() {
            collect_plain_text(child, lines);
        }
    }
}
