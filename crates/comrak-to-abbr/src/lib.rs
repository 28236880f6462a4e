/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak's CommonMark AST to the abbr document tree.
 *
 * Text runs are kept whole (soft breaks become "\n" inside the text), so
 * line-oriented patterns can be matched against a paragraph's text
 * directly. Nodes outside the supported subset are flattened or dropped
 * instead of panicking.
 */

mod block;
mod inline;

pub use block::convert_document;

use abbr_ast::Document;
use comrak::{Arena, Options, parse_document};

/// Parse CommonMark `markdown` into a [`Document`].
pub fn read(markdown: &str) -> Document {
    let arena = Arena::new();
    // Pure CommonMark, no GFM extensions (default is CommonMark-only)
    let options = Options::default();
    let root = parse_document(&arena, markdown, &options);
    convert_document(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abbr_ast::{Block, Inline};

    #[test]
    fn test_simple_paragraph() {
        let doc = read("Hello world.\n");
        assert_eq!(doc.blocks.len(), 1);
        match &doc.blocks[0] {
            Block::Paragraph(p) => {
                // A single text run, not word tokens
                assert_eq!(p.content, vec![Inline::text("Hello world.")]);
            }
            _ => panic!("Expected Paragraph"),
        }
    }

    #[test]
    fn test_heading() {
        let doc = read("# Hello\n");
        assert_eq!(doc.blocks.len(), 1);
        match &doc.blocks[0] {
            Block::Heading(h) => {
                assert_eq!(h.level, 1);
            }
            _ => panic!("Expected Heading"),
        }
    }

    #[test]
    fn test_empty_input() {
        let doc = read("");
        assert!(doc.blocks.is_empty());
    }
}
