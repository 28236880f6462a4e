/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::inline::Inlines;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    CodeBlock(CodeBlock),
    RawBlock(RawBlock),
    BlockQuote(BlockQuote),
    BulletList(BulletList),
    OrderedList(OrderedList),
    HorizontalRule(HorizontalRule),
}

pub type Blocks = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: usize,
    pub content: Inlines,
}

/// Fenced or indented code. `info` is the fence info string (may be empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub info: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    pub content: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletList {
    /// Tight lists render their item paragraphs without `<p>` wrappers.
    pub tight: bool,
    pub content: Vec<Blocks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedList {
    pub start: usize,
    pub tight: bool,
    pub content: Vec<Blocks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalRule;

impl Block {
    /// Create a paragraph block.
    pub fn paragraph(content: Inlines) -> Block {
        Block::Paragraph(Paragraph { content })
    }

    /// Inline content of leaf text blocks (paragraphs and headings).
    pub fn inlines(&self) -> Option<&Inlines> {
        match self {
            Block::Paragraph(p) => Some(&p.content),
            Block::Heading(h) => Some(&h.content),
            _ => None,
        }
    }

    pub fn inlines_mut(&mut self) -> Option<&mut Inlines> {
        match self {
            Block::Paragraph(p) => Some(&mut p.content),
            Block::Heading(h) => Some(&mut h.content),
            _ => None,
        }
    }

    /// Nested block sequences of container blocks (one per list item).
    pub fn child_blocks_mut(&mut self) -> Vec<&mut Blocks> {
        match self {
            Block::BlockQuote(bq) => vec![&mut bq.content],
            Block::BulletList(bl) => bl.content.iter_mut().collect(),
            Block::OrderedList(ol) => ol.content.iter_mut().collect(),
            _ => Vec::new(),
        }
    }

    pub fn child_blocks(&self) -> Vec<&Blocks> {
        match self {
            Block::BlockQuote(bq) => vec![&bq.content],
            Block::BulletList(bl) => bl.content.iter().collect(),
            Block::OrderedList(ol) => ol.content.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// True for a paragraph with no inline content.
    pub fn is_empty_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(p) if p.content.is_empty())
    }
}
