/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree definitions and generic tree rewriting primitives.
 *
 * This crate provides pure data type definitions for a parsed Markdown
 * document plus two rewriting primitives that know nothing about any
 * particular transform: regex find-and-replace over text nodes, and
 * predicate-driven block removal.
 */

pub mod block;
pub mod document;
pub mod find_replace;
pub mod inline;
pub mod remove;

// Re-export commonly used types at the crate root
pub use block::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, Heading, HorizontalRule, OrderedList,
    Paragraph, RawBlock,
};
pub use document::Document;
pub use find_replace::{FindReplace, Replacement};
pub use inline::{
    Abbr, Code, Emph, Image, Inline, Inlines, LineBreak, Link, RawInline, Strikeout, Strong,
    Target, Text,
};
pub use remove::remove_blocks;
