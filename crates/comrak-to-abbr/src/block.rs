/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak block nodes to document blocks.
 */

use crate::inline::convert_children_to_inlines;
use abbr_ast::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, Document, Heading, HorizontalRule,
    OrderedList, Paragraph, RawBlock,
};
use comrak::arena_tree::Node;
use comrak::nodes::{Ast, ListType, NodeCodeBlock, NodeList, NodeValue};
use std::cell::RefCell;

/// Convert a comrak document to a [`Document`].
///
/// A root that is not a `Document` node is converted as if it were the only
/// block of one.
pub fn convert_document<'a>(root: &'a Node<'a, RefCell<Ast>>) -> Document {
    let is_document = matches!(root.data.borrow().value, NodeValue::Document);
    let blocks = if is_document {
        convert_children_to_blocks(root)
    } else {
        convert_block(root)
    };
    Document { blocks }
}

/// Convert a comrak node's block children to blocks.
fn convert_children_to_blocks<'a>(node: &'a Node<'a, RefCell<Ast>>) -> Blocks {
    node.children().flat_map(|child| convert_block(child)).collect()
}

/// Convert a comrak block node to blocks.
///
/// Returns a Vec because unsupported containers are flattened into their
/// children and some nodes (front matter) produce nothing.
fn convert_block<'a>(node: &'a Node<'a, RefCell<Ast>>) -> Blocks {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Document => convert_children_to_blocks(node),

        NodeValue::Paragraph => {
            vec![Block::Paragraph(Paragraph {
                content: convert_children_to_inlines(node),
            })]
        }

        NodeValue::Heading(heading) => {
            vec![Block::Heading(Heading {
                level: heading.level as usize,
                content: convert_children_to_inlines(node),
            })]
        }

        NodeValue::CodeBlock(code_block) => vec![convert_code_block(code_block)],

        NodeValue::HtmlBlock(html) => {
            vec![Block::RawBlock(RawBlock {
                format: "html".to_string(),
                text: html.literal.to_string(),
            })]
        }

        NodeValue::BlockQuote => {
            vec![Block::BlockQuote(BlockQuote {
                content: convert_children_to_blocks(node),
            })]
        }

        NodeValue::List(list) => vec![convert_list(node, list)],

        // Items are reached through convert_list; a stray item keeps its blocks
        NodeValue::Item(_) => convert_children_to_blocks(node),

        NodeValue::ThematicBreak => vec![Block::HorizontalRule(HorizontalRule)],

        // Front matter is not part of the document body
        NodeValue::FrontMatter(_) => vec![],

        _ => {
            tracing::debug!(
                node = ?std::mem::discriminant(&ast.value),
                "flattening unsupported block node"
            );
            convert_children_to_blocks(node)
        }
    }
}

fn convert_code_block(code_block: &NodeCodeBlock) -> Block {
    Block::CodeBlock(CodeBlock {
        info: code_block.info.to_string(),
        text: code_block.literal.to_string(),
    })
}

fn convert_list<'a>(node: &'a Node<'a, RefCell<Ast>>, list: &NodeList) -> Block {
    let items: Vec<Blocks> = node
        .children()
        .map(|child| convert_children_to_blocks(child))
        .collect();

    match list.list_type {
        ListType::Bullet => Block::BulletList(BulletList {
            tight: list.tight,
            content: items,
        }),
        ListType::Ordered => Block::OrderedList(OrderedList {
            start: list.start,
            tight: list.tight,
            content: items,
        }),
    }
}
