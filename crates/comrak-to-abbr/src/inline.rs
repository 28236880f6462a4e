/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak inline nodes to document inlines.
 */

use abbr_ast::inline::inlines_to_plain_text;
use abbr_ast::{
    Code, Emph, Image, Inline, Inlines, LineBreak, Link, RawInline, Strikeout, Strong, Text,
};
use comrak::arena_tree::Node;
use comrak::nodes::{Ast, NodeValue};
use std::cell::RefCell;

/// Convert a comrak node's inline children to inlines.
///
/// Adjacent text (including soft breaks, which become `"\n"`) is merged
/// into a single [`Text`] node.
pub fn convert_children_to_inlines<'a>(node: &'a Node<'a, RefCell<Ast>>) -> Inlines {
    let mut out = Vec::new();
    for child in node.children() {
        convert_inline(child, &mut out);
    }
    out
}

/// Append `text` to the trailing text node of `out`, or start a new one.
fn push_text(out: &mut Inlines, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = out.last_mut() {
        last.text.push_str(text);
    } else {
        out.push(Inline::Text(Text {
            text: text.to_string(),
        }));
    }
}

/// Convert a comrak inline node, appending the result to `out`.
fn convert_inline<'a>(node: &'a Node<'a, RefCell<Ast>>, out: &mut Inlines) {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Text(text) => push_text(out, text),

        NodeValue::SoftBreak => push_text(out, "\n"),

        NodeValue::LineBreak => out.push(Inline::LineBreak(LineBreak)),

        NodeValue::Code(code) => out.push(Inline::Code(Code {
            text: code.literal.to_string(),
        })),

        NodeValue::HtmlInline(html) => out.push(Inline::RawInline(RawInline {
            format: "html".to_string(),
            text: html.to_string(),
        })),

        NodeValue::Emph => out.push(Inline::Emph(Emph {
            content: convert_children_to_inlines(node),
        })),

        NodeValue::Strong => out.push(Inline::Strong(Strong {
            content: convert_children_to_inlines(node),
        })),

        NodeValue::Strikethrough => out.push(Inline::Strikeout(Strikeout {
            content: convert_children_to_inlines(node),
        })),

        NodeValue::Link(link) => out.push(Inline::Link(Link {
            content: convert_children_to_inlines(node),
            target: (link.url.to_string(), link.title.to_string()),
        })),

        NodeValue::Image(link) => {
            // Alt text is plain text, not scannable content
            let alt = inlines_to_plain_text(&convert_children_to_inlines(node));
            out.push(Inline::Image(Image {
                alt,
                target: (link.url.to_string(), link.title.to_string()),
            }));
        }

        // Escaped characters and any other wrapper: keep the children
        _ => {
            for child in node.children() {
                convert_inline(child, out);
            }
        }
    }
}
