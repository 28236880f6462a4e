/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

use abbr_ast::{Block, Blocks, Document, Inline};
use std::io::Write;

// =============================================================================
// Helper functions
// =============================================================================

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Write a ` name="value"` attribute, skipping empty values.
fn write_optional_attr<W: Write>(name: &str, value: &str, ctx: &mut W) -> std::io::Result<()> {
    if !value.is_empty() {
        write!(ctx, " {}=\"{}\"", name, escape_html(value))?;
    }
    Ok(())
}

// =============================================================================
// Inlines
// =============================================================================

/// Write inline elements
fn write_inline<W: Write>(inline: &Inline, ctx: &mut W) -> std::io::Result<()> {
    match inline {
        Inline::Text(t) => {
            write!(ctx, "{}", escape_html(&t.text))?;
        }
        Inline::LineBreak(_) => {
            writeln!(ctx, "<br />")?;
        }
        Inline::Emph(e) => {
            write!(ctx, "<em>")?;
            write_inlines(&e.content, ctx)?;
            write!(ctx, "</em>")?;
        }
        Inline::Strong(s) => {
            write!(ctx, "<strong>")?;
            write_inlines(&s.content, ctx)?;
            write!(ctx, "</strong>")?;
        }
        Inline::Strikeout(s) => {
            write!(ctx, "<del>")?;
            write_inlines(&s.content, ctx)?;
            write!(ctx, "</del>")?;
        }
        Inline::Code(c) => {
            write!(ctx, "<code>{}</code>", escape_html(&c.text))?;
        }
        Inline::RawInline(raw) => {
            // Only output raw HTML if format is "html"
            if raw.format == "html" {
                write!(ctx, "{}", raw.text)?;
            }
        }
        Inline::Link(link) => {
            let (url, title) = &link.target;
            write!(ctx, "<a href=\"{}\"", escape_html(url))?;
            write_optional_attr("title", title, ctx)?;
            write!(ctx, ">")?;
            write_inlines(&link.content, ctx)?;
            write!(ctx, "</a>")?;
        }
        Inline::Image(image) => {
            let (url, title) = &image.target;
            write!(
                ctx,
                "<img src=\"{}\" alt=\"{}\"",
                escape_html(url),
                escape_html(&image.alt)
            )?;
            write_optional_attr("title", title, ctx)?;
            write!(ctx, " />")?;
        }
        Inline::Abbr(abbr) => {
            write!(ctx, "<abbr title=\"{}\">", escape_html(&abbr.title))?;
            write_inlines(&abbr.content, ctx)?;
            write!(ctx, "</abbr>")?;
        }
    }
    Ok(())
}

fn write_inlines<W: Write>(inlines: &[Inline], ctx: &mut W) -> std::io::Result<()> {
    for inline in inlines {
        write_inline(inline, ctx)?;
    }
    Ok(())
}

// =============================================================================
// Blocks
// =============================================================================

/// Write block elements
fn write_block<W: Write>(block: &Block, ctx: &mut W) -> std::io::Result<()> {
    match block {
        Block::Paragraph(para) => {
            write!(ctx, "<p>")?;
            write_inlines(&para.content, ctx)?;
            writeln!(ctx, "</p>")?;
        }
        Block::Heading(heading) => {
            // HTML only has six heading levels
            let level = heading.level.clamp(1, 6);
            write!(ctx, "<h{}>", level)?;
            write_inlines(&heading.content, ctx)?;
            writeln!(ctx, "</h{}>", level)?;
        }
        Block::CodeBlock(codeblock) => {
            write!(ctx, "<pre><code")?;
            if let Some(lang) = codeblock.info.split_whitespace().next() {
                write!(ctx, " class=\"language-{}\"", escape_html(lang))?;
            }
            write!(ctx, ">{}", escape_html(&codeblock.text))?;
            writeln!(ctx, "</code></pre>")?;
        }
        Block::RawBlock(raw) => {
            if raw.format == "html" {
                write!(ctx, "{}", raw.text)?;
                if !raw.text.ends_with('\n') {
                    writeln!(ctx)?;
                }
            }
        }
        Block::BlockQuote(quote) => {
            writeln!(ctx, "<blockquote>")?;
            write_blocks(&quote.content, ctx)?;
            writeln!(ctx, "</blockquote>")?;
        }
        Block::BulletList(list) => {
            writeln!(ctx, "<ul>")?;
            write_list_items(&list.content, list.tight, ctx)?;
            writeln!(ctx, "</ul>")?;
        }
        Block::OrderedList(list) => {
            write!(ctx, "<ol")?;
            if list.start != 1 {
                write!(ctx, " start=\"{}\"", list.start)?;
            }
            writeln!(ctx, ">")?;
            write_list_items(&list.content, list.tight, ctx)?;
            writeln!(ctx, "</ol>")?;
        }
        Block::HorizontalRule(_) => {
            writeln!(ctx, "<hr />")?;
        }
    }
    Ok(())
}

/// Write a sequence of blocks
fn write_blocks<W: Write>(blocks: &[Block], ctx: &mut W) -> std::io::Result<()> {
    for block in blocks {
        write_block(block, ctx)?;
    }
    Ok(())
}

/// Write list items. Paragraphs of tight lists are written without `<p>`.
fn write_list_items<W: Write>(items: &[Blocks], tight: bool, ctx: &mut W) -> std::io::Result<()> {
    for item in items {
        write!(ctx, "<li>")?;
        if tight {
            let mut first = true;
            for block in item {
                if let Block::Paragraph(para) = block {
                    if !first {
                        writeln!(ctx)?;
                    }
                    write_inlines(&para.content, ctx)?;
                } else {
                    if first {
                        writeln!(ctx)?;
                    }
                    write_block(block, ctx)?;
                }
                first = false;
            }
        } else {
            writeln!(ctx)?;
            write_blocks(item, ctx)?;
        }
        writeln!(ctx, "</li>")?;
    }
    Ok(())
}

// =============================================================================
// Public API
// =============================================================================

/// Write a document as an HTML fragment.
pub fn write<W: Write>(document: &Document, mut writer: W) -> std::io::Result<()> {
    write_blocks(&document.blocks, &mut writer)
}

/// Render a document to an HTML string.
pub fn to_string(document: &Document) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write(document, &mut buf)?;
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
