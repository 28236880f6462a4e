/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! JSON serialization of the document tree.
//!
//! The output is the serde representation of [`Document`]: enum variants are
//! externally tagged, so a paragraph reads
//! `{"Paragraph": {"content": [{"Text": {"text": "..."}}]}}`.

use abbr_ast::Document;
use serde_json::Value;
use std::io::Write;

/// Convert a document to a JSON value.
pub fn to_value(document: &Document) -> serde_json::Result<Value> {
    serde_json::to_value(document)
}

/// Render a document to a pretty-printed JSON string ending in a newline.
pub fn to_string(document: &Document) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

/// Write a document as pretty-printed JSON followed by a newline.
pub fn write<W: Write>(document: &Document, mut writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, document)?;
    writeln!(writer).map_err(serde_json::Error::io)
}
