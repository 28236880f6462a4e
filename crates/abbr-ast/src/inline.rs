/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Text(Text),
    LineBreak(LineBreak),
    Emph(Emph),
    Strong(Strong),
    Strikeout(Strikeout),
    Code(Code),
    RawInline(RawInline),
    Link(Link),
    Image(Image),

    /// Abbreviation reference produced by the abbreviation transform.
    Abbr(Abbr),
}

pub type Inlines = Vec<Inline>;

/// Link or image destination: `(url, title)`.
pub type Target = (String, String);

/// A run of literal text.
///
/// Soft line breaks from the source are kept inside the text as `"\n"`, so a
/// paragraph spanning several source lines usually holds a single `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBreak;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strikeout {
    pub content: Inlines,
}

/// Inline code span. The content is verbatim and never scanned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInline {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub content: Inlines,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub alt: String,
    pub target: Target,
}

/// An abbreviation reference: the short form as its only child, the
/// expansion as `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Abbr {
    pub title: String,
    pub content: Inlines,
}

impl Abbr {
    /// Wrap `short` in an abbreviation node carrying `title` as its expansion.
    pub fn new(short: impl Into<String>, title: impl Into<String>) -> Self {
        Abbr {
            title: title.into(),
            content: vec![Inline::text(short)],
        }
    }
}

impl Inline {
    /// Create a text inline.
    pub fn text(text: impl Into<String>) -> Inline {
        Inline::Text(Text { text: text.into() })
    }

    /// Child inlines of container nodes, `None` for leaves.
    pub fn children(&self) -> Option<&Inlines> {
        match self {
            Inline::Emph(e) => Some(&e.content),
            Inline::Strong(s) => Some(&s.content),
            Inline::Strikeout(s) => Some(&s.content),
            Inline::Link(l) => Some(&l.content),
            Inline::Abbr(a) => Some(&a.content),
            Inline::Text(_)
            | Inline::LineBreak(_)
            | Inline::Code(_)
            | Inline::RawInline(_)
            | Inline::Image(_) => None,
        }
    }

    /// Mutable child inlines of container nodes, `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Inlines> {
        match self {
            Inline::Emph(e) => Some(&mut e.content),
            Inline::Strong(s) => Some(&mut s.content),
            Inline::Strikeout(s) => Some(&mut s.content),
            Inline::Link(l) => Some(&mut l.content),
            Inline::Abbr(a) => Some(&mut a.content),
            Inline::Text(_)
            | Inline::LineBreak(_)
            | Inline::Code(_)
            | Inline::RawInline(_)
            | Inline::Image(_) => None,
        }
    }
}

/// Concatenate the literal text of `inlines`.
///
/// Code spans and raw inlines are skipped; line breaks become `"\n"`.
pub fn inlines_to_plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_plain_text(inlines, &mut out);
    out
}

fn push_plain_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(t) => out.push_str(&t.text),
            Inline::LineBreak(_) => out.push('\n'),
            other => {
                if let Some(children) = other.children() {
                    push_plain_text(children, out);
                }
            }
        }
    }
}
