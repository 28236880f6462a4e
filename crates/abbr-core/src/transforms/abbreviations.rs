/*
 * abbreviations.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that expands abbreviation definitions into annotated references.
 */

//! Abbreviation transform.
//!
//! A definition is a line of the form `*[SHORT]: Expansion`. The transform
//! runs three passes over the document:
//!
//! 1. **Collect**: every definition is removed from the text and recorded.
//!    When a short form is defined twice, the later expansion wins.
//! 2. **Substitute**: every whole-word, case-sensitive occurrence of a short
//!    form in ordinary text becomes an [`Abbr`] node. Code and raw content is
//!    not touched, and neither is the text inside an `Abbr` already created.
//! 3. **Prune**: paragraphs left with no children are dropped. Containers
//!    emptied by that removal stay in place.
//!
//! ```text
//! *[HTML]: HyperText Markup Language
//!
//! HTML is great.
//! ```
//!
//! renders as `<p><abbr title="HyperText Markup Language">HTML</abbr> is great.</p>`.

use std::sync::LazyLock;

use abbr_ast::{Abbr, Block, Document, FindReplace, Inline, Replacement, remove_blocks};
use hashlink::LinkedHashMap;
use regex::Regex;

use crate::Result;
use crate::error::AbbrError;
use crate::render::RenderContext;
use crate::transform::AstTransform;

/// `*[ID]: expansion`, with the line's trailing newline when there is one.
///
/// `ID` is made of ASCII word characters and hyphens only.
static DEFINITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\[((?-u:[\w-])+)\]:\s+(.+)\n?")
        .expect("Invalid regex pattern for abbreviation definitions")
});

/// Short form to expansion.
pub type Definitions = LinkedHashMap<String, String>;

/// Transform that turns `*[ID]: text` definitions into `Abbr` references.
pub struct AbbreviationTransform;

impl AbbreviationTransform {
    /// Create a new abbreviation transform.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AbbreviationTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl AstTransform for AbbreviationTransform {
    fn name(&self) -> &str {
        "abbreviations"
    }

    fn transform(&self, ast: &mut Document, ctx: &mut RenderContext) -> Result<()> {
        let definitions = collect_definitions(ast);
        let replaced = substitute_references(ast, &definitions)?;
        let pruned = remove_empty_paragraphs(ast);

        tracing::debug!(
            document = %ctx.document.display_name(),
            definitions = definitions.len(),
            replaced,
            pruned,
            "Expanded abbreviations"
        );
        Ok(())
    }
}

/// Remove every definition from `document` and return them.
///
/// A definition may sit anywhere inside a text node, including in the middle
/// of a line. Only the matched span is removed; surrounding text stays.
pub fn collect_definitions(document: &mut Document) -> Definitions {
    let mut definitions = Definitions::new();

    FindReplace::new()
        .rule(DEFINITION_PATTERN.clone(), |caps| {
            let short = caps[1].to_string();
            let expansion = caps[2].to_string();
            tracing::debug!(%short, %expansion, "Found abbreviation definition");
            // A redefinition keeps the entry where it was first defined
            if let Some(previous) = definitions.replace(short, expansion) {
                tracing::debug!(%previous, "Abbreviation redefined, keeping the later definition");
            }
            Replacement::Remove
        })
        .apply(document);

    definitions
}

/// Wrap every whole-word occurrence of a defined short form in an `Abbr`.
///
/// Word boundaries are ASCII: a non-ASCII letter next to a short form counts
/// as a boundary. Returns the number of references created.
pub fn substitute_references(document: &mut Document, definitions: &Definitions) -> Result<usize> {
    if definitions.is_empty() {
        return Ok(0);
    }

    let mut rules = FindReplace::new().ignore(|inline| matches!(inline, Inline::Abbr(_)));
    for (short, expansion) in definitions {
        let source = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(short));
        let pattern = Regex::new(&source).map_err(|e| {
            AbbrError::Transform(format!("Invalid pattern for abbreviation '{}': {}", short, e))
        })?;
        rules.push(pattern, move |caps| {
            let short = &caps[0];
            tracing::trace!(%short, "Substituted abbreviation reference");
            Replacement::Inlines(vec![Inline::Abbr(Abbr::new(short, expansion.as_str()))])
        });
    }

    Ok(rules.apply(document))
}

/// Drop paragraphs with no children, at any depth. Returns how many were removed.
pub fn remove_empty_paragraphs(document: &mut Document) -> usize {
    remove_blocks(document, Block::is_empty_paragraph)
}
