/*
 * find_replace.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Regex find-and-replace over the text nodes of a document.
 */

//! Regex find-and-replace over the text nodes of a document.
//!
//! A [`FindReplace`] holds an ordered list of rules. Each rule is a
//! [`Regex`] plus a replacer closure that decides what a match becomes:
//!
//! - [`Replacement::Remove`] deletes the matched span,
//! - [`Replacement::Inlines`] splices new nodes in its place,
//! - [`Replacement::Keep`] leaves the match as ordinary text.
//!
//! Rules run one after the other; each rule walks every [`Inline::Text`]
//! of the document in document order. Within a rule, nodes produced by a
//! replacement are never scanned again. Verbatim content (code spans, code
//! blocks, raw nodes) is never visited, since it is not stored as `Text`.
//!
//! ```ignore
//! let mut rules = FindReplace::new().rule(Regex::new(r"\bfoo\b")?, |_caps| {
//!     Replacement::Inlines(vec![Inline::text("bar")])
//! });
//! let replaced = rules.apply(&mut document);
//! ```

use crate::block::Blocks;
use crate::document::Document;
use crate::inline::{Inline, Inlines};
use regex::{Captures, Regex};

/// What a single regex match is rewritten to.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Leave the matched text in place.
    Keep,
    /// Delete the matched text.
    Remove,
    /// Replace the matched text with these nodes.
    Inlines(Inlines),
}

type Replacer<'r> = Box<dyn FnMut(&Captures<'_>) -> Replacement + 'r>;
type IgnorePredicate<'r> = Box<dyn Fn(&Inline) -> bool + 'r>;
type Ignore<'a> = Option<&'a dyn Fn(&Inline) -> bool>;

struct Rule<'r> {
    pattern: Regex,
    replacer: Replacer<'r>,
}

/// An ordered set of find-and-replace rules applied to a [`Document`].
pub struct FindReplace<'r> {
    rules: Vec<Rule<'r>>,
    ignore: Option<IgnorePredicate<'r>>,
}

impl<'r> FindReplace<'r> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            ignore: None,
        }
    }

    /// Add a rule (builder form).
    pub fn rule<F>(mut self, pattern: Regex, replacer: F) -> Self
    where
        F: FnMut(&Captures<'_>) -> Replacement + 'r,
    {
        self.push(pattern, replacer);
        self
    }

    /// Add a rule. Rules run in the order they are added.
    pub fn push<F>(&mut self, pattern: Regex, replacer: F)
    where
        F: FnMut(&Captures<'_>) -> Replacement + 'r,
    {
        self.rules.push(Rule {
            pattern,
            replacer: Box::new(replacer),
        });
    }

    /// Skip inline nodes (and their whole subtree) for which `predicate` holds.
    pub fn ignore<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Inline) -> bool + 'r,
    {
        self.ignore = Some(Box::new(predicate));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `document`.
    ///
    /// Returns the number of matches that were removed or replaced
    /// (matches answered with [`Replacement::Keep`] are not counted).
    pub fn apply(&mut self, document: &mut Document) -> usize {
        let ignore: Ignore<'_> = self.ignore.as_deref();
        let mut count = 0;
        for rule in &mut self.rules {
            count += rewrite_blocks(&mut document.blocks, rule, ignore);
        }
        count
    }
}

impl Default for FindReplace<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule<'_> {
    /// Split `text` around the matches of this rule.
    ///
    /// Returns `None` when nothing was removed or replaced, so the caller can
    /// keep the original node untouched.
    fn split(&mut self, text: &str, count: &mut usize) -> Option<Inlines> {
        let mut pieces = Vec::new();
        let mut last = 0;
        let mut changed = false;

        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let nodes = match (self.replacer)(&caps) {
                Replacement::Keep => continue,
                Replacement::Remove => Vec::new(),
                Replacement::Inlines(nodes) => nodes,
            };
            if whole.start() > last {
                pieces.push(Inline::text(&text[last..whole.start()]));
            }
            pieces.extend(nodes);
            last = whole.end();
            changed = true;
            *count += 1;
        }

        if !changed {
            return None;
        }
        if last < text.len() {
            pieces.push(Inline::text(&text[last..]));
        }
        Some(pieces)
    }
}

fn rewrite_blocks(blocks: &mut Blocks, rule: &mut Rule<'_>, ignore: Ignore<'_>) -> usize {
    let mut count = 0;
    for block in blocks.iter_mut() {
        if let Some(inlines) = block.inlines_mut() {
            count += rewrite_inlines(inlines, rule, ignore);
        }
        for child in block.child_blocks_mut() {
            count += rewrite_blocks(child, rule, ignore);
        }
    }
    count
}

fn rewrite_inlines(inlines: &mut Inlines, rule: &mut Rule<'_>, ignore: Ignore<'_>) -> usize {
    let mut count = 0;
    let mut out = Vec::with_capacity(inlines.len());

    for mut inline in std::mem::take(inlines) {
        if ignore.is_some_and(|skip| skip(&inline)) {
            out.push(inline);
            continue;
        }
        if let Inline::Text(text) = &inline {
            if let Some(pieces) = rule.split(&text.text, &mut count) {
                out.extend(pieces);
                continue;
            }
        } else if let Some(children) = inline.children_mut() {
            count += rewrite_inlines(children, rule, ignore);
        }
        out.push(inline);
    }

    *inlines = out;
    count
}
