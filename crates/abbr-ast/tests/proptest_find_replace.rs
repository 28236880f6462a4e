/*
 * proptest_find_replace.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property-based tests for regex find-and-replace over text nodes.
 */

use abbr_ast::{Block, Document, FindReplace, Inline, Replacement};
use proptest::prelude::*;
use regex::Regex;

/// Lowercase words mixed with the marker word `DROP`.
fn gen_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![3 => "[a-z]{1,5}", 1 => Just("DROP".to_string())],
        1..12,
    )
}

fn paragraph_of(line: &str) -> Document {
    Document::new(vec![Block::paragraph(vec![Inline::text(line)])])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Removing every match deletes exactly the matched spans and nothing else.
    #[test]
    fn test_remove_deletes_every_match(tokens in gen_tokens()) {
        let mut doc = paragraph_of(&tokens.join(" "));

        let removed = FindReplace::new()
            .rule(Regex::new(r"\bDROP\b").unwrap(), |_| Replacement::Remove)
            .apply(&mut doc);

        let expected = tokens
            .iter()
            .map(|t| if t == "DROP" { "" } else { t.as_str() })
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(removed, tokens.iter().filter(|t| t.as_str() == "DROP").count());
        prop_assert_eq!(doc.plain_text(), expected);
    }

    /// A rule answering `Keep` never changes the tree.
    #[test]
    fn test_keep_is_identity(tokens in gen_tokens()) {
        let mut doc = paragraph_of(&tokens.join(" "));
        let before = doc.clone();

        let changed = FindReplace::new()
            .rule(Regex::new(r"\w+").unwrap(), |_| Replacement::Keep)
            .apply(&mut doc);

        prop_assert_eq!(changed, 0);
        prop_assert_eq!(doc, before);
    }
}
