/*
 * remove.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Predicate-driven block removal.
 */

use crate::block::{Block, Blocks};
use crate::document::Document;

/// Remove every block, at any depth, for which `predicate` holds.
///
/// Containers left empty by the removal are kept; only blocks matching the
/// predicate themselves are dropped. Returns the number of removed blocks.
pub fn remove_blocks<P>(document: &mut Document, predicate: P) -> usize
where
    P: Fn(&Block) -> bool,
{
    remove_from(&mut document.blocks, &predicate)
}

fn remove_from<P>(blocks: &mut Blocks, predicate: &P) -> usize
where
    P: Fn(&Block) -> bool,
{
    let before = blocks.len();
    blocks.retain(|block| !predicate(block));
    let mut removed = before - blocks.len();

    for block in blocks.iter_mut() {
        for child in block.child_blocks_mut() {
            removed += remove_from(child, predicate);
        }
    }
    removed
}
