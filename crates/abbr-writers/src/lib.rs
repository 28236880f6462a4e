/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Output writers for the abbr document tree.
 */

pub mod html;
pub mod json;
