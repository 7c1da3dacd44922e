//! # CLI Templates
//!
//! Terminal output is rendered from taglet (minijinja) templates kept in
//! `templates/` and embedded here as string constants.
//!
//! Layout math (column widths) stays in `render.rs`; templates receive the
//! widths and only decide what gets printed and how it is styled. Line breaks
//! are explicit: every loop body trims its surroundings with `{%-` and emits
//! its own newline.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const COMPONENT_TEMPLATE: &str = include_str!("templates/component.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
