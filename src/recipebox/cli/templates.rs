//! # CLI Templates
//!
//! Terminal output goes through minijinja templates rendered by `outstanding`.
//! The templates live as standalone files next to this module and are embedded
//! at compile time.
//!
//! Layout math (widths, truncation, padding) happens in `render.rs`; templates
//! only pick styles and arrange lines. Styles are always chosen by semantic name
//! (`title`, `time`, `favorite`), never by color.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const RECIPE_TEMPLATE: &str = include_str!("templates/recipe.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
