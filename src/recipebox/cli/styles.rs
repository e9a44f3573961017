//! Styles for the recipebox CLI.
//!
//! Templates refer to semantic style names only; this module maps them to
//! console styles. Every name a template can ask for must be registered here,
//! otherwise `outstanding` prefixes the text with its missing-style marker.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

pub mod names {
    pub const FAVORITE: &str = "favorite";
    pub const NOT_FAVORITE: &str = "not_favorite";
    pub const INDEX: &str = "index";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const TIME: &str = "time";
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const COUNTER: &str = "counter";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub static RECIPE_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    Theme::new()
        .add(names::FAVORITE, Style::new().red())
        .add(names::NOT_FAVORITE, muted.clone())
        .add(names::INDEX, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::DESCRIPTION, muted.clone())
        .add(names::TIME, muted.clone().italic())
        .add(names::EASY, Style::new().green())
        .add(names::MEDIUM, Style::new().yellow())
        .add(names::HARD, Style::new().red())
        .add(names::LABEL, Style::new().bold())
        .add(names::MUTED, muted.clone())
        .add(names::COUNTER, muted.italic())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});
