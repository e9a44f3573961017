//! # Rendering Module
//!
//! Styled terminal output via the `outstanding` crate.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! need Unicode-aware processing. Templates handle presentation:
//! - Style selection from semantic names computed here
//! - Line arrangement and the empty-listing message
//!
//! Every public function takes `use_color: Option<bool>`: `None` lets
//! `outstanding` detect the terminal, `Some(false)` forces plain text.

use super::styles::{names, RECIPE_THEME};
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE, RECIPE_TEMPLATE};
use outstanding::{render, render_with_color, ThemeChoice};
use recipebox::commands::{CmdMessage, CmdResult, MessageLevel};
use recipebox::model::{Difficulty, Recipe};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const FAVORITE_MARKER: &str = "♥";
pub const NOT_FAVORITE_MARKER: &str = "♡";

const DIFFICULTY_WIDTH: usize = 6;
const TIME_WIDTH: usize = 7;
const DESCRIPTION_INDENT: usize = 6;

#[derive(Serialize)]
struct CardData {
    marker: &'static str,
    marker_style: &'static str,
    index: String,
    title: String,
    padding: String,
    difficulty: String,
    difficulty_style: &'static str,
    time: String,
    description: String,
}

#[derive(Serialize)]
struct ListData {
    cards: Vec<CardData>,
    counter: String,
}

#[derive(Serialize)]
struct RecipeData {
    marker: &'static str,
    marker_style: &'static str,
    index: String,
    title: String,
    category: Option<String>,
    description: String,
    time: String,
    difficulty: String,
    difficulty_style: &'static str,
    ingredients: Vec<String>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    let theme = ThemeChoice::from(&*RECIPE_THEME);
    match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the visible cards followed by the "Showing N of M" counter.
pub fn render_recipe_list(result: &CmdResult, use_color: Option<bool>) -> String {
    let cards = result
        .listed_recipes
        .iter()
        .map(|dr| card_data(&dr.recipe, dr.is_favorite))
        .collect();

    let data = ListData {
        cards,
        counter: result.counts.to_string(),
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

fn card_data(recipe: &Recipe, is_favorite: bool) -> CardData {
    let (marker, marker_style) = marker(is_favorite);
    let index = format!("{}. ", recipe.id);

    // marker + space, index, title, padding, difficulty, two spaces, time
    let fixed_width = marker.width() + 1 + index.width() + DIFFICULTY_WIDTH + 2 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let title = truncate_to_width(&recipe.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()));

    CardData {
        marker,
        marker_style,
        index,
        title,
        padding,
        difficulty: format!("{:<width$}", recipe.difficulty.as_str(), width = DIFFICULTY_WIDTH),
        difficulty_style: difficulty_style(recipe.difficulty),
        time: format!("{:>width$}", format_minutes(recipe.time), width = TIME_WIDTH),
        description: truncate_to_width(
            &recipe.description,
            LINE_WIDTH.saturating_sub(DESCRIPTION_INDENT),
        ),
    }
}

/// Renders the full card for a single recipe.
pub fn render_recipe_detail(recipe: &Recipe, is_favorite: bool, use_color: Option<bool>) -> String {
    let (marker, marker_style) = marker(is_favorite);
    let data = RecipeData {
        marker,
        marker_style,
        index: format!("{}. ", recipe.id),
        title: recipe.title.clone(),
        category: recipe.category.as_ref().map(|c| format!("({})", c)),
        description: recipe.description.clone(),
        time: format_minutes(recipe.time),
        difficulty: recipe.difficulty.to_string(),
        difficulty_style: difficulty_style(recipe.difficulty),
        ingredients: recipe.ingredients.clone(),
    };
    render_template(RECIPE_TEMPLATE, &data, use_color)
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

fn marker(is_favorite: bool) -> (&'static str, &'static str) {
    if is_favorite {
        (FAVORITE_MARKER, names::FAVORITE)
    } else {
        (NOT_FAVORITE_MARKER, names::NOT_FAVORITE)
    }
}

fn difficulty_style(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => names::EASY,
        Difficulty::Medium => names::MEDIUM,
        Difficulty::Hard => names::HARD,
    }
}

fn format_minutes(minutes: u32) -> String {
    format!("{} min", minutes)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
