use crate::model::{Counts, DisplayRecipe};

pub mod favorite;
pub mod filter;
pub mod list;
pub mod search;
pub mod sort;

pub use filter::FilterKey;
pub use sort::SortKey;

/// The user-driven inputs to the listing pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    pub filter: FilterKey,
    pub sort: SortKey,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CmdResult {
    pub listed_recipes: Vec<DisplayRecipe>,
    pub counts: Counts,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_counts(mut self, counts: Counts) -> Self {
        self.counts = counts;
        self
    }
}
