use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry. Never mutated once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    /// Preparation time in minutes
    pub time: u32,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    // Display metadata only, no filter reads it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Recipe {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        difficulty: Difficulty,
        time: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            difficulty,
            time,
            description: description.into(),
            ingredients: Vec::new(),
            category: None,
        }
    }

    pub fn with_ingredients<I, T>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A visible recipe annotated with its favorite state at recompute time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecipe {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

/// The `(shown, total)` pair behind the "Showing N of M" counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub shown: usize,
    pub total: usize,
}

impl Counts {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} recipes", self.shown, self.total)
    }
}
