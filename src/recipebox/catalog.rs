//! # Recipe Catalog
//!
//! The catalog is the fixed, read-only list of recipes the application works on.
//! It is built once at startup, either from the built-in records or from a JSON
//! file (an array of recipe objects), and never changes afterwards.
//!
//! Catalog order matters: it is the order shown when no sort is active, and the
//! tie-breaking order for the stable sorts.
//!
//! The only validation performed is id uniqueness. Everything else in a record
//! is taken as-is.

use crate::error::{RecipeError, Result};
use crate::model::{Difficulty, Recipe};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(RecipeError::DuplicateId(recipe.id));
            }
        }
        Ok(Self { recipes })
    }

    /// Loads a catalog from a JSON array file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(RecipeError::Io)?;
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        Self::from_recipes(recipes)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin_recipes(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Pasta", Difficulty::Easy, 25, "Creamy Italian pasta")
            .with_ingredients(["pasta", "cheese", "milk"])
            .with_category("Italian"),
        Recipe::new(2, "Veg Biryani", Difficulty::Medium, 45, "Spicy rice dish")
            .with_ingredients(["rice", "vegetables", "spices"])
            .with_category("Indian"),
        Recipe::new(3, "Salad", Difficulty::Easy, 10, "Healthy fresh salad")
            .with_ingredients(["lettuce", "tomato", "cucumber"])
            .with_category("Healthy"),
        Recipe::new(4, "Paneer Tikka", Difficulty::Medium, 35, "Grilled cottage cheese cubes")
            .with_ingredients(["paneer", "yogurt", "spices", "capsicum"])
            .with_category("Indian"),
        Recipe::new(5, "Beef Wellington", Difficulty::Hard, 120, "Beef fillet baked in pastry")
            .with_ingredients(["beef", "puff pastry", "mushrooms", "ham"])
            .with_category("British"),
        Recipe::new(6, "Pancakes", Difficulty::Easy, 20, "Fluffy breakfast pancakes")
            .with_ingredients(["flour", "milk", "eggs", "butter"])
            .with_category("Breakfast"),
        Recipe::new(7, "Ramen", Difficulty::Hard, 90, "Slow simmered noodle soup")
            .with_ingredients(["noodles", "pork bones", "soy sauce", "eggs"])
            .with_category("Japanese"),
        Recipe::new(8, "Guacamole", Difficulty::Easy, 10, "Fresh avocado dip")
            .with_ingredients(["avocado", "lime", "onion", "cilantro"])
            .with_category("Mexican"),
    ]
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The three-recipe catalog used throughout the pipeline tests.
    pub fn small_catalog() -> Catalog {
        Catalog {
            recipes: vec![
                Recipe::new(1, "Pasta", Difficulty::Easy, 25, "Creamy Italian pasta")
                    .with_ingredients(["pasta", "cheese", "milk"]),
                Recipe::new(2, "Biryani", Difficulty::Medium, 45, "Spicy rice dish")
                    .with_ingredients(["rice", "vegetables", "spices"]),
                Recipe::new(3, "Salad", Difficulty::Easy, 10, "Healthy fresh salad")
                    .with_ingredients(["lettuce", "tomato", "cucumber"]),
            ],
        }
    }
}
