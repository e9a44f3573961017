use crate::error::RecipeError;
use crate::model::{Difficulty, Recipe};
use std::fmt;
use std::str::FromStr;

/// Recipes at or under this many minutes count as quick.
pub const QUICK_TIME_LIMIT: u32 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterKey {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
    Quick,
    Favorites,
}

impl FilterKey {
    pub const ALL_KEYS: [FilterKey; 6] = [
        FilterKey::All,
        FilterKey::Easy,
        FilterKey::Medium,
        FilterKey::Hard,
        FilterKey::Quick,
        FilterKey::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::Easy => "easy",
            FilterKey::Medium => "medium",
            FilterKey::Hard => "hard",
            FilterKey::Quick => "quick",
            FilterKey::Favorites => "favorites",
        }
    }

    /// Unknown keys fall back to `All`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for FilterKey {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL_KEYS
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| RecipeError::UnknownKey {
                kind: "filter",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow `list` by `key`, preserving order.
///
/// `favorites` must be the live favorites set so a toggle shows up on the next
/// call.
pub fn filter_by_attribute<'a>(
    list: Vec<&'a Recipe>,
    key: FilterKey,
    favorites: &[u32],
) -> Vec<&'a Recipe> {
    match key {
        FilterKey::All => list,
        FilterKey::Easy => by_difficulty(list, Difficulty::Easy),
        FilterKey::Medium => by_difficulty(list, Difficulty::Medium),
        FilterKey::Hard => by_difficulty(list, Difficulty::Hard),
        FilterKey::Quick => list
            .into_iter()
            .filter(|r| r.time <= QUICK_TIME_LIMIT)
            .collect(),
        FilterKey::Favorites => list
            .into_iter()
            .filter(|r| favorites.contains(&r.id))
            .collect(),
    }
}

fn by_difficulty(list: Vec<&Recipe>, level: Difficulty) -> Vec<&Recipe> {
    list.into_iter().filter(|r| r.difficulty == level).collect()
}
