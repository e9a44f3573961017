use crate::error::RecipeError;
use crate::model::Recipe;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    None,
    Name,
    Time,
}

impl SortKey {
    pub const ALL_KEYS: [SortKey; 3] = [SortKey::None, SortKey::Name, SortKey::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Time => "time",
        }
    }

    /// Unknown keys fall back to `None`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SortKey::None),
            "name" | "title" => Ok(SortKey::Name),
            "time" => Ok(SortKey::Time),
            other => Err(RecipeError::UnknownKey {
                kind: "sort",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order `list` by `key`. Both orderings are stable; `None` leaves it alone.
pub fn apply_sort(mut list: Vec<&Recipe>, key: SortKey) -> Vec<&Recipe> {
    match key {
        SortKey::None => {}
        SortKey::Name => list.sort_by_cached_key(|r| title_key(&r.title)),
        SortKey::Time => list.sort_by_key(|r| r.time),
    }
    list
}

/// Collation key for titles.
///
/// Primary: lowercased base letters with accents stripped, so `Éclair` sorts
/// among the `e`s. Secondary: the lowercased title, so `resume` precedes
/// `résumé`. Titles differing only in case compare equal.
fn title_key(title: &str) -> (String, String) {
    let lowered = title.to_lowercase();
    let base = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    (base, lowered)
}
