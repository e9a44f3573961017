use crate::catalog::Catalog;
use crate::commands::filter::filter_by_attribute;
use crate::commands::search::filter_by_search;
use crate::commands::sort::apply_sort;
use crate::commands::{CmdResult, ControlState};
use crate::model::{Counts, DisplayRecipe, Recipe};

/// Run the listing pipeline over the whole catalog.
///
/// The order is fixed: search, then attribute filter, then sort. Sorting last
/// keeps the stable-sort guarantees on the final visible order.
pub fn run(catalog: &Catalog, state: &ControlState, favorites: &[u32]) -> CmdResult {
    let all: Vec<&Recipe> = catalog.recipes().iter().collect();
    let list = filter_by_search(all, &state.search);
    let list = filter_by_attribute(list, state.filter, favorites);
    let list = apply_sort(list, state.sort);

    let listed: Vec<DisplayRecipe> = list
        .into_iter()
        .map(|r| DisplayRecipe {
            recipe: r.clone(),
            is_favorite: favorites.contains(&r.id),
        })
        .collect();
    let counts = Counts::new(listed.len(), catalog.len());

    CmdResult::default()
        .with_listed_recipes(listed)
        .with_counts(counts)
}
