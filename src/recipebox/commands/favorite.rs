use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::favorites::FavoritesStore;
use crate::store::KeyValueStore;

/// Toggle `id` in the favorites set and describe what happened.
///
/// Membership flips even when `id` is not in the catalog; the set is keyed by
/// id alone.
pub fn toggle<S: KeyValueStore>(
    favorites: &mut FavoritesStore<S>,
    catalog: &Catalog,
    id: u32,
) -> CmdResult {
    let now_favorite = favorites.toggle(id);
    let mut result = CmdResult::default();

    match catalog.get(id) {
        Some(recipe) => {
            let verb = if now_favorite {
                "Added to favorites"
            } else {
                "Removed from favorites"
            };
            result.add_message(CmdMessage::success(format!(
                "{} ({}): {}",
                verb, id, recipe.title
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Recipe {} is not in the catalog (favorite {})",
                id,
                if now_favorite { "set" } else { "cleared" }
            )));
        }
    }

    result
}
