use recipebox::api::RecipeApi;
use recipebox::catalog::Catalog;
use recipebox::commands::{FilterKey, SortKey};
use recipebox::favorites::FAVORITES_KEY;
use recipebox::model::Counts;
use recipebox::store::fs::FileStore;
use recipebox::store::KeyValueStore;
use std::time::{Duration, Instant};

fn titles(api: &RecipeApi<FileStore>) -> Vec<String> {
    api.visible_recipes()
        .iter()
        .map(|d| d.recipe.title.clone())
        .collect()
}

#[test]
fn favorites_survive_a_new_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut api = RecipeApi::new(Catalog::builtin(), FileStore::new(dir.path().to_path_buf()));
    api.toggle_favorite(6);
    api.toggle_favorite(1);
    drop(api);

    let store = FileStore::new(dir.path().to_path_buf());
    assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[6,1]"));

    let mut api = RecipeApi::new(Catalog::builtin(), store);
    api.set_filter(FilterKey::Favorites);
    assert_eq!(titles(&api), vec!["Pasta", "Pancakes"]);

    api.set_sort(SortKey::Name);
    assert_eq!(titles(&api), vec!["Pancakes", "Pasta"]);
}

#[test]
fn typing_session_applies_only_settled_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = RecipeApi::new(Catalog::builtin(), FileStore::new(dir.path().to_path_buf()));
    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);

    let mut recomputes = 0;
    for (ms, text) in [(0, "e"), (90, "eg"), (180, "egg"), (260, "eggs")] {
        if api.tick(at(ms)) {
            recomputes += 1;
        }
        api.set_search_text(text, at(ms));
    }
    for ms in (300..=800).step_by(20) {
        if api.tick(at(ms)) {
            recomputes += 1;
        }
    }

    assert_eq!(recomputes, 1);
    assert_eq!(api.control_state().search, "eggs");
    assert_eq!(titles(&api), vec!["Pancakes", "Ramen"]);
    assert_eq!(api.counts(), Counts::new(2, 8));
}

#[test]
fn counts_always_report_full_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = RecipeApi::new(Catalog::builtin(), FileStore::new(dir.path().to_path_buf()));

    for key in FilterKey::ALL_KEYS {
        api.set_filter(key);
        let counts = api.counts();
        assert_eq!(counts.total, 8);
        assert!(counts.shown <= counts.total);
        assert_eq!(counts.shown, api.visible_recipes().len());
    }
}
