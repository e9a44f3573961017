use crate::model::Recipe;

/// Keep recipes whose title, description, or any ingredient contains `query`,
/// ignoring case. An empty query hands the list back untouched.
pub fn filter_by_search<'a>(list: Vec<&'a Recipe>, query: &str) -> Vec<&'a Recipe> {
    if query.is_empty() {
        return list;
    }
    let q = query.to_lowercase();
    list.into_iter().filter(|r| matches(r, &q)).collect()
}

fn matches(recipe: &Recipe, q: &str) -> bool {
    recipe.title.to_lowercase().contains(q)
        || recipe.description.to_lowercase().contains(q)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(q))
}
