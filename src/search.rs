//! Search and filter projection over the recipe list.
//!
//! Three stages narrow the list in order: the basic search term, the cuisine
//! dropdown, then the advanced search panel. A blank input disables its
//! stage; active stages always intersect.

use crate::model::Recipe;

/// Field values of the advanced search panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedFilter {
    pub title: String,
    pub ingredient: String,
    pub cuisine: String,
}

impl AdvancedFilter {
    pub fn is_active(&self) -> bool {
        !self.title.is_empty() || !self.ingredient.is_empty() || !self.cuisine.is_empty()
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        let title_match = self.title.is_empty() || contains_ignore_case(&recipe.title, &self.title);
        let ingredient_match =
            self.ingredient.is_empty() || any_ingredient_contains(recipe, &self.ingredient);
        let cuisine_match = self.cuisine.is_empty() || recipe.cuisine == self.cuisine;

        title_match && ingredient_match && cuisine_match
    }
}

/// Every active search input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub basic_term: String,
    pub cuisine_filter: String,
    pub advanced: AdvancedFilter,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        !self.basic_term.is_empty() || !self.cuisine_filter.is_empty() || self.advanced.is_active()
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        if !self.basic_term.is_empty()
            && !contains_ignore_case(&recipe.title, &self.basic_term)
            && !any_ingredient_contains(recipe, &self.basic_term)
        {
            return false;
        }

        if !self.cuisine_filter.is_empty() && recipe.cuisine != self.cuisine_filter {
            return false;
        }

        !self.advanced.is_active() || self.advanced.matches(recipe)
    }
}

/// Records that pass every active filter, in list order
pub fn project<'a>(recipes: &'a [Recipe], search: &SearchState) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| search.matches(r)).collect()
}

/// Distinct non-empty cuisines in order of first appearance
pub fn cuisine_options(recipes: &[Recipe]) -> Vec<&str> {
    let mut options: Vec<&str> = Vec::new();
    for recipe in recipes {
        let cuisine = recipe.cuisine.as_str();
        if !cuisine.is_empty() && !options.contains(&cuisine) {
            options.push(cuisine);
        }
    }
    options
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_ingredient_contains(recipe: &Recipe, needle: &str) -> bool {
    recipe
        .ingredients
        .iter()
        .any(|ingredient| contains_ignore_case(ingredient, needle))
}
