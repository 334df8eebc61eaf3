//! Display model and renderers.
//!
//! A [`View`] is rebuilt from scratch for each render and carries no memory
//! of earlier ones. The renderers are pure functions of that view.

mod html;
mod text;

pub use html::{render_html, render_page};
pub use text::render_text;

use crate::model::Recipe;

pub const NO_RECIPES_MESSAGE: &str = "No recipes found. Add your first recipe above!";
pub const NO_MATCHES_MESSAGE: &str = "No recipes match your search criteria.";

/// What the results area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// No recipes exist at all
    Empty,
    /// Recipes exist but none pass the active filters
    NoMatches,
    /// Filtered records in list order
    Recipes(Vec<&'a Recipe>),
}

impl<'a> View<'a> {
    /// Choose the view for a source list and its projection.
    ///
    /// An empty source list always yields [`View::Empty`], whatever the filters.
    pub fn build(all: &'a [Recipe], filtered: Vec<&'a Recipe>) -> Self {
        if all.is_empty() {
            View::Empty
        } else if filtered.is_empty() {
            View::NoMatches
        } else {
            View::Recipes(filtered)
        }
    }

    /// Message shown instead of recipes, if any
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            View::Empty => Some(NO_RECIPES_MESSAGE),
            View::NoMatches => Some(NO_MATCHES_MESSAGE),
            View::Recipes(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast() -> Recipe {
        Recipe {
            id: "1".to_string(),
            title: "Toast".to_string(),
            ingredients: vec!["Bread".to_string()],
            instructions: String::new(),
            cuisine: String::new(),
        }
    }

    #[test]
    fn test_empty_list_is_empty_view() {
        assert_eq!(View::build(&[], Vec::new()), View::Empty);
        assert_eq!(View::Empty.empty_message(), Some(NO_RECIPES_MESSAGE));
    }

    #[test]
    fn test_no_survivors_is_no_matches() {
        let all = vec![toast()];
        let view = View::build(&all, Vec::new());
        assert_eq!(view, View::NoMatches);
        assert_eq!(view.empty_message(), Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_survivors_are_listed() {
        let all = vec![toast()];
        let view = View::build(&all, all.iter().collect());
        assert_eq!(view, View::Recipes(vec![&all[0]]));
        assert_eq!(view.empty_message(), None);
    }
}
