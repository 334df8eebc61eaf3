use recipe_box::render::{NO_MATCHES_MESSAGE, NO_RECIPES_MESSAGE};
use recipe_box::{
    AdvancedFilter, Dialogs, MemoryStore, Message, RecipeBox, RecipeDraft, RecipeStorage, View,
};

struct NoDialogs;

impl Dialogs for NoDialogs {
    fn alert(&mut self, message: &str) {
        panic!("unexpected alert: {}", message);
    }

    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

fn add(app: &mut RecipeBox<MemoryStore>, title: &str, cuisine: &str, ingredients: &str) {
    let draft = RecipeDraft {
        title: title.to_string(),
        ingredients: ingredients.to_string(),
        instructions: String::new(),
        cuisine: cuisine.to_string(),
    };
    app.update(Message::EditDraft(draft), &mut NoDialogs);
    app.update(Message::Submit, &mut NoDialogs);
}

fn kitchen() -> RecipeBox<MemoryStore> {
    let mut app = RecipeBox::open(RecipeStorage::new(MemoryStore::new()));
    add(&mut app, "Pasta", "Italian", "Tomato\nGarlic");
    add(&mut app, "Guacamole", "Mexican", "Avocado\nLime");
    add(&mut app, "Salsa", "Mexican", "Tomato\nOnion");
    add(&mut app, "Toast", "", "Bread");
    app
}

fn titles(app: &RecipeBox<MemoryStore>) -> Vec<String> {
    match app.view() {
        View::Recipes(recipes) => recipes.iter().map(|r| r.title.clone()).collect(),
        _ => Vec::new(),
    }
}

#[test]
fn test_basic_search_matches_title_or_ingredient() {
    let mut app = kitchen();
    app.update(Message::BasicSearch("TOMATO".to_string()), &mut NoDialogs);
    assert_eq!(titles(&app), vec!["Pasta", "Salsa"]);

    app.update(Message::BasicSearch("toa".to_string()), &mut NoDialogs);
    assert_eq!(titles(&app), vec!["Toast"]);
}

#[test]
fn test_cuisine_filter_excludes_blank_cuisine() {
    let mut app = kitchen();
    app.update(Message::FilterCuisine("Mexican".to_string()), &mut NoDialogs);
    assert_eq!(titles(&app), vec!["Guacamole", "Salsa"]);
}

#[test]
fn test_all_stages_narrow_together() {
    let mut app = kitchen();
    app.update(Message::BasicSearch("tomato".to_string()), &mut NoDialogs);
    app.update(Message::FilterCuisine("Mexican".to_string()), &mut NoDialogs);
    assert_eq!(titles(&app), vec!["Salsa"]);

    app.update(
        Message::ApplyAdvanced(AdvancedFilter {
            ingredient: "avocado".to_string(),
            ..Default::default()
        }),
        &mut NoDialogs,
    );
    assert_eq!(app.view(), View::NoMatches);
}

#[test]
fn test_advanced_search_alone() {
    let mut app = kitchen();
    app.update(
        Message::ApplyAdvanced(AdvancedFilter {
            title: "sa".to_string(),
            ingredient: "onion".to_string(),
            cuisine: "Mexican".to_string(),
        }),
        &mut NoDialogs,
    );
    assert_eq!(titles(&app), vec!["Salsa"]);
}

#[test]
fn test_reset_restores_full_list() {
    let mut app = kitchen();
    app.update(Message::BasicSearch("zzz".to_string()), &mut NoDialogs);
    assert_eq!(app.view(), View::NoMatches);

    app.update(Message::ResetSearch, &mut NoDialogs);
    assert_eq!(titles(&app), vec!["Pasta", "Guacamole", "Salsa", "Toast"]);
}

#[test]
fn test_empty_messages_never_swap() {
    let mut empty = RecipeBox::open(RecipeStorage::new(MemoryStore::new()));
    empty.update(Message::BasicSearch("anything".to_string()), &mut NoDialogs);
    assert_eq!(empty.view().empty_message(), Some(NO_RECIPES_MESSAGE));

    let mut app = kitchen();
    app.update(Message::BasicSearch("anything".to_string()), &mut NoDialogs);
    assert_eq!(app.view().empty_message(), Some(NO_MATCHES_MESSAGE));
}

#[test]
fn test_cuisine_options_follow_the_list() {
    let app = kitchen();
    assert_eq!(app.cuisines(), vec!["Italian", "Mexican"]);
}
