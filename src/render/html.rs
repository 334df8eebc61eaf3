use html_escape::{encode_double_quoted_attribute, encode_text};

use super::View;
use crate::app::RecipeBox;
use crate::model::Recipe;
use crate::storage::KeyValueStore;

/// Markup for the results container
pub fn render_html(view: &View<'_>) -> String {
    match view {
        View::Recipes(recipes) => recipes.iter().map(|r| recipe_block(r)).collect(),
        _ => format!(
            "<div class=\"no-recipes\">{}</div>\n",
            view.empty_message().unwrap_or_default()
        ),
    }
}

fn recipe_block(recipe: &Recipe) -> String {
    let mut out = String::from("<div class=\"recipe\">\n");
    out.push_str(&format!("  <h3>{}</h3>\n", encode_text(&recipe.title)));

    if !recipe.cuisine.is_empty() {
        out.push_str(&format!(
            "  <p><strong>Cuisine:</strong> {}</p>\n",
            encode_text(&recipe.cuisine)
        ));
    }

    out.push_str("  <p><strong>Ingredients:</strong></p>\n  <ul>");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("<li>{}</li>", encode_text(ingredient)));
    }
    out.push_str("</ul>\n");

    if !recipe.instructions.is_empty() {
        out.push_str(&format!(
            "  <p><strong>Instructions:</strong> {}</p>\n",
            encode_text(&recipe.instructions)
        ));
    }

    let id = encode_double_quoted_attribute(&recipe.id);
    out.push_str("  <div class=\"recipe-actions\">\n");
    out.push_str(&format!(
        "    <button class=\"edit-btn\" data-action=\"edit\" data-id=\"{}\">Edit</button>\n",
        id
    ));
    out.push_str(&format!(
        "    <button class=\"delete-btn\" data-action=\"delete\" data-id=\"{}\">Delete</button>\n",
        id
    ));
    out.push_str("  </div>\n</div>\n");
    out
}

/// A standalone document: form, search controls and results
pub fn render_page<S: KeyValueStore>(app: &RecipeBox<S>) -> String {
    let form = app.form();
    let draft = form.draft();
    let mode = form.mode();
    let search = app.search();
    let cuisines = app.cuisines();

    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Recipe Box</title>\n</head>\n<body>\n",
    );

    out.push_str("<form id=\"recipeForm\">\n");
    out.push_str(&format!(
        "  <input type=\"hidden\" id=\"recipeId\" value=\"{}\">\n",
        attr(mode.editing_id().unwrap_or_default())
    ));
    out.push_str(&format!(
        "  <input type=\"text\" id=\"title\" value=\"{}\" required>\n",
        attr(&draft.title)
    ));
    out.push_str(&format!(
        "  <textarea id=\"ingredients\" required>{}</textarea>\n",
        encode_text(&draft.ingredients)
    ));
    out.push_str(&format!(
        "  <textarea id=\"instructions\">{}</textarea>\n",
        encode_text(&draft.instructions)
    ));
    out.push_str(&format!(
        "  <input type=\"text\" id=\"cuisine\" value=\"{}\">\n",
        attr(&draft.cuisine)
    ));
    out.push_str(&format!(
        "  <button type=\"submit\" id=\"submitBtn\">{}</button>\n",
        mode.submit_label()
    ));
    out.push_str(&format!(
        "  <button type=\"button\" id=\"cancelBtn\"{}>Cancel</button>\n",
        hidden_class(!mode.shows_cancel())
    ));
    out.push_str("</form>\n");

    out.push_str("<div class=\"search\">\n");
    out.push_str(&format!(
        "  <input type=\"text\" id=\"basicSearch\" value=\"{}\">\n",
        attr(&search.basic_term)
    ));
    out.push_str(&cuisine_select("filterCuisine", &cuisines, &search.cuisine_filter));
    out.push_str("  <button type=\"button\" id=\"advancedSearchBtn\">Advanced Search</button>\n");
    out.push_str("</div>\n");

    out.push_str(&format!(
        "<div id=\"advancedSearch\"{}>\n",
        hidden_class(!app.advanced_open())
    ));
    out.push_str(&format!(
        "  <input type=\"text\" id=\"searchTitle\" value=\"{}\">\n",
        attr(&search.advanced.title)
    ));
    out.push_str(&format!(
        "  <input type=\"text\" id=\"searchIngredient\" value=\"{}\">\n",
        attr(&search.advanced.ingredient)
    ));
    out.push_str(&cuisine_select("searchCuisine", &cuisines, &search.advanced.cuisine));
    out.push_str("  <button type=\"button\" id=\"advancedSearchSubmit\">Search</button>\n");
    out.push_str("  <button type=\"button\" id=\"resetSearch\">Reset</button>\n");
    out.push_str("</div>\n");

    out.push_str("<div id=\"recipesList\">\n");
    out.push_str(&render_html(&app.view()));
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn cuisine_select(id: &str, cuisines: &[&str], selected: &str) -> String {
    let mut out = format!("  <select id=\"{}\">\n", id);
    out.push_str("    <option value=\"\">All Cuisines</option>\n");
    for cuisine in cuisines {
        let marker = if *cuisine == selected { " selected" } else { "" };
        out.push_str(&format!(
            "    <option value=\"{}\"{}>{}</option>\n",
            attr(cuisine),
            marker,
            encode_text(cuisine)
        ));
    }
    out.push_str("  </select>\n");
    out
}

fn attr(value: &str) -> std::borrow::Cow<'_, str> {
    encode_double_quoted_attribute(value)
}

fn hidden_class(hidden: bool) -> &'static str {
    if hidden {
        " class=\"hidden\""
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, cuisine: &str, instructions: &str) -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: title.to_string(),
            ingredients: vec!["Salt".to_string(), "Pepper".to_string()],
            instructions: instructions.to_string(),
            cuisine: cuisine.to_string(),
        }
    }

    #[test]
    fn test_empty_views_render_their_messages() {
        assert!(render_html(&View::Empty).contains("Add your first recipe above!"));
        assert!(render_html(&View::NoMatches).contains("No recipes match your search criteria."));
    }

    #[test]
    fn test_optional_lines_are_omitted_when_blank() {
        let r = recipe("Plain", "", "");
        let html = render_html(&View::Recipes(vec![&r]));
        assert!(!html.contains("Cuisine:"));
        assert!(!html.contains("Instructions:"));
        assert!(html.contains("<li>Salt</li><li>Pepper</li>"));
        assert!(html.contains("data-action=\"edit\" data-id=\"r1\""));
        assert!(html.contains("data-action=\"delete\" data-id=\"r1\""));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let r = recipe("<script>alert(1)</script>", "Thai & Lao", "Stir <well>");
        let html = render_html(&View::Recipes(vec![&r]));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Thai &amp; Lao"));
    }
}
