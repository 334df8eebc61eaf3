use super::View;

/// Plain-text rendering of the results, for terminals
pub fn render_text(view: &View<'_>) -> String {
    let View::Recipes(recipes) = view else {
        return format!("{}\n", view.empty_message().unwrap_or_default());
    };

    let mut out = String::new();
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}  [{}]\n", recipe.title, recipe.id));
        if !recipe.cuisine.is_empty() {
            out.push_str(&format!("Cuisine: {}\n", recipe.cuisine));
        }
        out.push_str("Ingredients:\n");
        for ingredient in &recipe.ingredients {
            out.push_str(&format!("  - {}\n", ingredient));
        }
        if !recipe.instructions.is_empty() {
            out.push_str(&format!("Instructions: {}\n", recipe.instructions));
        }
    }
    out
}
