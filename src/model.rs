use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A persisted recipe record.
///
/// `instructions` and `cuisine` default to empty strings so records written
/// before those fields existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub cuisine: String,
}

impl Recipe {
    /// Build a new record from validated fields, assigning a fresh id.
    pub fn create(fields: RecipeFields) -> Self {
        Self::with_id(new_recipe_id(), fields)
    }

    /// Build a record carrying an existing id. Used by the update transition,
    /// which replaces a record wholesale.
    pub fn with_id(id: impl Into<String>, fields: RecipeFields) -> Self {
        Recipe {
            id: id.into(),
            title: fields.title,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            cuisine: fields.cuisine,
        }
    }
}

/// Generate a collision-resistant recipe id.
pub fn new_recipe_id() -> String {
    Uuid::new_v4().to_string()
}

/// Raw form input, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    /// One ingredient per line
    pub ingredients: String,
    pub instructions: String,
    pub cuisine: String,
}

/// Normalized fields produced by a successful [`RecipeDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFields {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cuisine: String,
}

impl RecipeDraft {
    /// Populate a draft from an existing record for editing.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        RecipeDraft {
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.clone(),
            cuisine: recipe.cuisine.clone(),
        }
    }

    /// Check the required fields and normalize the draft.
    ///
    /// Title and ingredients are trimmed and must be non-empty. Ingredient
    /// lines are split on newlines; whitespace-only lines are dropped and the
    /// rest kept verbatim.
    pub fn validate(&self) -> Result<RecipeFields, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let ingredients = self.ingredients.trim();
        if ingredients.is_empty() {
            return Err(ValidationError::MissingIngredients);
        }

        Ok(RecipeFields {
            title: title.to_string(),
            ingredients: split_ingredients(ingredients),
            instructions: self.instructions.trim().to_string(),
            cuisine: self.cuisine.clone(),
        })
    }
}

fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, ingredients: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            ingredients: ingredients.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_splits_ingredients_and_drops_blank_lines() {
        let fields = draft("Soup", "Water\n\n   \nSalt").validate().unwrap();
        assert_eq!(fields.title, "Soup");
        assert_eq!(fields.ingredients, vec!["Water", "Salt"]);
    }

    #[test]
    fn test_validate_trims_title_and_instructions() {
        let mut d = draft("  Soup  ", "Water");
        d.instructions = "  Boil.  ".to_string();
        d.cuisine = "French".to_string();

        let fields = d.validate().unwrap();
        assert_eq!(fields.title, "Soup");
        assert_eq!(fields.instructions, "Boil.");
        assert_eq!(fields.cuisine, "French");
    }

    #[test]
    fn test_validate_rejects_missing_title() {
        assert_eq!(
            draft("   ", "Water").validate(),
            Err(ValidationError::MissingTitle)
        );
    }

    #[test]
    fn test_validate_rejects_blank_ingredients() {
        assert_eq!(
            draft("Soup", " \n\n ").validate(),
            Err(ValidationError::MissingIngredients)
        );
    }

    #[test]
    fn test_from_recipe_rejoins_ingredients() {
        let recipe = Recipe {
            id: "1".to_string(),
            title: "Pasta".to_string(),
            ingredients: vec!["Tomato".to_string(), "Basil".to_string()],
            instructions: String::new(),
            cuisine: "Italian".to_string(),
        };

        let d = RecipeDraft::from_recipe(&recipe);
        assert_eq!(d.ingredients, "Tomato\nBasil");
        assert_eq!(d.cuisine, "Italian");
    }

    #[test]
    fn test_missing_optional_fields_deserialize_as_empty() {
        let json = r#"{"id":"42","title":"Toast","ingredients":["Bread"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.instructions, "");
        assert_eq!(recipe.cuisine, "");
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let fields = draft("Soup", "Water").validate().unwrap();
        let a = Recipe::create(fields.clone());
        let b = Recipe::create(fields);
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }
}
