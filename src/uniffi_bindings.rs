//! UniFFI bindings for recipe-box
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Each call opens the file store under the given data directory, runs one
//! controller transition and returns. The native UI owns the dialogs: deletes
//! arrive here already confirmed and validation failures come back as errors.

use std::fmt;

use crate::app::{Dialogs, Message, Outcome, RecipeBox};
use crate::config::AppConfig;
use crate::search::{project, AdvancedFilter, SearchState};
use crate::storage::FileStore;
use crate::{Recipe, RecipeDraft, RecipeError};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    /// Empty string if none
    pub instructions: String,
    /// Empty string if none
    pub cuisine: String,
}

impl From<&Recipe> for FfiRecipe {
    fn from(recipe: &Recipe) -> Self {
        FfiRecipe {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            cuisine: recipe.cuisine.clone(),
        }
    }
}

/// Raw form contents, ingredients one per line
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDraft {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub cuisine: String,
}

impl From<FfiRecipeDraft> for RecipeDraft {
    fn from(ffi: FfiRecipeDraft) -> Self {
        RecipeDraft {
            title: ffi.title,
            ingredients: ffi.ingredients,
            instructions: ffi.instructions,
            cuisine: ffi.cuisine,
        }
    }
}

/// Search inputs; blank fields are ignored
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearch {
    pub term: String,
    pub cuisine: String,
    pub advanced_title: String,
    pub advanced_ingredient: String,
    pub advanced_cuisine: String,
}

impl From<FfiSearch> for SearchState {
    fn from(ffi: FfiSearch) -> Self {
        SearchState {
            basic_term: ffi.term,
            cuisine_filter: ffi.cuisine,
            advanced: AdvancedFilter {
                title: ffi.advanced_title,
                ingredient: ffi.advanced_ingredient,
                cuisine: ffi.advanced_cuisine,
            },
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeError {
    /// Title or ingredients missing
    InvalidInput { message: String },
    /// No recipe with the given id
    NotFound { message: String },
    /// Storage or serialization failure
    StorageError { message: String },
    /// Configuration error
    ConfigError { message: String },
}

impl fmt::Display for FfiRecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiRecipeError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiRecipeError::StorageError { message } => write!(f, "Storage error: {}", message),
            FfiRecipeError::ConfigError { message } => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeError {}

impl From<RecipeError> for FfiRecipeError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::Validation(e) => FfiRecipeError::InvalidInput {
                message: e.to_string(),
            },
            RecipeError::NotFound(id) => FfiRecipeError::NotFound { message: id },
            RecipeError::Storage(e) => FfiRecipeError::StorageError {
                message: e.to_string(),
            },
            RecipeError::Serialization(e) => FfiRecipeError::StorageError {
                message: e.to_string(),
            },
            RecipeError::Config(e) => FfiRecipeError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// The native UI has already asked; confirm everything and drop alerts
struct Confirmed;

impl Dialogs for Confirmed {
    fn alert(&mut self, _message: &str) {}

    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

fn open(data_dir: String) -> Result<RecipeBox<FileStore>, FfiRecipeError> {
    let config = AppConfig {
        data_dir: data_dir.into(),
        ..Default::default()
    };
    Ok(RecipeBox::from_config(&config)?)
}

fn expect_saved(
    app: &mut RecipeBox<FileStore>,
    outcome: Outcome,
) -> Result<FfiRecipe, FfiRecipeError> {
    if let Some(e) = app.take_save_error() {
        return Err(e.into());
    }
    match outcome {
        Outcome::Added(id) | Outcome::Updated(id) => app
            .find(&id)
            .map(FfiRecipe::from)
            .ok_or_else(|| RecipeError::NotFound(id).into()),
        Outcome::Invalid(e) => Err(RecipeError::Validation(e).into()),
        _ => Err(FfiRecipeError::NotFound {
            message: "recipe being edited".to_string(),
        }),
    }
}

/// All recipes in list order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_recipes(data_dir: String) -> Result<Vec<FfiRecipe>, FfiRecipeError> {
    Ok(open(data_dir)?.recipes().iter().map(FfiRecipe::from).collect())
}

/// Recipes passing every non-blank search field
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    data_dir: String,
    search: FfiSearch,
) -> Result<Vec<FfiRecipe>, FfiRecipeError> {
    let app = open(data_dir)?;
    let search = SearchState::from(search);
    Ok(project(app.recipes(), &search)
        .into_iter()
        .map(FfiRecipe::from)
        .collect())
}

/// Validate and append a new recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn add_recipe(data_dir: String, draft: FfiRecipeDraft) -> Result<FfiRecipe, FfiRecipeError> {
    let mut app = open(data_dir)?;
    app.update(Message::EditDraft(draft.into()), &mut Confirmed);
    let outcome = app.update(Message::Submit, &mut Confirmed);
    expect_saved(&mut app, outcome)
}

/// Replace the recipe with the given id
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn update_recipe(
    data_dir: String,
    id: String,
    draft: FfiRecipeDraft,
) -> Result<FfiRecipe, FfiRecipeError> {
    let mut app = open(data_dir)?;
    if app.update(Message::Edit(id.clone()), &mut Confirmed) == Outcome::Ignored {
        return Err(RecipeError::NotFound(id).into());
    }
    app.update(Message::EditDraft(draft.into()), &mut Confirmed);
    let outcome = app.update(Message::Submit, &mut Confirmed);
    expect_saved(&mut app, outcome)
}

/// Remove the recipe with the given id
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn delete_recipe(data_dir: String, id: String) -> Result<(), FfiRecipeError> {
    let mut app = open(data_dir)?;
    match app.update(Message::Delete(id.clone()), &mut Confirmed) {
        Outcome::Deleted(_) => match app.take_save_error() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        },
        _ => Err(RecipeError::NotFound(id).into()),
    }
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
