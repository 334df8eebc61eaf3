use thiserror::Error;

/// Errors that can occur while managing the recipe box
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Form input did not pass validation
    #[error("Invalid recipe: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing the durable store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The recipe list could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No recipe carries the requested id
    #[error("No recipe with id '{0}'")]
    NotFound(String),
}

/// Reasons a recipe draft is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a title is required")]
    MissingTitle,

    #[error("at least one ingredient is required")]
    MissingIngredients,
}
