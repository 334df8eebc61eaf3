use crate::model::{Recipe, RecipeDraft};

/// Whether the form creates a new recipe or edits an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(String),
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Idle => "Add Recipe",
            FormMode::Editing(_) => "Update Recipe",
        }
    }

    pub fn shows_cancel(&self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormMode::Idle => None,
            FormMode::Editing(id) => Some(id),
        }
    }
}

/// The create/update form: current mode plus the field contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    mode: FormMode,
    draft: RecipeDraft,
}

impl RecipeForm {
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: RecipeDraft) {
        self.draft = draft;
    }

    /// Load a record into the form and switch to editing it
    pub fn begin_edit(&mut self, recipe: &Recipe) {
        self.draft = RecipeDraft::from_recipe(recipe);
        self.mode = FormMode::Editing(recipe.id.clone());
    }

    /// Clear all fields and return to [`FormMode::Idle`]
    pub fn reset(&mut self) {
        *self = RecipeForm::default();
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.mode.editing_id() == Some(id)
    }
}
