//! The recipe box controller.
//!
//! [`RecipeBox`] owns the session state (the recipe list, the form and the
//! search inputs) together with its storage. Every user event is a
//! [`Message`] passed to [`RecipeBox::update`], which runs the transition to
//! completion, persists after any mutation, and reports an [`Outcome`]. The
//! caller re-renders from [`RecipeBox::view`] afterwards.

use log::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{RecipeError, ValidationError};
use crate::form::{FormMode, RecipeForm};
use crate::model::{Recipe, RecipeDraft};
use crate::render::View;
use crate::search::{cuisine_options, project, AdvancedFilter, SearchState};
use crate::storage::{FileStore, KeyValueStore, RecipeStorage};

pub const VALIDATION_MESSAGE: &str =
    "Please provide at least a title and ingredients for the recipe.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this recipe?";

/// Blocking interactions the controller needs from the UI
pub trait Dialogs {
    /// Show a message the user must acknowledge
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Bring the form into view after a record is loaded for editing
    fn scroll_to_form(&mut self) {}
}

/// User input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Form fields changed
    EditDraft(RecipeDraft),
    /// Form submitted; adds or updates depending on the form mode
    Submit,
    /// Cancel editing
    Cancel,
    /// Load a record into the form
    Edit(String),
    /// Delete a record after confirmation
    Delete(String),
    BasicSearch(String),
    FilterCuisine(String),
    ApplyAdvanced(AdvancedFilter),
    /// Clear every search input
    ResetSearch,
    /// Show or hide the advanced search panel
    ToggleAdvanced,
}

/// What a call to [`RecipeBox::update`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Updated(String),
    Deleted(String),
    EditStarted(String),
    Invalid(ValidationError),
    DeleteDeclined,
    Cancelled,
    DraftChanged,
    FiltersChanged,
    PanelToggled,
    /// The message referred to a record that does not exist
    Ignored,
}

/// Session state and controller
#[derive(Debug)]
pub struct RecipeBox<S> {
    recipes: Vec<Recipe>,
    form: RecipeForm,
    search: SearchState,
    advanced_open: bool,
    confirm_delete: bool,
    storage: RecipeStorage<S>,
    save_error: Option<RecipeError>,
}

impl RecipeBox<FileStore> {
    /// Open the file-backed store described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        let store = FileStore::new(config.store_dir()?);
        let storage = RecipeStorage::with_key(store, config.storage_key.clone());
        Ok(RecipeBox::open(storage).with_confirm_delete(config.confirm_delete))
    }
}

impl<S: KeyValueStore> RecipeBox<S> {
    /// Start a session from whatever is currently stored
    pub fn open(storage: RecipeStorage<S>) -> Self {
        let recipes = storage.load();
        info!("Opened recipe box with {} recipes", recipes.len());
        RecipeBox {
            recipes,
            form: RecipeForm::default(),
            search: SearchState::default(),
            advanced_open: false,
            confirm_delete: true,
            storage,
            save_error: None,
        }
    }

    pub fn with_confirm_delete(mut self, confirm: bool) -> Self {
        self.confirm_delete = confirm;
        self
    }

    pub fn update(&mut self, message: Message, dialogs: &mut dyn Dialogs) -> Outcome {
        debug!("Handling {:?}", message);
        match message {
            Message::EditDraft(draft) => {
                self.form.set_draft(draft);
                Outcome::DraftChanged
            }
            Message::Submit => self.submit(dialogs),
            Message::Cancel => {
                self.form.reset();
                Outcome::Cancelled
            }
            Message::Edit(id) => self.begin_edit(&id, dialogs),
            Message::Delete(id) => self.delete(&id, dialogs),
            Message::BasicSearch(term) => {
                self.search.basic_term = term;
                Outcome::FiltersChanged
            }
            Message::FilterCuisine(cuisine) => {
                self.search.cuisine_filter = cuisine;
                Outcome::FiltersChanged
            }
            Message::ApplyAdvanced(filter) => {
                self.search.advanced = filter;
                Outcome::FiltersChanged
            }
            Message::ResetSearch => {
                self.search = SearchState::default();
                Outcome::FiltersChanged
            }
            Message::ToggleAdvanced => {
                self.advanced_open = !self.advanced_open;
                Outcome::PanelToggled
            }
        }
    }

    fn submit(&mut self, dialogs: &mut dyn Dialogs) -> Outcome {
        let fields = match self.form.draft().validate() {
            Ok(fields) => fields,
            Err(e) => {
                debug!("Rejected recipe form: {}", e);
                dialogs.alert(VALIDATION_MESSAGE);
                return Outcome::Invalid(e);
            }
        };

        let outcome = match self.form.mode().clone() {
            FormMode::Idle => {
                let recipe = Recipe::create(fields);
                let id = recipe.id.clone();
                info!("Adding recipe '{}' ({})", recipe.title, id);
                self.recipes.push(recipe);
                Outcome::Added(id)
            }
            FormMode::Editing(id) => {
                let Some(slot) = self.recipes.iter_mut().find(|r| r.id == id) else {
                    warn!("Recipe {} vanished while being edited", id);
                    return Outcome::Ignored;
                };
                *slot = Recipe::with_id(id.clone(), fields);
                info!("Updated recipe '{}' ({})", slot.title, id);
                Outcome::Updated(id)
            }
        };

        self.persist();
        self.form.reset();
        outcome
    }

    fn begin_edit(&mut self, id: &str, dialogs: &mut dyn Dialogs) -> Outcome {
        let Some(recipe) = self.recipes.iter().find(|r| r.id == id) else {
            debug!("Edit requested for unknown recipe {}", id);
            return Outcome::Ignored;
        };
        self.form.begin_edit(recipe);
        dialogs.scroll_to_form();
        Outcome::EditStarted(id.to_string())
    }

    fn delete(&mut self, id: &str, dialogs: &mut dyn Dialogs) -> Outcome {
        if self.find(id).is_none() {
            debug!("Delete requested for unknown recipe {}", id);
            return Outcome::Ignored;
        }

        if self.confirm_delete && !dialogs.confirm(DELETE_CONFIRMATION) {
            return Outcome::DeleteDeclined;
        }

        self.recipes.retain(|r| r.id != id);
        info!("Deleted recipe {}", id);
        self.persist();

        if self.form.is_editing(id) {
            self.form.reset();
        }
        Outcome::Deleted(id.to_string())
    }

    /// Write the list back. A failure is kept for [`RecipeBox::take_save_error`];
    /// the in-memory list stays authoritative for the session.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.recipes) {
            warn!("Failed to save recipes: {}", e);
            self.save_error = Some(e);
        }
    }

    /// The most recent failed save, if any, clearing it
    pub fn take_save_error(&mut self) -> Option<RecipeError> {
        self.save_error.take()
    }

    pub fn view(&self) -> View<'_> {
        View::build(&self.recipes, project(&self.recipes, &self.search))
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn cuisines(&self) -> Vec<&str> {
        cuisine_options(&self.recipes)
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn advanced_open(&self) -> bool {
        self.advanced_open
    }

    pub fn storage(&self) -> &RecipeStorage<S> {
        &self.storage
    }
}
