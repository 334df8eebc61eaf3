//! A local-first recipe box.
//!
//! Recipes are kept in an ordered in-memory list, mirrored to an
//! origin-scoped key-value store on every change, and shown through a
//! searchable, filterable view.
//!
//! # Example
//! ```
//! use recipe_box::{Dialogs, Message, MemoryStore, Outcome, RecipeBox, RecipeDraft, RecipeStorage};
//!
//! struct AlwaysYes;
//!
//! impl Dialogs for AlwaysYes {
//!     fn alert(&mut self, _message: &str) {}
//!     fn confirm(&mut self, _message: &str) -> bool {
//!         true
//!     }
//! }
//!
//! let mut app = RecipeBox::open(RecipeStorage::new(MemoryStore::new()));
//! let draft = RecipeDraft {
//!     title: "Soup".to_string(),
//!     ingredients: "Water\nSalt".to_string(),
//!     ..Default::default()
//! };
//!
//! app.update(Message::EditDraft(draft), &mut AlwaysYes);
//! assert!(matches!(app.update(Message::Submit, &mut AlwaysYes), Outcome::Added(_)));
//! assert_eq!(app.recipes()[0].ingredients, vec!["Water", "Salt"]);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod search;
pub mod storage;

// UniFFI bindings module (only compiled when uniffi feature is enabled)
#[cfg(feature = "uniffi")]
pub mod uniffi_bindings;

// Re-export key types
pub use app::{Dialogs, Message, Outcome, RecipeBox};
pub use config::AppConfig;
pub use error::{RecipeError, ValidationError};
pub use form::{FormMode, RecipeForm};
pub use model::{Recipe, RecipeDraft, RecipeFields};
pub use render::{render_html, render_page, render_text, View};
pub use search::{project, AdvancedFilter, SearchState};
pub use storage::{FileStore, KeyValueStore, MemoryStore, RecipeStorage};
