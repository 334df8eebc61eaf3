//! Durable storage for the recipe list.
//!
//! Storage is a flat key-value store scoped to one origin. The whole recipe
//! list lives under a single key as a JSON array and is rewritten in full on
//! every save; there is one writer, so the last write wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use log::{debug, warn};
use std::io;

use crate::error::RecipeError;
use crate::model::Recipe;

/// Default key holding the serialized recipe list
pub const RECIPES_KEY: &str = "recipes";

/// Origin-scoped key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Reads and writes the recipe list through a [`KeyValueStore`]
#[derive(Debug)]
pub struct RecipeStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> RecipeStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, RECIPES_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        RecipeStorage {
            store,
            key: key.into(),
        }
    }

    /// Load the stored list.
    ///
    /// An absent, unreadable or corrupt value yields an empty list.
    pub fn load(&self) -> Vec<Recipe> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored recipes under '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read stored recipes: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => {
                debug!("Loaded {} recipes from '{}'", recipes.len(), self.key);
                recipes
            }
            Err(e) => {
                warn!("Stored recipes under '{}' are corrupt, ignoring: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Serialize and store the full list
    pub fn save(&mut self, recipes: &[Recipe]) -> Result<(), RecipeError> {
        let raw = serde_json::to_string(recipes)?;
        self.store.set(&self.key, &raw)?;
        debug!("Saved {} recipes to '{}'", recipes.len(), self.key);
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta() -> Recipe {
        Recipe {
            id: "1".to_string(),
            title: "Pasta".to_string(),
            ingredients: vec!["Tomato".to_string()],
            instructions: "Boil.".to_string(),
            cuisine: "Italian".to_string(),
        }
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let storage = RecipeStorage::new(MemoryStore::new());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_value_is_empty() {
        let mut store = MemoryStore::new();
        store.set(RECIPES_KEY, "{not json").unwrap();
        let storage = RecipeStorage::new(store);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let mut store = MemoryStore::new();
        store.set(RECIPES_KEY, r#"{"id":"1"}"#).unwrap();
        let storage = RecipeStorage::new(store);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = RecipeStorage::new(MemoryStore::new());
        storage.save(&[pasta()]).unwrap();
        assert_eq!(storage.load(), vec![pasta()]);
    }

    #[test]
    fn test_save_of_load_leaves_stored_value_unchanged() {
        let mut storage = RecipeStorage::new(MemoryStore::new());
        storage.save(&[pasta()]).unwrap();
        let before = storage.store().get(RECIPES_KEY).unwrap();

        let loaded = storage.load();
        storage.save(&loaded).unwrap();

        assert_eq!(storage.store().get(RECIPES_KEY).unwrap(), before);
    }

    #[test]
    fn test_stored_format_is_a_json_array() {
        let mut storage = RecipeStorage::new(MemoryStore::new());
        storage.save(&[pasta()]).unwrap();
        let raw = storage.store().get(RECIPES_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"1","title":"Pasta","ingredients":["Tomato"],"instructions":"Boil.","cuisine":"Italian"}]"#
        );
    }

    #[test]
    fn test_custom_key() {
        let mut storage = RecipeStorage::with_key(MemoryStore::new(), "cookbook");
        storage.save(&[pasta()]).unwrap();
        assert!(storage.store().get("cookbook").unwrap().is_some());
        assert!(storage.store().get(RECIPES_KEY).unwrap().is_none());
    }
}
