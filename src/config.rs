use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root directory for durable storage
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Storage scope; each origin gets its own subdirectory of `data_dir`
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Key under which the recipe list is stored
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Whether deletions ask for confirmation
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            origin: default_origin(),
            storage_key: default_storage_key(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from(".recipe-box")
}

fn default_origin() -> String {
    "default".to_string()
}

fn default_storage_key() -> String {
    crate::storage::RECIPES_KEY.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOX__ prefix
    /// 2. recipe-box.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOX__DATA_DIR
    pub fn load() -> Result<Self, ConfigError> {
        load_config("recipe-box")
    }

    /// Directory holding this origin's key files.
    ///
    /// The origin must be a single plain path component so the store stays
    /// inside `data_dir`.
    pub fn store_dir(&self) -> Result<PathBuf, ConfigError> {
        let origin = self.origin.as_str();
        if origin.is_empty()
            || origin == "."
            || origin == ".."
            || origin.contains(['/', '\\'])
        {
            return Err(ConfigError::Message(format!(
                "origin '{}' must be a plain directory name",
                origin
            )));
        }
        Ok(self.data_dir.join(origin))
    }
}

/// Load configuration from the named file (extension optional) and the environment
pub fn load_config(file_name: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_name).required(false))
        // Use double underscore for nested and prefix: RECIPE_BOX__STORAGE_KEY
        .add_source(
            Environment::with_prefix("RECIPE_BOX")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
