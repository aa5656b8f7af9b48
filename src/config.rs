//! Persisted mod configuration and the stores that read and write it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "potioncolorizer.config.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "POTIONCOLORIZER_";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// JSON parsing or serialization error
    Json(serde_json::Error),
    /// Layered extraction error
    Extract(Box<figment::Error>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::Extract(e) => write!(f, "configuration error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

/// Process-wide mod settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// Remove the enchantment glint from potion items
    #[serde(rename = "deglint_potions")]
    pub deglint: bool,
    /// Color potion items by their effects
    #[serde(rename = "recolor_potions")]
    pub recolor: bool,
    /// Apply the override mapping
    #[serde(rename = "custom_colors_enabled")]
    pub custom_colors: bool,
    /// Effect identifier to override color
    #[serde(rename = "custom_potion_colors")]
    pub overrides: BTreeMap<String, Color>,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            deglint: false,
            recolor: true,
            custom_colors: false,
            overrides: BTreeMap::new(),
        }
    }
}

impl ModConfig {
    /// Override color for an identifier, if one is stored.
    pub fn override_for(&self, id: &str) -> Option<Color> {
        self.overrides.get(id).copied()
    }

    /// Whether an identifier has a stored override.
    pub fn has_override(&self, id: &str) -> bool {
        self.overrides.contains_key(id)
    }

    /// Load a single file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = match FileFormat::of(path) {
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };
        Ok(config)
    }

    /// Write the full record, picking the format from the extension.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = match FileFormat::of(path) {
            FileFormat::Toml => toml::to_string_pretty(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Layered load: defaults, then the file (if present), then
    /// `POTIONCOLORIZER_*` environment variables, then `overrides`.
    pub fn load_layered(path: &Path, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(ModConfig::default()));
        figment = match FileFormat::of(path) {
            FileFormat::Toml => figment.merge(Toml::file(path)),
            FileFormat::Json => figment.merge(Json::file(path)),
        };
        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]))
            .merge(Serialized::defaults(overrides.clone()))
            .extract()?;
        Ok(config)
    }
}

/// Explicitly set toggle values layered over the loaded configuration.
///
/// Unset fields are skipped during serialization so they do not mask
/// values from lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(rename = "deglint_potions", skip_serializing_if = "Option::is_none")]
    pub deglint: Option<bool>,
    #[serde(rename = "recolor_potions", skip_serializing_if = "Option::is_none")]
    pub recolor: Option<bool>,
    #[serde(
        rename = "custom_colors_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_colors: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Persistence collaborator invoked when the panel commits.
pub trait ConfigStore {
    fn save(&mut self, config: &ModConfig) -> Result<(), ConfigError>;
}

/// Store that writes the configuration to a file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn save(&mut self, config: &ModConfig) -> Result<(), ConfigError> {
        config.save(&self.path)?;
        tracing::info!(path = %self.path.display(), "wrote configuration");
        Ok(())
    }
}
