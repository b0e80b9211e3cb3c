//! TOML settings file.
//!
//! ```toml
//! [shapes]
//! caulk_texture = "textures/common/caulk"
//! corner_radius = 16.0
//!
//! [textures]
//! "textures/doors/panel" = { width = 64, height = 128 }
//! ```

use std::path::Path;

use brushforge_scene::TextureCatalog;
use brushforge_shapes::ShapeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Generator settings plus known texture sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushforgeConfig {
    /// Settings passed to every generator.
    pub shapes: ShapeConfig,
    /// Texture dimensions used for scaled faces.
    pub textures: TextureCatalog,
}

impl BrushforgeConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the generator settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shapes
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
