//! In-memory texture catalog.

use std::collections::HashMap;

use brushforge_brush::{ShaderLookup, TextureInfo, TextureLookupError};
use serde::{Deserialize, Serialize};

/// Texture dimensions keyed by shader name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureCatalog {
    textures: HashMap<String, TextureInfo>,
}

impl TextureCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a texture.
    pub fn insert(&mut self, name: impl Into<String>, width: u32, height: u32) {
        self.textures
            .insert(name.into(), TextureInfo { width, height });
    }

    /// Builder-style [`TextureCatalog::insert`].
    pub fn with(mut self, name: impl Into<String>, width: u32, height: u32) -> Self {
        self.insert(name, width, height);
        self
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl ShaderLookup for TextureCatalog {
    fn resolve(&self, name: &str) -> Result<TextureInfo, TextureLookupError> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| TextureLookupError::NotFound(name.to_string()))
    }
}
