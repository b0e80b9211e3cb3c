//! Generator settings.

use serde::{Deserialize, Serialize};

use crate::ShapeError;

/// Settings shared by all generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Shader for structural faces.
    pub caulk_texture: String,
    /// Entity class created for each door half.
    pub door_classname: String,
    /// Radius of the corner-stairs arc, in world units.
    pub corner_radius: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            caulk_texture: "textures/common/caulk".to_string(),
            door_classname: "func_door".to_string(),
            corner_radius: 10.0,
        }
    }
}

impl ShapeConfig {
    /// Check that every setting is usable.
    ///
    /// Names end up as bare tokens or quoted values in map text, so they
    /// must be non-empty and free of whitespace and double quotes.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_name("caulk_texture", &self.caulk_texture)?;
        check_name("door_classname", &self.door_classname)?;
        if !self.corner_radius.is_finite() || self.corner_radius <= 0.0 {
            return Err(ShapeError::InvalidParameter(format!(
                "corner_radius must be positive, got {}",
                self.corner_radius
            )));
        }
        Ok(())
    }
}

fn check_name(field: &str, value: &str) -> Result<(), ShapeError> {
    if value.is_empty() {
        return Err(ShapeError::InvalidParameter(format!("{field} is empty")));
    }
    if value.chars().any(|c| c == '"' || c.is_whitespace() || c.is_control()) {
        return Err(ShapeError::InvalidParameter(format!(
            "{field} contains a quote or whitespace: {value:?}"
        )));
    }
    Ok(())
}
