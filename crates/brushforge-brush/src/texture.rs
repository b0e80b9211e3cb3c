//! Texture projection parameters and the shader lookup seam.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scale applied by a default (untransformed) projection on both axes.
pub const DEFAULT_SCALE: [f64; 2] = [0.5, 0.5];

/// Content flag marking a face as detail (non-structural for vis).
pub const CONTENTS_DETAIL: u32 = 0x0800_0000;

/// Scale, shift and flags mapping world-space face coordinates to texture space.
///
/// Scale components are expected to be non-zero; the face builders never
/// produce a zero scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureProjection {
    /// Shader/texture name, e.g. `textures/common/caulk`.
    pub name: String,
    /// Horizontal and vertical scale.
    pub scale: [f64; 2],
    /// Horizontal and vertical shift in texels.
    pub shift: [f64; 2],
    /// Rotation in degrees.
    pub rotation: f64,
    /// Content flags (see [`CONTENTS_DETAIL`]).
    pub contents: u32,
    /// Surface flags.
    pub flags: u32,
}

impl TextureProjection {
    /// Default projection for a named texture.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scale: DEFAULT_SCALE,
            shift: [0.0, 0.0],
            rotation: 0.0,
            contents: 0,
            flags: 0,
        }
    }

    /// True if the detail content flag is set.
    pub fn is_detail(&self) -> bool {
        self.contents & CONTENTS_DETAIL != 0
    }
}

/// Pixel dimensions of a resolved texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Errors from resolving a texture through a [`ShaderLookup`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureLookupError {
    /// No shader or texture is registered under the name.
    #[error("texture not found: {0}")]
    NotFound(String),

    /// The texture resolved but reports no usable pixel dimensions.
    #[error("texture has no dimensions: {0}")]
    NoDimensions(String),
}

/// Host shader subsystem: resolves texture names to pixel dimensions.
///
/// Implementations return owned data, so any host handle backing the lookup
/// is released before `resolve` returns.
pub trait ShaderLookup {
    /// Resolve `name` to its pixel dimensions.
    fn resolve(&self, name: &str) -> Result<TextureInfo, TextureLookupError>;
}

impl<T: ShaderLookup + ?Sized> ShaderLookup for &T {
    fn resolve(&self, name: &str) -> Result<TextureInfo, TextureLookupError> {
        (**self).resolve(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projection() {
        let p = TextureProjection::new("textures/base_wall/concrete");
        assert_eq!(p.scale, [0.5, 0.5]);
        assert_eq!(p.shift, [0.0, 0.0]);
        assert!(!p.is_detail());
    }

    #[test]
    fn test_detail_flag() {
        let mut p = TextureProjection::new("textures/common/caulk");
        p.contents |= CONTENTS_DETAIL;
        assert!(p.is_detail());
    }
}
