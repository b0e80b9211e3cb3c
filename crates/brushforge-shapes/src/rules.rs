//! Direction-keyed face tables.
//!
//! Each generator is a fixed list of corner triads. Whether a triad is
//! emitted, and with which texture, depends only on the requested
//! [`Direction`], so the tables replace per-shape branching.

use brushforge_brush::{make_face, Brush, BrushBuilder, BrushError, Corner, Corners};

use crate::Direction;

use Corner::{V1, V2, V3, V5, V6, V7, V8};

/// Which of a generator's textures a face receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureRole {
    /// Structural, never rendered.
    Caulk,
    /// The tread or walkable surface.
    Main,
    /// The vertical face of a step.
    Riser,
}

/// When a templated face is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceRule {
    /// Always present.
    Always(TextureRole),
    /// Caulk, dropped when the direction matches.
    Unless(Direction),
    /// Caulk, present only when the direction matches.
    Only(Direction),
    /// Riser when the direction matches, caulk otherwise.
    RiserWhen(Direction),
}

impl FaceRule {
    /// Texture role for `direction`, or `None` if the face is skipped.
    pub fn resolve(self, direction: Direction) -> Option<TextureRole> {
        match self {
            FaceRule::Always(role) => Some(role),
            FaceRule::Unless(d) => (d != direction).then_some(TextureRole::Caulk),
            FaceRule::Only(d) => (d == direction).then_some(TextureRole::Caulk),
            FaceRule::RiserWhen(d) if d == direction => Some(TextureRole::Riser),
            FaceRule::RiserWhen(_) => Some(TextureRole::Caulk),
        }
    }
}

/// One templated face: a corner triad and its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTemplate {
    /// Corners in winding order.
    pub corners: [Corner; 3],
    /// Emission rule.
    pub rule: FaceRule,
}

const fn face(corners: [Corner; 3], rule: FaceRule) -> FaceTemplate {
    FaceTemplate { corners, rule }
}

/// Wedge with its high edge at `max.z` on the `direction` side.
pub const WEDGE_UP: [FaceTemplate; 9] = [
    face([V1, V3, V6], FaceRule::Unless(Direction::East)),
    face([V7, V5, V8], FaceRule::Unless(Direction::West)),
    face([V1, V7, V2], FaceRule::Unless(Direction::North)),
    face([V3, V8, V6], FaceRule::Unless(Direction::South)),
    face([V1, V2, V3], FaceRule::Always(TextureRole::Caulk)),
    face([V1, V3, V5], FaceRule::Only(Direction::East)),
    face([V2, V6, V8], FaceRule::Only(Direction::West)),
    face([V1, V6, V5], FaceRule::Only(Direction::North)),
    face([V7, V3, V8], FaceRule::Only(Direction::South)),
];

/// Wedge hanging from `max.z`, the mirror image of [`WEDGE_UP`].
pub const WEDGE_DOWN: [FaceTemplate; 9] = [
    face([V7, V5, V8], FaceRule::Unless(Direction::West)),
    face([V1, V3, V6], FaceRule::Unless(Direction::East)),
    face([V3, V8, V6], FaceRule::Unless(Direction::North)),
    face([V1, V7, V2], FaceRule::Unless(Direction::South)),
    face([V6, V5, V7], FaceRule::Always(TextureRole::Caulk)),
    face([V1, V5, V3], FaceRule::Only(Direction::West)),
    face([V2, V8, V6], FaceRule::Only(Direction::East)),
    face([V1, V5, V6], FaceRule::Only(Direction::North)),
    face([V7, V8, V3], FaceRule::Only(Direction::South)),
];

/// Box step: main-textured top, caulked bottom, one riser side.
pub const STAIR_STEP: [FaceTemplate; 6] = [
    face([V6, V5, V7], FaceRule::Always(TextureRole::Main)),
    face([V1, V3, V6], FaceRule::RiserWhen(Direction::East)),
    face([V1, V7, V2], FaceRule::RiserWhen(Direction::North)),
    face([V3, V5, V6], FaceRule::RiserWhen(Direction::South)),
    face([V7, V5, V2], FaceRule::RiserWhen(Direction::West)),
    face([V1, V2, V3], FaceRule::Always(TextureRole::Caulk)),
];

/// Step with a sloped underside running down towards the riser's far side.
///
/// All four sides are emitted. The side opposite the riser meets the solid
/// only along the tread's far edge, so it encloses no area and leaves the
/// solid unchanged.
pub const STAIR_STEP_WEDGE: [FaceTemplate; 9] = [
    face([V6, V5, V7], FaceRule::Always(TextureRole::Main)),
    face([V5, V2, V7], FaceRule::RiserWhen(Direction::West)),
    face([V1, V3, V6], FaceRule::RiserWhen(Direction::East)),
    face([V3, V5, V6], FaceRule::RiserWhen(Direction::South)),
    face([V1, V7, V2], FaceRule::RiserWhen(Direction::North)),
    face([V1, V5, V3], FaceRule::Only(Direction::East)),
    face([V2, V8, V6], FaceRule::Only(Direction::West)),
    face([V1, V5, V6], FaceRule::Only(Direction::North)),
    face([V7, V8, V3], FaceRule::Only(Direction::South)),
];

/// Texture names for each [`TextureRole`].
#[derive(Debug, Clone, Copy)]
pub struct RoleTextures<'a> {
    /// Caulk shader.
    pub caulk: &'a str,
    /// Main (tread) shader.
    pub main: &'a str,
    /// Riser shader.
    pub riser: &'a str,
}

impl<'a> RoleTextures<'a> {
    /// Every role mapped to the caulk shader.
    pub fn caulk_only(caulk: &'a str) -> Self {
        Self {
            caulk,
            main: caulk,
            riser: caulk,
        }
    }

    /// Shader for `role`.
    pub fn get(&self, role: TextureRole) -> &'a str {
        match role {
            TextureRole::Caulk => self.caulk,
            TextureRole::Main => self.main,
            TextureRole::Riser => self.riser,
        }
    }
}

/// Emit the faces of `table` that apply to `direction` and build the brush.
pub fn assemble(
    corners: &Corners,
    table: &[FaceTemplate],
    direction: Direction,
    textures: &RoleTextures<'_>,
    detail: bool,
) -> Result<Brush, BrushError> {
    let mut builder = BrushBuilder::new();
    for template in table {
        if let Some(role) = template.rule.resolve(direction) {
            let [a, b, c] = corners.triad(template.corners);
            builder.push(make_face(a, b, c, textures.get(role), detail));
        }
    }
    builder.build()
}
