//! Linked double doors.

use brushforge_brush::{
    make_face, make_face_scaled, Brush, BrushBuilder, BrushError, Corner, Corners, Face,
    ScaleAxes, ShaderLookup, TexelRange,
};
use brushforge_math::{Aabb, Point3};
use brushforge_scene::{Entity, SceneTarget};
use uuid::Uuid;

use crate::{require_volume, DoorAxis, ShapeConfig, ShapeError};

use Corner::{V1, V2, V3, V5, V6, V7};

/// Door-pair shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorParams<'a> {
    /// Axis the pair splits along.
    pub axis: DoorAxis,
    /// Shader for the two broad door faces.
    pub main_texture: &'a str,
    /// Shader for the face where the halves meet.
    pub trim_texture: &'a str,
    /// Which axes of the main texture are fitted to the door.
    pub main_scale: ScaleAxes,
    /// Which axes of the trim texture are fitted to the door.
    pub trim_scale: ScaleAxes,
}

impl DoorAxis {
    fn split_index(self) -> usize {
        match self {
            DoorAxis::NorthSouth => 0,
            DoorAxis::EastWest => 1,
        }
    }

    /// `angle` key values for the first and second half.
    pub fn angles(self) -> (&'static str, &'static str) {
        match self {
            DoorAxis::NorthSouth => ("180", "360"),
            DoorAxis::EastWest => ("270", "90"),
        }
    }
}

/// Scaled face, or a default projection when the texture can't be sized.
fn scaled_face(
    shaders: &impl ShaderLookup,
    points: [Point3; 3],
    texture: &str,
    axes: ScaleAxes,
    range: TexelRange,
) -> Result<Face, ShapeError> {
    match make_face_scaled(shaders, points, texture, axes, range) {
        Ok(face) => Ok(face),
        Err(BrushError::Texture(err)) => {
            tracing::warn!(texture, error = %err, "texture not scaled, using default projection");
            let [a, b, c] = points;
            Ok(make_face(a, b, c, texture, false))
        }
        Err(err) => Err(err.into()),
    }
}

/// Build both door halves without inserting them.
///
/// Each half is a box with caulked top, bottom and outer side, the main
/// texture on both broad faces and the trim texture on the split face.
/// Main faces on the far side use reversed ranges so the texture reads
/// the same way from both sides.
pub fn door_brushes(
    shaders: &impl ShaderLookup,
    config: &ShapeConfig,
    bounds: &Aabb,
    params: &DoorParams<'_>,
) -> Result<[Brush; 2], ShapeError> {
    require_volume(bounds)?;
    config.validate()?;

    let corners = Corners::new(bounds);
    let (lo, hi) = (bounds.min, bounds.max);
    let xy = params.axis.split_index();
    let width = (hi[xy] - lo[xy]) / 2.0;

    let edge = match params.axis {
        DoorAxis::NorthSouth => [V1, V3, V6],
        DoorAxis::EastWest => [V7, V1, V2],
    };
    let [ve1, ve2, ve3] = corners.triad(edge).map(|mut p| {
        p[xy] += width;
        p
    });

    let caulk = config.caulk_texture.as_str();
    let mut halves = [BrushBuilder::new(), BrushBuilder::new()];
    for half in &mut halves {
        let [a, b, c] = corners.triad([V1, V2, V3]);
        half.push(make_face(a, b, c, caulk, false));
        let [a, b, c] = corners.triad([V5, V7, V6]);
        half.push(make_face(a, b, c, caulk, false));
    }

    let (outer, near, far, near_range, far_range, trim_ranges, trims) = match params.axis {
        DoorAxis::NorthSouth => (
            [[V1, V3, V6], [V5, V2, V7]],
            [V1, V7, V2],
            [V5, V6, V3],
            TexelRange::new(lo.x, lo.z, hi.x, hi.z),
            TexelRange::new(hi.x, lo.z, lo.x, hi.z),
            [
                TexelRange::new(lo.y, lo.z, hi.y, hi.z),
                TexelRange::new(hi.y, lo.z, lo.y, hi.z),
            ],
            [[ve3, ve2, ve1], [ve1, ve2, ve3]],
        ),
        DoorAxis::EastWest => (
            [[V1, V7, V2], [V5, V6, V3]],
            [V1, V3, V6],
            [V5, V2, V7],
            TexelRange::new(lo.y, lo.z, hi.y, hi.z),
            TexelRange::new(hi.y, lo.z, lo.y, hi.z),
            [
                TexelRange::new(lo.x, lo.z, hi.x, hi.z),
                TexelRange::new(hi.x, lo.z, lo.x, hi.z),
            ],
            [[ve1, ve2, ve3], [ve3, ve2, ve1]],
        ),
    };

    for (i, half) in halves.iter_mut().enumerate() {
        let [a, b, c] = corners.triad(outer[i]);
        half.push(make_face(a, b, c, caulk, false));
        half.push(scaled_face(
            shaders,
            corners.triad(near),
            params.main_texture,
            params.main_scale,
            near_range,
        )?);
        half.push(scaled_face(
            shaders,
            corners.triad(far),
            params.main_texture,
            params.main_scale,
            far_range,
        )?);
        half.push(scaled_face(
            shaders,
            trims[i],
            params.trim_texture,
            params.trim_scale,
            trim_ranges[i],
        )?);
    }

    let [first, second] = halves;
    Ok([first.build()?, second.build()?])
}

/// Build a pair of linked door entities and insert them at the scene root.
///
/// Both entities get the same generated `team` value, which is returned.
pub fn build_door_pair<T: SceneTarget>(
    target: &mut T,
    shaders: &impl ShaderLookup,
    config: &ShapeConfig,
    bounds: &Aabb,
    params: &DoorParams<'_>,
) -> Result<String, ShapeError> {
    let [first, second] = door_brushes(shaders, config, bounds, params)?;
    let team = format!("t{}", Uuid::new_v4().simple());
    let (angle1, angle2) = params.axis.angles();

    let mut door1 = Entity::new(&config.door_classname);
    door1.set_key_value("angle", angle1);
    door1.set_key_value("team", &team);
    door1.attach_brush(first);

    let mut door2 = Entity::new(&config.door_classname);
    door2.set_key_value("angle", angle2);
    door2.set_key_value("team", &team);
    door2.attach_brush(second);

    tracing::debug!(axis = ?params.axis, %team, "door pair");
    target.insert_into_root(door1)?;
    target.insert_into_root(door2)?;
    Ok(team)
}
