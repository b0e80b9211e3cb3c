//! Right-triangular wedge.

use brushforge_brush::{Brush, Corners};
use brushforge_math::Aabb;
use brushforge_scene::{SceneTarget, WorldObject};

use crate::rules::{assemble, RoleTextures, WEDGE_DOWN, WEDGE_UP};
use crate::{require_volume, Direction, ShapeConfig, ShapeError};

/// Build the five-face wedge brush for `bounds` without inserting it.
///
/// The slant replaces the side face on the `direction` side. With
/// `pointed_up` the wedge sits on `min.z`; otherwise it hangs from `max.z`.
pub fn wedge_brush(
    config: &ShapeConfig,
    direction: Direction,
    bounds: &Aabb,
    pointed_up: bool,
) -> Result<Brush, ShapeError> {
    require_volume(bounds)?;
    config.validate()?;
    let table = if pointed_up { &WEDGE_UP } else { &WEDGE_DOWN };
    let textures = RoleTextures::caulk_only(&config.caulk_texture);
    Ok(assemble(
        &Corners::new(bounds),
        table,
        direction,
        &textures,
        false,
    )?)
}

/// Build a wedge and insert it into the world.
pub fn build_wedge<T: SceneTarget>(
    target: &mut T,
    config: &ShapeConfig,
    direction: Direction,
    bounds: &Aabb,
    pointed_up: bool,
) -> Result<(), ShapeError> {
    let brush = wedge_brush(config, direction, bounds, pointed_up)?;
    tracing::debug!(%direction, pointed_up, "wedge");
    target.insert_into_world(WorldObject::Brush(brush))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brushforge_math::Point3;
    use brushforge_scene::MapDocument;

    fn bounds() -> Aabb {
        Aabb::new(Point3::new(-32.0, 0.0, 8.0), Point3::new(32.0, 48.0, 40.0)).unwrap()
    }

    fn box_corners(b: &Aabb) -> Vec<Point3> {
        let mut out = Vec::new();
        for &x in &[b.min.x, b.max.x] {
            for &y in &[b.min.y, b.max.y] {
                for &z in &[b.min.z, b.max.z] {
                    out.push(Point3::new(x, y, z));
                }
            }
        }
        out
    }

    #[test]
    fn test_wedge_always_five_faces() {
        let config = ShapeConfig::default();
        for direction in Direction::ALL {
            for pointed_up in [true, false] {
                let brush = wedge_brush(&config, direction, &bounds(), pointed_up).unwrap();
                assert_eq!(brush.len(), 5, "{direction} up={pointed_up}");
                assert!(brush
                    .texture_names()
                    .iter()
                    .all(|&t| t == "textures/common/caulk"));
            }
        }
    }

    #[test]
    fn test_wedge_is_half_box() {
        let config = ShapeConfig::default();
        let b = bounds();
        for direction in Direction::ALL {
            for pointed_up in [true, false] {
                let brush = wedge_brush(&config, direction, &b, pointed_up).unwrap();
                let inside = box_corners(&b)
                    .iter()
                    .filter(|p| brush.contains_point(p))
                    .count();
                assert_eq!(inside, 6, "{direction} up={pointed_up}");
            }
        }
    }

    #[test]
    fn test_wedge_up_rises_towards_east() {
        let b = bounds();
        let brush = wedge_brush(&ShapeConfig::default(), Direction::East, &b, true).unwrap();
        let low_x = Point3::new(b.min.x + 1.0, b.center().y, b.max.z - 1.0);
        let high_x = Point3::new(b.max.x - 1.0, b.center().y, b.max.z - 1.0);
        assert!(!brush.contains_point(&low_x));
        assert!(brush.contains_point(&high_x));
    }

    #[test]
    fn test_build_wedge_inserts_into_world() {
        let mut doc = MapDocument::new();
        build_wedge(&mut doc, &ShapeConfig::default(), Direction::North, &bounds(), false)
            .unwrap();
        assert_eq!(doc.world_brushes().count(), 1);
        assert!(doc.entities.is_empty());
    }

    #[test]
    fn test_flat_box_rejected_before_insert() {
        let flat = Aabb::new(Point3::origin(), Point3::new(64.0, 64.0, 0.0)).unwrap();
        let mut doc = MapDocument::new();
        let err =
            build_wedge(&mut doc, &ShapeConfig::default(), Direction::West, &flat, true).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter(_)));
        assert_eq!(doc.object_count(), 0);
    }

    #[test]
    fn test_wedge_is_deterministic() {
        let config = ShapeConfig::default();
        let mut a = MapDocument::new();
        let mut b = MapDocument::new();
        build_wedge(&mut a, &config, Direction::South, &bounds(), true).unwrap();
        build_wedge(&mut b, &config, Direction::South, &bounds(), true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_caulk_rejected_before_insert() {
        let config = ShapeConfig {
            caulk_texture: String::new(),
            ..Default::default()
        };
        let mut doc = MapDocument::new();
        let err = build_wedge(&mut doc, &config, Direction::East, &bounds(), true).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter(_)));
        assert_eq!(doc.object_count(), 0);
    }
}
