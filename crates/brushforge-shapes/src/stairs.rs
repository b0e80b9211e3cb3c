//! Stair steps, stair-step wedges and quarter-turn corner stairs.

use std::f64::consts::FRAC_PI_2;

use brushforge_brush::{axis_aligned_builder, make_face, Brush, Corners, CubeFace, FaceMask};
use brushforge_math::{arc_point, Aabb, Axis, Point3};
use brushforge_scene::{Patch, SceneTarget, WorldObject};

use crate::rules::{assemble, RoleTextures, STAIR_STEP, STAIR_STEP_WEDGE};
use crate::{require_volume, Direction, ShapeConfig, ShapeError};

/// Tread and riser shaders for a staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StairTextures<'a> {
    /// Top (walkable) surface.
    pub main: &'a str,
    /// Vertical step face.
    pub riser: &'a str,
}

impl<'a> StairTextures<'a> {
    fn roles(&self, config: &'a ShapeConfig) -> RoleTextures<'a> {
        RoleTextures {
            caulk: &config.caulk_texture,
            main: self.main,
            riser: self.riser,
        }
    }
}

/// One box-shaped stair step, riser on the `direction` side.
pub fn stair_step_brush(
    config: &ShapeConfig,
    direction: Direction,
    bounds: &Aabb,
    textures: &StairTextures<'_>,
) -> Result<Brush, ShapeError> {
    require_volume(bounds)?;
    config.validate()?;
    Ok(assemble(
        &Corners::new(bounds),
        &STAIR_STEP,
        direction,
        &textures.roles(config),
        false,
    )?)
}

/// Build a stair step and insert it into the world.
pub fn build_stair_step<T: SceneTarget>(
    target: &mut T,
    config: &ShapeConfig,
    direction: Direction,
    bounds: &Aabb,
    textures: &StairTextures<'_>,
) -> Result<(), ShapeError> {
    let brush = stair_step_brush(config, direction, bounds, textures)?;
    tracing::debug!(%direction, "stair step");
    target.insert_into_world(WorldObject::Brush(brush))?;
    Ok(())
}

/// A stair step whose underside slopes down to the riser's bottom edge.
///
/// `detail` marks every face as detail.
pub fn stair_step_wedge_brush(
    config: &ShapeConfig,
    direction: Direction,
    bounds: &Aabb,
    textures: &StairTextures<'_>,
    detail: bool,
) -> Result<Brush, ShapeError> {
    require_volume(bounds)?;
    config.validate()?;
    Ok(assemble(
        &Corners::new(bounds),
        &STAIR_STEP_WEDGE,
        direction,
        &textures.roles(config),
        detail,
    )?)
}

/// Build a stair-step wedge and insert it into the world.
pub fn build_stair_step_wedge<T: SceneTarget>(
    target: &mut T,
    config: &ShapeConfig,
    direction: Direction,
    bounds: &Aabb,
    textures: &StairTextures<'_>,
    detail: bool,
) -> Result<(), ShapeError> {
    let brush = stair_step_wedge_brush(config, direction, bounds, textures, detail)?;
    tracing::debug!(%direction, detail, "stair-step wedge");
    target.insert_into_world(WorldObject::Brush(brush))?;
    Ok(())
}

/// A point on the corner-stairs arc at the top and bottom of the flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPoint {
    /// At the flight's top height.
    pub top: Point3,
    /// At the flight's bottom height.
    pub bottom: Point3,
}

/// `steps + 1` points on a quarter circle around `pivot`.
///
/// Point `i` sits at angle `i·π/(2·steps)`, starting at `+radius` along Y
/// and ending at `-radius` along X.
pub fn corner_arc(
    pivot: &Point3,
    radius: f64,
    bottom_z: f64,
    top_z: f64,
    steps: u32,
) -> Vec<ArcPoint> {
    (0..=steps)
        .map(|i| {
            let angle = FRAC_PI_2 * f64::from(i) / f64::from(steps);
            let p = arc_point(pivot, radius, angle);
            ArcPoint {
                top: Point3::new(p.x, p.y, top_z),
                bottom: Point3::new(p.x, p.y, bottom_z),
            }
        })
        .collect()
}

/// Precomputed corner-stairs geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerStairs {
    /// One brush per step, bottom first.
    pub steps: Vec<Brush>,
    /// Rise of each step (whole units).
    pub step_height: f64,
    /// Box the closing bevel is fitted to.
    pub bevel_bounds: Aabb,
}

/// Faces of each step that stay on the outside of the flight.
const STEP_MASK: [CubeFace; 3] = [CubeFace::Bottom, CubeFace::MinX, CubeFace::MaxY];

/// Build the step brushes of a quarter-turn staircase without inserting them.
///
/// The flight winds around `(max.x, min.y)`. Step height is the box's
/// vertical span truncated to whole units, divided by `steps` with integer
/// division, so the top step can stop short of `max.z`.
pub fn corner_stair_brushes(
    config: &ShapeConfig,
    bounds: &Aabb,
    steps: u32,
    textures: &StairTextures<'_>,
) -> Result<CornerStairs, ShapeError> {
    if steps == 0 {
        return Err(ShapeError::InvalidParameter(
            "corner stairs need at least one step".to_string(),
        ));
    }
    require_volume(bounds)?;
    config.validate()?;

    let span = bounds.extent(Axis::Z).trunc() as i64;
    let step_height = (span / i64::from(steps)) as f64;
    if step_height <= 0.0 {
        return Err(ShapeError::InvalidParameter(format!(
            "{steps} steps do not fit in a height of {span}"
        )));
    }

    let (lo, hi) = (bounds.min, bounds.max);
    let pivot = Point3::new(hi.x, lo.y, lo.z);
    let arc = corner_arc(&pivot, config.corner_radius, lo.z, hi.z, steps);
    let mask = FaceMask::only(&STEP_MASK);

    let mut brushes = Vec::with_capacity(steps as usize);
    for (i, pair) in arc.windows(2).enumerate() {
        let (near, far) = (pair[0], pair[1]);
        let bottom_z = lo.z + i as f64 * step_height;
        let top_z = bottom_z + step_height;
        let step_box = Aabb {
            min: Point3::new(lo.x, lo.y, bottom_z),
            max: Point3::new(hi.x, hi.y, top_z),
        };

        let mut builder = axis_aligned_builder(&step_box, &config.caulk_texture, mask);
        let [a, b, c] = tread_triad(&arc, &pivot, top_z);
        builder
            .push(make_face(a, b, c, textures.main, false))
            .push(make_face(
                pivot,
                far.bottom,
                far.top,
                &config.caulk_texture,
                false,
            ))
            .push(make_face(pivot, near.top, near.bottom, textures.riser, false));
        brushes.push(builder.build()?);
    }

    Ok(CornerStairs {
        steps: brushes,
        step_height,
        bevel_bounds: bounds.raised(step_height),
    })
}

/// Three points spanning the tread plane at height `z`.
fn tread_triad(arc: &[ArcPoint], pivot: &Point3, z: f64) -> [Point3; 3] {
    let at = |p: &Point3| Point3::new(p.x, p.y, z);
    match arc {
        [p0, p1, p2, ..] => [at(&p2.top), at(&p1.top), at(&p0.top)],
        [p0, p1] => [at(&p1.top), at(&p0.top), at(pivot)],
        // corner_arc always yields at least two points for steps >= 1
        _ => [at(pivot); 3],
    }
}

/// Build a quarter-turn staircase and close it with a bevel.
///
/// Steps are inserted one at a time; if the scene rejects one, the steps
/// already inserted stay in place.
pub fn build_corner_stairs<T: SceneTarget>(
    target: &mut T,
    config: &ShapeConfig,
    bounds: &Aabb,
    steps: u32,
    textures: &StairTextures<'_>,
) -> Result<(), ShapeError> {
    let stairs = corner_stair_brushes(config, bounds, steps, textures)?;
    tracing::debug!(steps, step_height = stairs.step_height, "corner stairs");
    for brush in stairs.steps {
        target.insert_into_world(WorldObject::Brush(brush))?;
    }
    make_bevel(target, &stairs.bevel_bounds, textures.main)
}

/// Insert a bevel patch fitted to `bounds` into the world.
pub fn make_bevel<T: SceneTarget>(
    target: &mut T,
    bounds: &Aabb,
    texture: &str,
) -> Result<(), ShapeError> {
    target.insert_into_world(WorldObject::Patch(Patch::bevel(bounds, texture)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use brushforge_brush::CONTENTS_DETAIL;
    use brushforge_scene::{Entity, MapDocument, PatchPrefab, SceneInsertionError};

    const MAIN: &str = "textures/stone/tread";
    const RISER: &str = "textures/stone/riser";

    fn textures() -> StairTextures<'static> {
        StairTextures {
            main: MAIN,
            riser: RISER,
        }
    }

    fn step_bounds() -> Aabb {
        Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(32.0, 64.0, 16.0)).unwrap()
    }

    fn riser_normal(brush: &Brush) -> brushforge_math::Vec3 {
        let i = brush
            .faces()
            .iter()
            .position(|f| f.texture.name == RISER)
            .unwrap();
        brush.planes()[i].normal
    }

    #[test]
    fn test_stair_step_faces() {
        let config = ShapeConfig::default();
        let expected = [
            (Direction::East, -1.0, 0.0),
            (Direction::West, 1.0, 0.0),
            (Direction::North, 0.0, -1.0),
            (Direction::South, 0.0, 1.0),
        ];
        for (direction, nx, ny) in expected {
            let brush = stair_step_brush(&config, direction, &step_bounds(), &textures()).unwrap();
            assert_eq!(brush.len(), 6);
            let names = brush.texture_names();
            assert_eq!(names[0], MAIN);
            assert_eq!(names[5], "textures/common/caulk");
            assert_eq!(names.iter().filter(|&&n| n == RISER).count(), 1);

            let n = riser_normal(&brush);
            assert_relative_eq!(n.x, nx, epsilon = 1e-9);
            assert_relative_eq!(n.y, ny, epsilon = 1e-9);
            assert!(brush.contains_point(&step_bounds().center()));
        }
    }

    fn empty_caulk() -> ShapeConfig {
        ShapeConfig {
            caulk_texture: String::new(),
            ..Default::default()
        }
    }

    #[test]
    fn test_stair_step_rejects_empty_caulk() {
        let mut doc = MapDocument::new();
        let err = build_stair_step(
            &mut doc,
            &empty_caulk(),
            Direction::North,
            &step_bounds(),
            &textures(),
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter(_)));
        assert_eq!(doc.object_count(), 0);
    }

    #[test]
    fn test_stair_step_wedge_rejects_empty_caulk() {
        let mut doc = MapDocument::new();
        let err = build_stair_step_wedge(
            &mut doc,
            &empty_caulk(),
            Direction::West,
            &step_bounds(),
            &textures(),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter(_)));
        assert_eq!(doc.object_count(), 0);
    }

    #[test]
    fn test_stair_step_builders_are_deterministic() {
        let config = ShapeConfig::default();
        for direction in Direction::ALL {
            let a = stair_step_brush(&config, direction, &step_bounds(), &textures()).unwrap();
            let b = stair_step_brush(&config, direction, &step_bounds(), &textures()).unwrap();
            assert_eq!(a, b);

            let a = stair_step_wedge_brush(&config, direction, &step_bounds(), &textures(), true)
                .unwrap();
            let b = stair_step_wedge_brush(&config, direction, &step_bounds(), &textures(), true)
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_stair_step_wedge_faces() {
        let config = ShapeConfig::default();
        let b = step_bounds();
        for direction in Direction::ALL {
            let brush =
                stair_step_wedge_brush(&config, direction, &b, &textures(), true).unwrap();
            assert_eq!(brush.len(), 6, "{direction}");
            assert!(brush
                .faces()
                .iter()
                .all(|f| f.texture.contents & CONTENTS_DETAIL != 0));

            let mut inside = 0;
            for &x in &[b.min.x, b.max.x] {
                for &y in &[b.min.y, b.max.y] {
                    for &z in &[b.min.z, b.max.z] {
                        if brush.contains_point(&Point3::new(x, y, z)) {
                            inside += 1;
                        }
                    }
                }
            }
            assert_eq!(inside, 6, "{direction}");
        }
    }

    #[test]
    fn test_stair_step_wedge_slopes_under_tread() {
        let b = step_bounds();
        let brush = stair_step_wedge_brush(
            &ShapeConfig::default(),
            Direction::East,
            &b,
            &textures(),
            false,
        )
        .unwrap();
        // Riser at min.x is full height; the far end is only the top edge.
        assert!(brush.contains_point(&Point3::new(b.min.x + 1.0, 10.0, b.min.z + 1.0)));
        assert!(!brush.contains_point(&Point3::new(b.max.x - 1.0, 10.0, b.min.z + 1.0)));
        assert!(brush.contains_point(&Point3::new(b.max.x - 1.0, 10.0, b.max.z - 0.1)));
    }

    #[test]
    fn test_stair_step_wedge_without_detail() {
        let brush = stair_step_wedge_brush(
            &ShapeConfig::default(),
            Direction::North,
            &step_bounds(),
            &textures(),
            false,
        )
        .unwrap();
        assert!(brush.faces().iter().all(|f| !f.texture.is_detail()));
    }

    #[test]
    fn test_corner_arc_endpoints() {
        let pivot = Point3::new(64.0, 0.0, 0.0);
        let arc = corner_arc(&pivot, 10.0, 0.0, 32.0, 4);
        assert_eq!(arc.len(), 5);

        assert_relative_eq!(arc[0].top.x, 64.0, epsilon = 1e-9);
        assert_relative_eq!(arc[0].top.y, 10.0, epsilon = 1e-9);
        assert_relative_eq!(arc[0].top.z, 32.0);

        assert_relative_eq!(arc[4].top.x, 54.0, epsilon = 1e-9);
        assert_relative_eq!(arc[4].top.y, 0.0, epsilon = 1e-9);
        for p in &arc {
            assert_eq!(p.bottom.x, p.top.x);
            assert_eq!(p.bottom.y, p.top.y);
            assert_eq!(p.bottom.z, 0.0);
        }
    }

    fn stair_bounds() -> Aabb {
        Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(64.0, 64.0, 32.0)).unwrap()
    }

    #[test]
    fn test_corner_stairs_four_steps_then_bevel() {
        let mut doc = MapDocument::new();
        build_corner_stairs(
            &mut doc,
            &ShapeConfig::default(),
            &stair_bounds(),
            4,
            &textures(),
        )
        .unwrap();

        assert_eq!(doc.world.len(), 5);
        assert!(doc.world[..4]
            .iter()
            .all(|o| matches!(o, WorldObject::Brush(_))));
        match &doc.world[4] {
            WorldObject::Patch(patch) => {
                assert_eq!(patch.prefab, PatchPrefab::Bevel);
                assert_eq!(patch.texture, MAIN);
                assert_eq!(patch.bounds.min.z, 8.0);
                assert_eq!(patch.bounds.max.z, 40.0);
            }
            other => panic!("expected bevel, got {}", other.kind()),
        }
    }

    #[test]
    fn test_corner_step_occupies_its_sector() {
        let config = ShapeConfig::default();
        let stairs = corner_stair_brushes(&config, &stair_bounds(), 4, &textures()).unwrap();
        let pivot = Point3::new(64.0, 0.0, 0.0);

        for (i, brush) in stairs.steps.iter().enumerate() {
            assert_eq!(brush.len(), 6);
            let z = (i as f64 + 0.5) * stairs.step_height;
            let mid = FRAC_PI_2 * (i as f64 + 0.5) / 4.0;
            let inside = arc_point(&Point3::new(pivot.x, pivot.y, z), 5.0, mid);
            assert!(brush.contains_point(&inside), "step {i}");

            let next = FRAC_PI_2 * (i as f64 + 1.5) / 4.0;
            let outside = arc_point(&Point3::new(pivot.x, pivot.y, z), 5.0, next);
            assert!(!brush.contains_point(&outside), "step {i}");

            let above = Point3::new(inside.x, inside.y, z + stairs.step_height);
            assert!(!brush.contains_point(&above), "step {i}");
        }
    }

    #[test]
    fn test_corner_stairs_single_step() {
        let stairs = corner_stair_brushes(
            &ShapeConfig::default(),
            &stair_bounds(),
            1,
            &textures(),
        )
        .unwrap();
        assert_eq!(stairs.steps.len(), 1);
        assert_eq!(stairs.step_height, 32.0);
        assert_eq!(stairs.steps[0].texture_names()[3], MAIN);
    }

    #[test]
    fn test_corner_stairs_height_truncates() {
        // 30 / 4 truncates to 7, so the flight tops out at 28 rather than 30.
        let b = Aabb::new(Point3::origin(), Point3::new(64.0, 64.0, 30.0)).unwrap();
        let stairs = corner_stair_brushes(&ShapeConfig::default(), &b, 4, &textures()).unwrap();
        assert_eq!(stairs.step_height, 7.0);
        let last = stairs.steps.last().unwrap();
        let tread = last
            .faces()
            .iter()
            .find(|f| f.texture.name == MAIN)
            .unwrap();
        assert_eq!(tread.points[0].z, 28.0);
        assert!(tread.points[0].z < b.max.z);
    }

    #[test]
    fn test_corner_stairs_rejects_bad_counts() {
        let config = ShapeConfig::default();
        let mut doc = MapDocument::new();
        let err = build_corner_stairs(&mut doc, &config, &stair_bounds(), 0, &textures())
            .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter(_)));

        let short = Aabb::new(Point3::origin(), Point3::new(64.0, 64.0, 3.0)).unwrap();
        let err = build_corner_stairs(&mut doc, &config, &short, 4, &textures()).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter(_)));
        assert_eq!(doc.object_count(), 0);
    }

    /// Accepts a fixed number of world objects, then refuses.
    struct Limited {
        doc: MapDocument,
        remaining: usize,
    }

    impl SceneTarget for Limited {
        fn insert_into_world(&mut self, object: WorldObject) -> Result<(), SceneInsertionError> {
            if self.remaining == 0 {
                return Err(SceneInsertionError::new(object.kind(), "full"));
            }
            self.remaining -= 1;
            self.doc.insert_into_world(object)
        }

        fn insert_into_root(&mut self, entity: Entity) -> Result<(), SceneInsertionError> {
            self.doc.insert_into_root(entity)
        }
    }

    #[test]
    fn test_corner_stairs_partial_insert_is_kept() {
        let mut target = Limited {
            doc: MapDocument::new(),
            remaining: 2,
        };
        let err = build_corner_stairs(
            &mut target,
            &ShapeConfig::default(),
            &stair_bounds(),
            4,
            &textures(),
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::Scene(_)));
        assert_eq!(target.doc.world_brushes().count(), 2);
    }

    #[test]
    fn test_corner_stairs_deterministic() {
        let config = ShapeConfig::default();
        let a = corner_stair_brushes(&config, &stair_bounds(), 3, &textures()).unwrap();
        let b = corner_stair_brushes(&config, &stair_bounds(), 3, &textures()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_make_bevel() {
        let mut doc = MapDocument::new();
        make_bevel(&mut doc, &stair_bounds(), MAIN).unwrap();
        assert_eq!(doc.object_count(), 1);
        assert_eq!(doc.world[0].kind(), "patch");
    }
}
