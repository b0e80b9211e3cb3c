//! Quake 3 `.map` text export.
//!
//! Writes worldspawn (brushes and `patchDef2` patches) followed by each
//! root entity with its brushes. Brush lines use the standard texdef form:
//!
//! ```text
//! ( x y z ) ( x y z ) ( x y z ) shader shiftS shiftT rot scaleS scaleT contents flags 0
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use brushforge_brush::{Brush, Face};
use brushforge_math::Point3;

use crate::target::WorldObject;
use crate::{MapDocument, Patch};

/// Shader names in map files omit the leading `textures/`.
fn shader_name(name: &str) -> &str {
    name.strip_prefix("textures/").unwrap_or(name)
}

fn write_point<W: Write>(out: &mut W, p: &Point3) -> io::Result<()> {
    write!(out, "( {} {} {} )", p.x, p.y, p.z)
}

fn write_face<W: Write>(out: &mut W, face: &Face) -> io::Result<()> {
    for (i, p) in face.points.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write_point(out, p)?;
    }
    let t = &face.texture;
    writeln!(
        out,
        " {} {} {} {} {} {} {} {} 0",
        shader_name(&t.name),
        t.shift[0],
        t.shift[1],
        t.rotation,
        t.scale[0],
        t.scale[1],
        t.contents,
        t.flags
    )
}

fn write_brush<W: Write>(out: &mut W, index: usize, brush: &Brush) -> io::Result<()> {
    writeln!(out, "// brush {index}")?;
    writeln!(out, "{{")?;
    for face in brush.faces() {
        write_face(out, face)?;
    }
    writeln!(out, "}}")
}

fn write_patch<W: Write>(out: &mut W, index: usize, patch: &Patch) -> io::Result<()> {
    writeln!(out, "// brush {index}")?;
    writeln!(out, "{{")?;
    writeln!(out, "patchDef2")?;
    writeln!(out, "{{")?;
    writeln!(out, "{}", shader_name(&patch.texture))?;
    writeln!(out, "( {} {} 0 0 0 )", patch.width, patch.height)?;
    writeln!(out, "(")?;
    for row in patch.control.chunks(patch.width.max(1)) {
        write!(out, "(")?;
        for cp in row {
            let p = &cp.position;
            write!(out, " ( {} {} {} {} {} )", p.x, p.y, p.z, cp.st[0], cp.st[1])?;
        }
        writeln!(out, " )")?;
    }
    writeln!(out, ")")?;
    writeln!(out, "}}")?;
    writeln!(out, "}}")
}

/// Write `doc` as `.map` text.
pub fn write_map<W: Write>(doc: &MapDocument, out: &mut W) -> io::Result<()> {
    writeln!(out, "// entity 0")?;
    writeln!(out, "{{")?;
    writeln!(out, "\"classname\" \"worldspawn\"")?;
    for (i, object) in doc.world.iter().enumerate() {
        match object {
            WorldObject::Brush(brush) => write_brush(out, i, brush)?,
            WorldObject::Patch(patch) => write_patch(out, i, patch)?,
        }
    }
    writeln!(out, "}}")?;

    for (n, entity) in doc.entities.iter().enumerate() {
        writeln!(out, "// entity {}", n + 1)?;
        writeln!(out, "{{")?;
        for (key, value) in entity.key_values() {
            writeln!(out, "\"{key}\" \"{value}\"")?;
        }
        for (i, brush) in entity.brushes().iter().enumerate() {
            write_brush(out, i, brush)?;
        }
        writeln!(out, "}}")?;
    }
    Ok(())
}

/// Write `doc` to a `.map` file at `path`.
pub fn save_map(doc: &MapDocument, path: impl AsRef<Path>) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_map(doc, &mut out)?;
    out.flush()
}

impl MapDocument {
    /// Render the document as `.map` text.
    pub fn to_map_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = write_map(self, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entity, SceneTarget};
    use brushforge_brush::build_bounding_cube;
    use brushforge_math::Aabb;

    #[test]
    fn test_map_text() {
        let bounds = Aabb::new(Point3::origin(), Point3::new(64.0, 32.0, 16.0)).unwrap();
        let mut doc = MapDocument::new();
        doc.insert_into_world(WorldObject::Brush(
            build_bounding_cube(&bounds, "textures/common/caulk").unwrap(),
        ))
        .unwrap();
        doc.insert_into_world(WorldObject::Patch(Patch::bevel(&bounds, "textures/x/y")))
            .unwrap();
        let mut door = Entity::new("func_door");
        door.set_key_value("angle", "90");
        door.attach_brush(build_bounding_cube(&bounds, "textures/common/caulk").unwrap());
        doc.insert_into_root(door).unwrap();

        let text = doc.to_map_string();
        assert!(text.starts_with("// entity 0\n{\n\"classname\" \"worldspawn\"\n"));
        assert!(text.contains("( 0 0 0 ) ( 64 0 0 ) ( 0 32 0 ) common/caulk 0 0 0 0.5 0.5 0 0 0\n"));
        assert!(text.contains("patchDef2\n{\nx/y\n( 3 3 0 0 0 )\n"));
        assert!(text.contains("// entity 1\n{\n\"classname\" \"func_door\"\n\"angle\" \"90\"\n"));
        assert_eq!(text.matches("common/caulk").count(), 12);
    }
}
