//! Wavefront OBJ export.

use anyhow::{Context, Result};
use mesh_core::{MeshData, MeshVertex};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `mesh` to `path`, creating parent directories. Each submesh becomes a `g` group.
pub fn write_obj<V: MeshVertex>(path: &Path, mesh: &MeshData<V>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_obj_to(&mut w, mesh).with_context(|| format!("write {}", path.display()))?;
    w.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

pub fn write_obj_to<W: Write, V: MeshVertex>(w: &mut W, mesh: &MeshData<V>) -> std::io::Result<()> {
    let has_uv = mesh.vertices().first().is_some_and(|v| v.uv().is_some());

    writeln!(w, "# meshgen")?;
    writeln!(w, "o {}", mesh.name)?;
    for v in mesh.vertices() {
        let p = v.position();
        writeln!(w, "v {} {} {}", p.x, p.y, p.z)?;
    }
    if has_uv {
        for v in mesh.vertices() {
            let uv = v.uv().unwrap_or_default();
            writeln!(w, "vt {} {}", uv.x, uv.y)?;
        }
    }
    for v in mesh.vertices() {
        let n = v.normal();
        writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for submesh in mesh.submeshes() {
        writeln!(w, "g {}", submesh.name)?;
        for [a, b, c] in submesh.triangles() {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            if has_uv {
                writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
            } else {
                writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
            }
        }
    }
    Ok(())
}
