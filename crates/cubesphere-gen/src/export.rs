//! Writers that hand a generated mesh to external tools.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cubesphere_config::ExportFormat;
use cubesphere_mesh::{CubeSphereMesh, IndexGroup};

/// Errors raised while exporting a mesh.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Creating or writing the output file failed.
    #[error("failed to write mesh: {0}")]
    Io(#[from] io::Error),

    /// Serializing the mesh to RON failed.
    #[error("failed to serialize mesh: {0}")]
    Ron(#[from] ron::Error),
}

/// Write `mesh` to `path` in `format`, creating parent directories as needed.
pub fn write_mesh(
    mesh: &CubeSphereMesh,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Obj => write_obj(mesh, &mut writer)?,
        ExportFormat::Ron => write_ron(mesh, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Wavefront OBJ: positions, normals, then one `g` group per index list.
///
/// OBJ indices are 1-based; each face reuses the vertex index for its normal.
pub fn write_obj<W: Write>(mesh: &CubeSphereMesh, writer: &mut W) -> io::Result<()> {
    let params = mesh.params();
    writeln!(
        writer,
        "# cube-sphere resolution={} radius={}",
        params.resolution(),
        params.radius()
    )?;
    for [x, y, z] in mesh.positions() {
        writeln!(writer, "v {x} {y} {z}")?;
    }
    for [x, y, z] in mesh.normals() {
        writeln!(writer, "vn {x} {y} {z}")?;
    }
    for group in IndexGroup::ALL {
        writeln!(writer, "g {}", group.name())?;
        for tri in mesh.triangles(group) {
            let [a, b, c] = tri.map(|i| i + 1);
            writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
    }
    Ok(())
}

/// Pretty-printed RON of the whole mesh value.
pub fn write_ron<W: Write>(mesh: &CubeSphereMesh, writer: &mut W) -> Result<(), ExportError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .enumerate_arrays(false);
    let serialized = ron::ser::to_string_pretty(mesh, pretty)?;
    writer.write_all(serialized.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj_text(mesh: &CubeSphereMesh) -> String {
        let mut out = Vec::new();
        write_obj(mesh, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_obj_line_counts() {
        let mesh = CubeSphereMesh::new(3, 1.0).unwrap();
        let text = obj_text(&mesh);
        let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("v "), mesh.vertex_count());
        assert_eq!(count("vn "), mesh.vertex_count());
        assert_eq!(count("f "), mesh.triangle_count());
        assert_eq!(count("g "), 3);
    }

    #[test]
    fn test_obj_faces_are_one_based() {
        let mesh = CubeSphereMesh::new(1, 1.0).unwrap();
        let text = obj_text(&mesh);
        let first_face = text.lines().find(|l| l.starts_with("f ")).unwrap();
        // First Z-group triangle is (0, 4, 1).
        assert_eq!(first_face, "f 1//1 5//5 2//2");
        assert!(!text.contains(" 0//0"));
    }

    #[test]
    fn test_obj_groups_in_submesh_order() {
        let mesh = CubeSphereMesh::new(2, 1.0).unwrap();
        let text = obj_text(&mesh);
        let groups: Vec<_> = text.lines().filter(|l| l.starts_with("g ")).collect();
        assert_eq!(groups, vec!["g z", "g x", "g y"]);
    }

    #[test]
    fn test_ron_contains_index_lists() {
        let mesh = CubeSphereMesh::new(2, 1.0).unwrap();
        let mut out = Vec::new();
        write_ron(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for field in ["z_indices", "x_indices", "y_indices", "lattice_coords"] {
            assert!(text.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_write_mesh_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.obj");
        let mesh = CubeSphereMesh::new(2, 1.0).unwrap();
        write_mesh(&mesh, &path, ExportFormat::Obj).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# cube-sphere resolution=2 radius=1"));
    }
}
