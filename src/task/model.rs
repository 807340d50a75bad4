//! OBJ-subset model parser.
//!
//! Reads the two record types the scene models actually use: `v x y z`
//! vertices and `f a b c` triangles (indices may carry `/texture/normal`
//! suffixes, which are ignored). `#` comments, blank lines, and any
//! other record types are skipped. Mesh and material construction belong
//! to the renderer; this produces plain geometry data.

use glam::Vec3;

use crate::error::PathviewError;

/// Plain triangle-mesh geometry for the external renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangles as vertex-index triples (0-based).
    pub faces: Vec<[u32; 3]>,
}

/// Parse OBJ text into a fresh [`MeshData`].
///
/// # Errors
///
/// [`PathviewError::ModelParse`] for malformed vertex coordinates or
/// face indices, including indices pointing past the vertex list.
pub fn parse_obj(text: &str) -> Result<MeshData, PathviewError> {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let items: Vec<&str> = line.split_whitespace().collect();
        match items.as_slice() {
            ["v", x, y, z] => {
                vertices.push(Vec3::new(
                    parse_coord(x, lineno)?,
                    parse_coord(y, lineno)?,
                    parse_coord(z, lineno)?,
                ));
            }
            ["f", a, b, c] => {
                faces.push([
                    parse_index(a, vertices.len(), lineno)?,
                    parse_index(b, vertices.len(), lineno)?,
                    parse_index(c, vertices.len(), lineno)?,
                ]);
            }
            // Normals, texture coords, groups, quads: not used by the
            // scene models, skipped like every other unknown record
            _ => {}
        }
    }

    Ok(MeshData { vertices, faces })
}

fn parse_coord(item: &str, lineno: usize) -> Result<f32, PathviewError> {
    let value: f32 = item.parse().map_err(|_| {
        PathviewError::ModelParse(format!(
            "line {}: bad vertex coordinate '{item}'",
            lineno + 1
        ))
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PathviewError::ModelParse(format!(
            "line {}: non-finite vertex coordinate '{item}'",
            lineno + 1
        )))
    }
}

/// Parse a 1-based face index (possibly `idx/tex/nrm`) into a 0-based
/// vertex index, bounds-checked against the vertices seen so far.
fn parse_index(
    item: &str,
    vertex_count: usize,
    lineno: usize,
) -> Result<u32, PathviewError> {
    let head = item.split('/').next().unwrap_or(item);
    let index: u32 = head.parse().map_err(|_| {
        PathviewError::ModelParse(format!(
            "line {}: bad face index '{item}'",
            lineno + 1
        ))
    })?;
    if index == 0 || index as usize > vertex_count {
        return Err(PathviewError::ModelParse(format!(
            "line {}: face index {index} out of range (1..={vertex_count})",
            lineno + 1
        )));
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# a single triangle with one extra vertex
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1

f 1 2 3
f 1/1/1 2/2/2 4/4/4
";

    #[test]
    fn test_parses_vertices_and_faces() {
        let mesh = parse_obj(SAMPLE).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.vertices[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 1, 3]]);
    }

    #[test]
    fn test_slash_index_forms_accepted() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/5 2//7 3\n")
            .unwrap();
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_unknown_records_skipped() {
        let text = "vn 0 0 1\ng body\nv 0 0 0\nusemtl steel\n";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.vertices.len(), 1);
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn test_zero_index_rejected() {
        assert!(matches!(
            parse_obj("v 0 0 0\nf 0 0 0\n"),
            Err(PathviewError::ModelParse(_))
        ));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n"),
            Err(PathviewError::ModelParse(_))
        ));
    }

    #[test]
    fn test_bad_coordinate_rejected() {
        let err = parse_obj("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, PathviewError::ModelParse(ref msg)
            if msg.contains("zero")));
    }

    #[test]
    fn test_empty_model_is_valid() {
        // An empty mesh renders as nothing; unlike paths it has no
        // playback contract to violate
        let mesh = parse_obj("# nothing\n").unwrap();
        assert!(mesh.vertices.is_empty());
    }
}
