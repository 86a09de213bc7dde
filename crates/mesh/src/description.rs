/// Errors from mesh ingestion.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("OBJ load error: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("corner index {index} out of range (position table holds {limit} vertices)")]
    IndexOutOfRange { index: u32, limit: usize },
}

/// One named group of triangles indexing the shared position table.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    /// Corner indices, three per triangle, into the shared position table.
    pub indices: Vec<u32>,
}

/// An indexed triangle mesh: one shared position table plus shapes whose
/// corners reference it.
///
/// Shared positions stay shared here; duplication happens at flatten time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshDescription {
    /// Shared position table: x, y, z per vertex.
    pub positions: Vec<f32>,
    pub shapes: Vec<Shape>,
}

impl MeshDescription {
    /// Number of vertices in the shared position table.
    pub fn position_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Total corner count across all shapes.
    pub fn corner_count(&self) -> usize {
        self.shapes.iter().map(|s| s.indices.len()).sum()
    }

    /// Total triangle count across all shapes.
    pub fn triangle_count(&self) -> usize {
        self.corner_count() / 3
    }

    /// Flatten every triangle corner, in mesh order, into one position
    /// stream ready for vertex-buffer upload.
    ///
    /// A shared position is emitted once per corner that references it.
    /// Any corner index outside the position table fails the whole
    /// operation; no partial buffer is produced.
    pub fn flatten(&self) -> Result<FlatPositionBuffer, MeshError> {
        let limit = self.position_count();
        let mut data = Vec::with_capacity(self.corner_count() * 3);
        for shape in &self.shapes {
            for &index in &shape.indices {
                if index as usize >= limit {
                    return Err(MeshError::IndexOutOfRange { index, limit });
                }
                let base = index as usize * 3;
                data.extend_from_slice(&self.positions[base..base + 3]);
            }
        }
        Ok(FlatPositionBuffer(data))
    }
}

/// Triangle corner positions flattened into one contiguous `f32` stream,
/// three components per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPositionBuffer(pub(crate) Vec<f32>);

impl FlatPositionBuffer {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Total float count, `3 x vertex_count`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of vertices in the stream.
    pub fn vertex_count(&self) -> usize {
        self.0.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_description() -> MeshDescription {
        // Unit quad in the XY plane, two triangles sharing a diagonal.
        MeshDescription {
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0, //
            ],
            shapes: vec![Shape {
                name: "quad".into(),
                indices: vec![0, 1, 2, 0, 2, 3],
            }],
        }
    }

    #[test]
    fn counts() {
        let mesh = quad_description();
        assert_eq!(mesh.position_count(), 4);
        assert_eq!(mesh.corner_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn flatten_expands_every_corner() {
        let buffer = quad_description().flatten().unwrap();
        assert_eq!(buffer.len(), 18);
        assert_eq!(buffer.vertex_count(), 6);
        // Corners 0 and 2 are shared by both triangles and appear twice,
        // in face order.
        let expected = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, //
        ];
        assert_eq!(buffer.as_slice(), &expected);
    }

    #[test]
    fn flatten_is_deterministic() {
        let mesh = quad_description();
        assert_eq!(mesh.flatten().unwrap(), mesh.flatten().unwrap());
    }

    #[test]
    fn flatten_walks_shapes_in_order() {
        let mut mesh = quad_description();
        mesh.shapes.push(Shape {
            name: "cap".into(),
            indices: vec![3, 2, 1],
        });
        let buffer = mesh.flatten().unwrap();
        assert_eq!(buffer.vertex_count(), 9);
        // The second shape's first corner follows the first shape's last.
        assert_eq!(&buffer.as_slice()[18..21], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_description_flattens_empty() {
        let buffer = MeshDescription::default().flatten().unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.vertex_count(), 0);
    }

    #[test]
    fn out_of_range_corner_fails() {
        let mut mesh = quad_description();
        mesh.shapes[0].indices[4] = 9;
        match mesh.flatten() {
            Err(MeshError::IndexOutOfRange { index, limit }) => {
                assert_eq!(index, 9);
                assert_eq!(limit, 4);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }
}
