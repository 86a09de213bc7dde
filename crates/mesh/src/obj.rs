use crate::description::{MeshDescription, MeshError, Shape};
use std::path::Path;

impl MeshDescription {
    /// Load OBJ geometry from disk.
    ///
    /// Faces are triangulated on load and point/line elements dropped.
    /// Position indices stay separate from normal/texcoord indices, and
    /// each model's indices are rebased into the one shared position
    /// table. Material trouble is irrelevant to a wireframe: it is logged
    /// and ignored, while any geometry failure aborts the load.
    pub fn from_obj_file(path: impl AsRef<Path>) -> Result<MeshDescription, MeshError> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        };
        let (models, materials) = tobj::load_obj(path, &options)?;
        if let Err(e) = materials {
            tracing::warn!("material load failed for {}: {e}", path.display());
        }

        let mut description = MeshDescription::default();
        for model in models {
            let base = description.position_count() as u32;
            description.positions.extend(model.mesh.positions);
            description.shapes.push(Shape {
                name: model.name,
                indices: model.mesh.indices.iter().map(|&i| i + base).collect(),
            });
        }

        tracing::debug!(
            "loaded {}: {} shapes, {} positions, {} triangles",
            path.display(),
            description.shapes.len(),
            description.position_count(),
            description.triangle_count()
        );
        Ok(description)
    }
}
