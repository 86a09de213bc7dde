use glam::Mat4;
use wirescope_mesh::FlatPositionBuffer;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes one pose snapshot per frame and produces output.
/// The pose is owned by the accumulator; a renderer only ever sees copies.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame under the given pose.
    fn render(&self, pose: &Mat4) -> Self::Output;
}

/// Text renderer for headless surfaces: CLI output, logging, tests.
///
/// Prints the vertex count and the pose as four numeric rows, translation
/// in the rightmost column. The GPU backend lives in its own crate.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    vertex_count: usize,
}

impl DebugTextRenderer {
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count }
    }

    /// Count vertices from the buffer the GPU backend would consume.
    pub fn for_buffer(buffer: &FlatPositionBuffer) -> Self {
        Self::new(buffer.vertex_count())
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, pose: &Mat4) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Wireframe ({} vertices) ===\n", self.vertex_count));
        let cols = pose.to_cols_array_2d();
        for row in 0..4 {
            out.push_str(&format!(
                "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]\n",
                cols[0][row],
                cols[1][row],
                cols[2][row],
                cols[3][row]
            ));
        }
        out
    }
}
