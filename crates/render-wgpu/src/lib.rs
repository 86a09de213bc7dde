//! wgpu render backend for the wireframe viewer.
//!
//! Uploads the flattened position stream once, then redraws it every frame
//! under the current pose.
//!
//! # Invariants
//! - Vertex data is immutable after construction; per frame only the
//!   64-byte pose uniform is rewritten.
//! - Triangles rasterize in line polygon mode, so the device must offer
//!   `POLYGON_MODE_LINE`.

mod gpu;
mod shaders;

pub use gpu::WireframeRenderer;
