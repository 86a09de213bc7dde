//! Renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never feed anything back into the accumulator; they consume
//!   by-value pose snapshots.
//! - Output derives from the flat position buffer and the pose alone.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "wirescope-render v0.1.0"
}
