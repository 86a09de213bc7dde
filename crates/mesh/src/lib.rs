//! Mesh ingestion: OBJ geometry in, flat position stream out.
//!
//! The description keeps the loader's shared position table; flattening
//! expands every triangle corner into its own vertex for the one-buffer,
//! non-indexed draw the renderer performs.
//!
//! # Invariants
//! - A description is built once at startup and never mutated afterwards.
//! - Flattening is order-preserving and never deduplicates.
//! - An out-of-range corner index fails the whole flatten; no partial
//!   buffer ever escapes.

pub mod description;
mod obj;

pub use description::{FlatPositionBuffer, MeshDescription, MeshError, Shape};

pub fn crate_info() -> &'static str {
    "wirescope-mesh v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("mesh"));
    }
}
