//! Transform accumulation: the pose composition model at the heart of the
//! viewer.
//!
//! # Invariants
//! - The pose starts at identity and is mutated only by
//!   `PoseAccumulator::apply`; everything else sees by-value snapshots.
//! - Composition is `pose = pose * operator`, so each step lands in the
//!   object's current frame and trajectories are order-sensitive.
//! - `Quit` terminates exactly once; afterwards the pose is frozen and
//!   `apply` is a no-op.

pub mod accumulator;

pub use accumulator::{PoseAccumulator, RunState, operator_matrix};

pub fn crate_info() -> &'static str {
    "wirescope-pose v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("pose"));
    }
}
