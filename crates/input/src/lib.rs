//! Input snapshot: the level-triggered view of the viewer's event set.
//!
//! # Invariants
//! - A held event fires on every poll until released.
//! - `fired()` yields events in `InputEvent::ALL` order, never in press
//!   order, so per-poll application is deterministic.

pub mod state;

pub use state::InputState;

pub fn crate_info() -> &'static str {
    "wirescope-input v0.1.0"
}
