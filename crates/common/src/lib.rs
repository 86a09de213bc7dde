//! Shared vocabulary for the wirescope viewer.
//!
//! # Invariants
//! - `InputEvent::ALL` is the canonical apply order; `Quit` sorts last so
//!   motion fired in the terminating poll still lands.
//! - Step magnitudes are per-event constants, never scaled by frame time.

pub mod settings;
pub mod types;

pub use settings::{Settings, SettingsError};
pub use types::{InputEvent, ParseEventError, Steps};
