use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete viewer input event.
///
/// Events are level-triggered: a held key fires its event once per poll, so
/// the accumulation rate tracks the poll rate, not wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputEvent {
    /// Translate along +Y.
    MoveUp,
    /// Translate along -Y.
    MoveDown,
    /// Translate along -X.
    MoveLeft,
    /// Translate along +X.
    MoveRight,
    /// Rotate about the Y axis by the positive step angle.
    RotateCw,
    /// Rotate about the Y axis by the negative step angle.
    RotateCcw,
    /// Scale uniformly by the step ratio.
    ScaleUp,
    /// Scale uniformly by the inverse step ratio.
    ScaleDown,
    /// End the session.
    Quit,
}

impl InputEvent {
    /// Every event in canonical order. Events fired in the same poll are
    /// applied in this order; `Quit` sorts last so motion fired alongside
    /// it still lands before termination.
    pub const ALL: [InputEvent; 9] = [
        InputEvent::MoveUp,
        InputEvent::MoveDown,
        InputEvent::MoveLeft,
        InputEvent::MoveRight,
        InputEvent::RotateCw,
        InputEvent::RotateCcw,
        InputEvent::ScaleUp,
        InputEvent::ScaleDown,
        InputEvent::Quit,
    ];

    /// Kebab-case token, used by the CLI and in serialized form.
    pub fn token(self) -> &'static str {
        match self {
            InputEvent::MoveUp => "move-up",
            InputEvent::MoveDown => "move-down",
            InputEvent::MoveLeft => "move-left",
            InputEvent::MoveRight => "move-right",
            InputEvent::RotateCw => "rotate-cw",
            InputEvent::RotateCcw => "rotate-ccw",
            InputEvent::ScaleUp => "scale-up",
            InputEvent::ScaleDown => "scale-down",
            InputEvent::Quit => "quit",
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error for an unrecognized event token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input event token: {0}")]
pub struct ParseEventError(pub String);

impl FromStr for InputEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputEvent::ALL
            .into_iter()
            .find(|e| e.token() == s)
            .ok_or_else(|| ParseEventError(s.to_string()))
    }
}

/// Fixed per-event step magnitudes.
///
/// Each qualifying event moves the pose by exactly one step; holding a key
/// at 60 polls per second accumulates sixty steps per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Steps {
    /// Translation distance per event, in world units.
    pub translation: f32,
    /// Rotation angle per event, in radians.
    pub rotation: f32,
    /// Uniform scale ratio per event, > 1.
    pub scale: f32,
}

impl Default for Steps {
    fn default() -> Self {
        Self {
            translation: 0.01,
            rotation: 1.0_f32.to_radians(),
            scale: 1.01,
        }
    }
}
