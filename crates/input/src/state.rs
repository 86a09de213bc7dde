use std::collections::HashSet;
use wirescope_common::InputEvent;

/// Pressed-set snapshot fed by key edges from the windowing layer.
///
/// The windowing layer reports press/release edges; consumers poll levels.
/// Holding a key keeps its event firing on every poll, which is what makes
/// the accumulation rate track the poll rate.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release edge for one event.
    pub fn set_pressed(&mut self, event: InputEvent, pressed: bool) {
        if pressed {
            self.pressed.insert(event);
        } else {
            self.pressed.remove(&event);
        }
    }

    pub fn is_pressed(&self, event: InputEvent) -> bool {
        self.pressed.contains(&event)
    }

    /// Currently-pressed events, in `InputEvent::ALL` order rather than
    /// press order.
    pub fn fired(&self) -> impl Iterator<Item = InputEvent> + '_ {
        InputEvent::ALL
            .into_iter()
            .filter(|event| self.pressed.contains(event))
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
