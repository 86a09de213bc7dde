use glam::{Mat4, Vec3};
use wirescope_common::{InputEvent, Steps};

/// Accumulator lifecycle. `Terminated` is absorbing: there is no way back
/// to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// The incremental operator for one event, or `None` for `Quit`, which has
/// no spatial effect.
///
/// This table is the whole interaction model; each entry is a small affine
/// matrix meant to be composed onto an existing pose:
///
/// | event | operator |
/// |---|---|
/// | `MoveUp` / `MoveDown` | translation (0, ±s, 0) |
/// | `MoveLeft` / `MoveRight` | translation (∓s, 0, 0) |
/// | `RotateCw` / `RotateCcw` | rotation ±θ about Y |
/// | `ScaleUp` / `ScaleDown` | uniform scale k, 1/k |
pub fn operator_matrix(event: InputEvent, steps: Steps) -> Option<Mat4> {
    let s = steps.translation;
    let theta = steps.rotation;
    let k = steps.scale;
    match event {
        InputEvent::MoveUp => Some(Mat4::from_translation(Vec3::new(0.0, s, 0.0))),
        InputEvent::MoveDown => Some(Mat4::from_translation(Vec3::new(0.0, -s, 0.0))),
        InputEvent::MoveLeft => Some(Mat4::from_translation(Vec3::new(-s, 0.0, 0.0))),
        InputEvent::MoveRight => Some(Mat4::from_translation(Vec3::new(s, 0.0, 0.0))),
        InputEvent::RotateCw => Some(Mat4::from_rotation_y(theta)),
        InputEvent::RotateCcw => Some(Mat4::from_rotation_y(-theta)),
        InputEvent::ScaleUp => Some(Mat4::from_scale(Vec3::splat(k))),
        InputEvent::ScaleDown => Some(Mat4::from_scale(Vec3::splat(1.0 / k))),
        InputEvent::Quit => None,
    }
}

/// Owns the single object-to-world pose and composes one incremental
/// operator onto it per qualifying event.
///
/// The pose is never recomputed from an absolute description. Every event
/// multiplies a small operator onto the right of the running product, so
/// the motion lands in the object's current frame: a rotated object
/// translates along its rotated axes. That trajectory dependence is the
/// intended behavior, and the reason operation order matters.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseAccumulator {
    pose: Mat4,
    state: RunState,
}

impl PoseAccumulator {
    /// Identity pose, running.
    pub fn new() -> Self {
        Self {
            pose: Mat4::IDENTITY,
            state: RunState::Running,
        }
    }

    /// Apply one event.
    ///
    /// `Quit` transitions to `Terminated` without touching the pose; every
    /// other event composes its operator. After termination all events are
    /// ignored, so a driver that polls once more cannot corrupt the final
    /// pose. Cannot fail.
    pub fn apply(&mut self, event: InputEvent, steps: Steps) {
        if self.state == RunState::Terminated {
            return;
        }
        match operator_matrix(event, steps) {
            Some(op) => self.pose *= op,
            None => self.state = RunState::Terminated,
        }
    }

    /// By-value snapshot of the current pose.
    pub fn current(&self) -> Mat4 {
        self.pose
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == RunState::Terminated
    }
}

impl Default for PoseAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn steps() -> Steps {
        Steps::default()
    }

    #[test]
    fn starts_at_identity_and_running() {
        let acc = PoseAccumulator::new();
        assert_eq!(acc.current(), Mat4::IDENTITY);
        assert_eq!(acc.state(), RunState::Running);
        assert!(!acc.is_terminated());
    }

    #[test]
    fn current_is_a_snapshot() {
        let acc = PoseAccumulator::new();
        let mut snapshot = acc.current();
        snapshot.w_axis.x = 123.0;
        assert_eq!(acc.current(), Mat4::IDENTITY);
    }

    #[test]
    fn operator_table_matches_constructors() {
        let s = steps();
        let t = s.translation;
        let cases = [
            (
                InputEvent::MoveUp,
                Mat4::from_translation(Vec3::new(0.0, t, 0.0)),
            ),
            (
                InputEvent::MoveDown,
                Mat4::from_translation(Vec3::new(0.0, -t, 0.0)),
            ),
            (
                InputEvent::MoveLeft,
                Mat4::from_translation(Vec3::new(-t, 0.0, 0.0)),
            ),
            (
                InputEvent::MoveRight,
                Mat4::from_translation(Vec3::new(t, 0.0, 0.0)),
            ),
            (InputEvent::RotateCw, Mat4::from_rotation_y(s.rotation)),
            (InputEvent::RotateCcw, Mat4::from_rotation_y(-s.rotation)),
            (InputEvent::ScaleUp, Mat4::from_scale(Vec3::splat(s.scale))),
            (
                InputEvent::ScaleDown,
                Mat4::from_scale(Vec3::splat(1.0 / s.scale)),
            ),
        ];
        for (event, expected) in cases {
            assert_eq!(operator_matrix(event, s), Some(expected), "{event}");
        }
        assert_eq!(operator_matrix(InputEvent::Quit, s), None);
    }

    #[test]
    fn every_motion_event_moves_the_pose() {
        for event in InputEvent::ALL {
            if event == InputEvent::Quit {
                continue;
            }
            let mut acc = PoseAccumulator::new();
            acc.apply(event, steps());
            assert_ne!(acc.current(), Mat4::IDENTITY, "{event}");
        }
    }

    #[test]
    fn move_up_sets_translation_column() {
        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::MoveUp, steps());
        let pose = acc.current();
        assert!((pose.w_axis.y - 0.01).abs() < EPS);
        assert_eq!(pose.w_axis.x, 0.0);
        assert_eq!(pose.w_axis.z, 0.0);
        assert_eq!(pose.x_axis, Mat4::IDENTITY.x_axis);
    }

    #[test]
    fn rotate_after_move_composes_rather_than_overwrites() {
        let s = steps();
        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::MoveUp, s);
        acc.apply(InputEvent::RotateCw, s);
        let expected = Mat4::from_translation(Vec3::new(0.0, s.translation, 0.0))
            * Mat4::from_rotation_y(s.rotation);
        assert!(acc.current().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn same_sequence_same_pose() {
        let s = steps();
        let sequence = [
            InputEvent::MoveRight,
            InputEvent::RotateCw,
            InputEvent::ScaleUp,
            InputEvent::MoveUp,
            InputEvent::RotateCcw,
        ];
        let mut a = PoseAccumulator::new();
        let mut b = PoseAccumulator::new();
        for &event in &sequence {
            a.apply(event, s);
        }
        for &event in &sequence {
            b.apply(event, s);
        }
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn lateral_move_and_rotation_are_order_sensitive() {
        let s = steps();
        let mut move_then_rotate = PoseAccumulator::new();
        move_then_rotate.apply(InputEvent::MoveRight, s);
        move_then_rotate.apply(InputEvent::RotateCw, s);

        let mut rotate_then_move = PoseAccumulator::new();
        rotate_then_move.apply(InputEvent::RotateCw, s);
        rotate_then_move.apply(InputEvent::MoveRight, s);

        let a = move_then_rotate.current();
        let b = rotate_then_move.current();
        assert!(!a.abs_diff_eq(b, EPS));
        // Moving first leaves the offset axis-aligned; rotating first
        // carries the offset through the rotation.
        assert!((a.w_axis.x - s.translation).abs() < EPS);
        assert_eq!(a.w_axis.z, 0.0);
        assert!((b.w_axis.x - s.translation * s.rotation.cos()).abs() < EPS);
        assert!((b.w_axis.z + s.translation * s.rotation.sin()).abs() < EPS);
    }

    #[test]
    fn translation_along_rotation_axis_commutes() {
        // A vertical offset is invariant under a rotation about Y, so this
        // is the one move/rotate pairing that is order-insensitive.
        let s = steps();
        let mut up_then_rotate = PoseAccumulator::new();
        up_then_rotate.apply(InputEvent::MoveUp, s);
        up_then_rotate.apply(InputEvent::RotateCw, s);

        let mut rotate_then_up = PoseAccumulator::new();
        rotate_then_up.apply(InputEvent::RotateCw, s);
        rotate_then_up.apply(InputEvent::MoveUp, s);

        let a = up_then_rotate.current();
        let b = rotate_then_up.current();
        assert!(a.abs_diff_eq(b, EPS));
    }

    #[test]
    fn opposite_moves_cancel() {
        let s = steps();
        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::MoveUp, s);
        acc.apply(InputEvent::MoveDown, s);
        assert!(acc.current().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn opposite_rotations_cancel() {
        let s = steps();
        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::RotateCw, s);
        acc.apply(InputEvent::RotateCcw, s);
        assert!(acc.current().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn scale_round_trip_returns_near_identity() {
        let s = steps();
        let mut acc = PoseAccumulator::new();
        for _ in 0..100 {
            acc.apply(InputEvent::ScaleUp, s);
        }
        for _ in 0..100 {
            acc.apply(InputEvent::ScaleDown, s);
        }
        assert!(acc.current().abs_diff_eq(Mat4::IDENTITY, 1e-3));
    }

    #[test]
    fn pose_stays_invertible_over_long_sequences() {
        let s = steps();
        let pattern = [
            InputEvent::MoveRight,
            InputEvent::RotateCw,
            InputEvent::ScaleUp,
            InputEvent::MoveDown,
            InputEvent::RotateCcw,
            InputEvent::MoveLeft,
            InputEvent::ScaleDown,
            InputEvent::MoveUp,
        ];
        let mut acc = PoseAccumulator::new();
        for _ in 0..250 {
            for &event in &pattern {
                acc.apply(event, s);
            }
        }
        let pose = acc.current();
        assert!(pose.determinant().abs() > 1e-3);
        assert!((pose.inverse() * pose).abs_diff_eq(Mat4::IDENTITY, 1e-3));
    }

    #[test]
    fn quit_terminates_and_freezes_pose() {
        let s = steps();
        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::MoveUp, s);
        let before = acc.current();

        acc.apply(InputEvent::Quit, s);
        assert!(acc.is_terminated());
        assert_eq!(acc.state(), RunState::Terminated);
        assert_eq!(acc.current(), before);

        acc.apply(InputEvent::MoveRight, s);
        acc.apply(InputEvent::ScaleUp, s);
        acc.apply(InputEvent::Quit, s);
        assert!(acc.is_terminated());
        assert_eq!(acc.current(), before);
    }

    #[test]
    fn quarter_turn_swings_a_point_around_y() {
        let s = Steps {
            rotation: std::f32::consts::FRAC_PI_2,
            ..Steps::default()
        };
        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::RotateCw, s);
        let moved = acc.current().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(moved.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
    }

    #[test]
    fn custom_steps_feed_the_operators() {
        let s = Steps {
            translation: 2.0,
            rotation: std::f32::consts::FRAC_PI_2,
            scale: 3.0,
        };
        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::MoveLeft, s);
        assert!((acc.current().w_axis.x + 2.0).abs() < EPS);

        let mut acc = PoseAccumulator::new();
        acc.apply(InputEvent::ScaleUp, s);
        assert!((acc.current().x_axis.x - 3.0).abs() < EPS);
    }
}
