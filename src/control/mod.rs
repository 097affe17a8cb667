//! Per-tick steering: turns raw host input into a [`MotionCommand`].

use crate::chain::{BodyChain, MotionCommand};
use glam::Vec2;

/// Heading change per tick while a turn key is held.
pub const TURN_STEP: f32 = 0.02;
/// Maximum drift allowed between the accumulated manual heading and the
/// head's actual orientation before snapping back.
pub const HEADING_SLACK: f32 = 0.5;
/// Radius around the seek target inside which the head stops advancing.
pub const DEAD_ZONE: f32 = 100.0;

/// Discrete directional commands held down this tick, plus the pointer and
/// the mode-toggle edge. Filled in by the host's input collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub pointer: Vec2,
    pub toggle_mode: bool,
}

/// Current surface dimensions, supplied by the host on demand. The header
/// band at the top of the surface is dead space: the seek target's vertical
/// coordinate is measured below it.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub header_offset: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            header_offset: 0.0,
        }
    }

    pub fn with_header_offset(mut self, header_offset: f32) -> Self {
        self.header_offset = header_offset;
        self
    }

    fn seek_target(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(pointer.x, pointer.y - self.header_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SteeringMode {
    Manual,
    Seek,
}

/// Resolves manual-heading vs. seek-target steering into one
/// [`MotionCommand`] per tick.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    mode: SteeringMode,
    heading: f32,
    cruise_speed: f32,
}

impl LocomotionController {
    pub fn new(cruise_speed: f32) -> Self {
        Self {
            mode: SteeringMode::Manual,
            heading: 0.0,
            cruise_speed,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.mode == SteeringMode::Manual
    }

    /// The accumulated manual heading. Meaningless while seeking.
    pub fn manual_heading(&self) -> f32 {
        self.heading
    }

    /// Produce this tick's motion command.
    ///
    /// Manual mode: turn keys nudge the accumulated heading by a fixed step,
    /// but only while moving — you cannot turn on the spot. If the heading
    /// has drifted more than [`HEADING_SLACK`] from the head's actual
    /// orientation (it keeps the last pre-stop value while stationary), it is
    /// snapped back before being applied.
    ///
    /// Seek mode holds no state: heading and speed come straight from the
    /// vector to the target, and inside [`DEAD_ZONE`] the command is rest.
    pub fn steer(&mut self, input: &InputState, viewport: Viewport, body: &BodyChain) -> MotionCommand {
        if input.toggle_mode {
            self.mode = match self.mode {
                SteeringMode::Manual => SteeringMode::Seek,
                SteeringMode::Seek => SteeringMode::Manual,
            };
            log::debug!("steering mode -> {:?}", self.mode);
        }

        match self.mode {
            SteeringMode::Manual => {
                let speed = if input.forward { self.cruise_speed } else { 0.0 };

                if input.turn_left && speed > 0.0 {
                    self.heading -= TURN_STEP;
                }
                if input.turn_right && speed > 0.0 {
                    self.heading += TURN_STEP;
                }

                if (self.heading - body.head_angle()).abs() > HEADING_SLACK {
                    self.heading = body.head_angle();
                }

                MotionCommand::new(self.heading, speed)
            }
            SteeringMode::Seek => {
                let target = viewport.seek_target(input.pointer);
                let offset = target - body.head();
                if offset.length() <= DEAD_ZONE {
                    return MotionCommand::rest();
                }

                MotionCommand::new(offset.y.atan2(offset.x), self.cruise_speed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{BodyChain, ChainSolver};
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn body_at(origin: Vec2) -> BodyChain {
        BodyChain::builder()
            .origin(origin)
            .joint_count(8)
            .link_length(50.0)
            .max_turn(PI / 8.0)
            .build()
    }

    fn seek_controller() -> LocomotionController {
        let mut controller = LocomotionController::new(4.0);
        // construction starts manual; one toggle edge flips to seek
        let toggle = InputState {
            toggle_mode: true,
            ..InputState::default()
        };
        controller.steer(&toggle, Viewport::new(800.0, 600.0), &body_at(Vec2::ZERO));
        controller
    }

    #[test]
    fn turn_is_ignored_while_stationary() {
        let mut controller = LocomotionController::new(4.0);
        let body = body_at(Vec2::ZERO);
        let input = InputState {
            turn_left: true,
            ..InputState::default()
        };

        for _ in 0..50 {
            let cmd = controller.steer(&input, Viewport::new(800.0, 600.0), &body);
            assert_eq!(cmd.speed, 0.0);
        }
        assert_relative_eq!(controller.manual_heading(), 0.0);
    }

    #[test]
    fn turn_accumulates_while_moving() {
        let mut controller = LocomotionController::new(4.0);
        let body = body_at(Vec2::ZERO);
        let input = InputState {
            turn_right: true,
            forward: true,
            ..InputState::default()
        };

        for _ in 0..10 {
            controller.steer(&input, Viewport::new(800.0, 600.0), &body);
        }
        assert_relative_eq!(controller.manual_heading(), 10.0 * TURN_STEP, epsilon = 1e-5);
    }

    #[test]
    fn runaway_manual_heading_snaps_back_to_head() {
        let mut controller = LocomotionController::new(4.0);
        controller.heading = 0.9; // far past the slack; head still points at 0
        let body = body_at(Vec2::ZERO);

        let cmd = controller.steer(&InputState::default(), Viewport::new(800.0, 600.0), &body);
        assert_relative_eq!(cmd.heading, body.head_angle());
        assert_relative_eq!(controller.manual_heading(), body.head_angle());
    }

    #[test]
    fn seek_inside_dead_zone_is_rest() {
        let mut controller = seek_controller();
        let body = body_at(Vec2::new(100.0, 100.0));
        let input = InputState {
            pointer: Vec2::new(110.0, 100.0),
            ..InputState::default()
        };

        let before = body.head();
        let mut body = body;
        let cmd = controller.steer(&input, Viewport::new(800.0, 600.0), &body);
        ChainSolver::update(&mut body, cmd);

        assert_eq!(cmd.speed, 0.0);
        assert_eq!(body.head(), before);
    }

    #[test]
    fn seek_beyond_dead_zone_advances_along_clamped_heading() {
        let mut controller = seek_controller();
        let mut body = body_at(Vec2::ZERO);
        let input = InputState {
            pointer: Vec2::new(1000.0, 0.0),
            ..InputState::default()
        };

        let cmd = controller.steer(&input, Viewport::new(1200.0, 600.0), &body);
        assert_eq!(cmd.speed, 4.0);
        ChainSolver::update(&mut body, cmd);

        assert!(crate::math::signed_difference(body.head_angle(), 0.0).abs() <= PI / 8.0 + 1e-5);
        assert_relative_eq!(body.head().length(), 4.0, epsilon = 1e-4);
    }

    #[test]
    fn header_offset_shifts_seek_target_up() {
        let mut controller = seek_controller();
        let body = body_at(Vec2::ZERO);
        let viewport = Viewport::new(800.0, 600.0).with_header_offset(170.0);
        let input = InputState {
            pointer: Vec2::new(0.0, 470.0),
            ..InputState::default()
        };

        let cmd = controller.steer(&input, viewport, &body);
        // effective target (0, 300): straight down from the head
        assert_relative_eq!(cmd.heading, PI / 2.0, epsilon = 1e-5);
    }
}
