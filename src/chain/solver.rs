use super::body::BodyChain;
use crate::math::clamp_to_anchor;
use glam::Vec2;

/// One tick's worth of head motion: where the head wants to point and how
/// far it travels. Produced by the controller, consumed once, never stored.
#[derive(Debug, Clone, Copy)]
pub struct MotionCommand {
    pub heading: f32,
    pub speed: f32,
}

impl MotionCommand {
    pub fn new(heading: f32, speed: f32) -> Self {
        Self { heading, speed }
    }

    pub fn rest() -> Self {
        Self {
            heading: 0.0,
            speed: 0.0,
        }
    }
}

/// Head-driven follow solver for a [`BodyChain`].
pub struct ChainSolver;

impl ChainSolver {
    /// Advance the chain one tick, in place.
    ///
    /// The head's orientation is clamped against the *second* joint, not its
    /// own previous value: the head may only turn as sharply as the body
    /// right behind it allows. Every following joint is then resolved in
    /// increasing index order against its freshly updated predecessor — but
    /// only once stretched past `link_length`. Below that the joint and its
    /// angle keep last tick's values, which is what produces the undulating
    /// slack as the body catches up.
    ///
    /// A zero-speed command is a no-op: a chain at rest with all links within
    /// `link_length` is left bit-for-bit unchanged.
    pub fn update(chain: &mut BodyChain, command: MotionCommand) {
        if command.speed <= 0.0 {
            return;
        }

        log::trace!(
            "chain tick: heading {:.3} speed {:.1}",
            command.heading,
            command.speed
        );

        let max_turn = chain.max_turn;
        chain.angles[0] = clamp_to_anchor(command.heading, chain.angles[1], max_turn);

        let heading = chain.angles[0];
        chain.joints[0].position += Vec2::new(heading.cos(), heading.sin()) * command.speed;

        let link_length = chain.link_length;
        for i in 1..chain.joints.len() {
            let prev = chain.joints[i - 1].position;
            let curr = chain.joints[i].position;

            if prev.distance(curr) > link_length {
                let towards_prev = prev - curr;
                let raw = towards_prev.y.atan2(towards_prev.x);
                let angle = clamp_to_anchor(raw, chain.angles[i - 1], max_turn);
                chain.angles[i] = angle;
                chain.joints[i].position =
                    prev - Vec2::new(angle.cos(), angle.sin()) * link_length;
            }
        }
    }
}
