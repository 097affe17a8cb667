use super::chain::LimbChain;
use crate::chain::BodyChain;
use glam::Vec2;
use std::f32::consts::PI;

/// Minimum drift before a limb's planned target is re-committed.
pub const TARGET_HYSTERESIS: f32 = 200.0;
/// Per-tick blend fraction from the current foot position towards the
/// committed target.
pub const SMOOTHING_FACTOR: f32 = 0.4;

/// Which flank of the body a limb hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Where and how a limb attaches to the spine.
///
/// `spine_index` picks the trunk joint; `lift_angle` (signed by `side`) and
/// `reach` place the desired foot plant out in front of that joint, while the
/// root anchor sits at ±π/2 off the same joint, inset towards the body.
#[derive(Debug, Clone, Copy)]
pub struct LimbAttachment {
    pub spine_index: usize,
    pub side: Side,
    pub lift_angle: f32,
    pub reach: f32,
    pub joint_count: usize,
    pub joint_size: f32,
}

impl LimbAttachment {
    const ROOT_INSET: f32 = -20.0;

    fn desired(&self, body: &BodyChain) -> Vec2 {
        body.attachment_point(self.spine_index, self.lift_angle * self.side.sign(), self.reach)
    }

    fn root_anchor(&self, body: &BodyChain) -> Vec2 {
        body.attachment_point(
            self.spine_index,
            (PI / 2.0) * self.side.sign(),
            Self::ROOT_INSET,
        )
    }
}

/// A planted limb: its joint chain plus the committed foot target the
/// hysteresis logic maintains.
#[derive(Debug, Clone)]
pub struct Limb {
    chain: LimbChain,
    attachment: LimbAttachment,
    committed: Vec2,
}

impl Limb {
    pub fn new(attachment: LimbAttachment, body: &BodyChain) -> Self {
        let root = attachment.root_anchor(body);
        Self {
            chain: LimbChain::new(root, attachment.joint_count, attachment.joint_size),
            attachment,
            committed: attachment.desired(body),
        }
    }

    pub fn chain(&self) -> &LimbChain {
        &self.chain
    }

    pub fn attachment(&self) -> &LimbAttachment {
        &self.attachment
    }

    pub fn committed_target(&self) -> Vec2 {
        self.committed
    }

    /// Re-plan and re-solve this limb against the freshly updated body.
    ///
    /// The committed target only moves when the desired plant point has
    /// drifted past the hysteresis radius, so the foot holds its plant
    /// instead of jittering every tick. The effector then eases towards the
    /// committed point at a fixed fraction per tick; the root anchor is
    /// re-pinned fresh with no smoothing.
    pub fn update(&mut self, body: &BodyChain) {
        let desired = self.attachment.desired(body);
        if desired.distance(self.committed) > TARGET_HYSTERESIS {
            self.committed = desired;
        }

        let effector_target = self.chain.effector().lerp(self.committed, SMOOTHING_FACTOR);
        let root_anchor = self.attachment.root_anchor(body);
        self.chain.fabrik_resolve(effector_target, root_anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{BodyChain, ChainSolver, MotionCommand};
    use approx::assert_relative_eq;

    fn trunk() -> BodyChain {
        BodyChain::builder()
            .origin(Vec2::new(500.0, 500.0))
            .joint_count(14)
            .link_length(64.0)
            .max_turn(PI / 8.0)
            .sizes(&[52.0, 58.0, 40.0, 60.0, 68.0, 71.0, 65.0, 50.0, 28.0])
            .build()
    }

    fn front_left() -> LimbAttachment {
        LimbAttachment {
            spine_index: 3,
            side: Side::Left,
            lift_angle: PI / 4.0,
            reach: 80.0,
            joint_count: 4,
            joint_size: 60.0,
        }
    }

    #[test]
    fn small_drift_keeps_committed_target() {
        let mut body = trunk();
        let mut limb = Limb::new(front_left(), &body);
        let committed = limb.committed_target();

        // a short advance moves the desired point well under the hysteresis radius
        ChainSolver::update(&mut body, MotionCommand::new(0.0, 4.0));
        limb.update(&body);

        assert_eq!(limb.committed_target(), committed);
    }

    #[test]
    fn large_drift_recommits_target() {
        let mut body = trunk();
        let mut limb = Limb::new(front_left(), &body);
        let committed = limb.committed_target();

        // drag the body until the desired plant point has left the radius
        for _ in 0..100 {
            ChainSolver::update(&mut body, MotionCommand::new(0.0, 4.0));
        }
        limb.update(&body);

        let new_committed = limb.committed_target();
        assert_ne!(new_committed, committed);
        assert!(committed.distance(new_committed) > TARGET_HYSTERESIS);
    }

    #[test]
    fn foot_eases_towards_committed_target() {
        let body = trunk();
        let mut limb = Limb::new(front_left(), &body);

        let before = limb.chain().effector();
        let committed = limb.committed_target();
        limb.update(&body);

        // the forward pass pins the effector at the lerped point before the
        // backward pass re-relaxes it; it must end closer to the target
        let after = limb.chain().effector();
        assert!(after.distance(committed) <= before.distance(committed) + 1e-3);
    }

    #[test]
    fn root_stays_pinned_to_shoulder() {
        let body = trunk();
        let mut limb = Limb::new(front_left(), &body);
        limb.update(&body);

        let shoulder = body.attachment_point(3, PI / 2.0, -20.0);
        assert_relative_eq!(limb.chain().root().x, shoulder.x, epsilon = 1e-4);
        assert_relative_eq!(limb.chain().root().y, shoulder.y, epsilon = 1e-4);
    }
}
