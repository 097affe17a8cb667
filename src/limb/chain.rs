use crate::chain::Joint;
use crate::math::constrain_distance;
use glam::Vec2;

/// Fixed shortening applied to each joint's `size` to get its segment length.
pub const SEGMENT_INSET: f32 = 5.0;

/// A short joint chain for a leg or fin. Joint 0 is the effector (foot),
/// the last joint is the root (shoulder/hip).
///
/// Unlike the body chain there is no per-joint orientation and the spacing
/// constraint is an exact equality: after every solve, consecutive joints sit
/// at exactly `joint.size − SEGMENT_INSET` apart.
#[derive(Debug, Clone)]
pub struct LimbChain {
    joints: Vec<Joint>,
}

impl LimbChain {
    /// Lay out `joint_count` joints of uniform `size`, all at `origin`.
    /// The first solve pulls them apart.
    pub fn new(origin: Vec2, joint_count: usize, size: f32) -> Self {
        Self {
            joints: vec![Joint::new(origin, size); joint_count.max(2)],
        }
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn effector(&self) -> Vec2 {
        self.joints[0].position
    }

    pub fn root(&self) -> Vec2 {
        self.joints[self.joints.len() - 1].position
    }

    /// One forward + one backward relaxation sweep, in place.
    ///
    /// Forward: pin the effector to `effector_target`, walk towards the root
    /// constraining each joint to its just-updated predecessor. Backward: pin
    /// the root to `root_anchor`, walk back down. Exactly one sweep runs per
    /// call — when the reach is long the chain does not land taut in a single
    /// tick, and settles over consecutive ticks as both ends keep being
    /// re-pinned. That slower plant is the intended motion character.
    pub fn fabrik_resolve(&mut self, effector_target: Vec2, root_anchor: Vec2) {
        let n = self.joints.len();

        self.joints[0].position = effector_target;
        for i in 1..n {
            let segment = self.joints[i].size - SEGMENT_INSET;
            self.joints[i].position = constrain_distance(
                self.joints[i].position,
                self.joints[i - 1].position,
                segment,
            );
        }

        self.joints[n - 1].position = root_anchor;
        for i in (0..n - 1).rev() {
            let segment = self.joints[i].size - SEGMENT_INSET;
            self.joints[i].position = constrain_distance(
                self.joints[i].position,
                self.joints[i + 1].position,
                segment,
            );
        }
    }
}
