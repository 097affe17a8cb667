use super::joint::Joint;
use crate::math::signed_difference;
use glam::Vec2;
use std::f32::consts::TAU;

/// An articulated spine: a fixed-length run of joints with one orientation
/// per joint.
///
/// Joint count is set once at build time and never changes; `joints` and
/// `angles` stay the same length for the chain's whole lifetime. Consecutive
/// spacing is only capped from above by `link_length` — a joint closer than
/// that to its predecessor is left alone by the solver, which is what gives
/// the body its slack, elastic follow.
#[derive(Debug, Clone)]
pub struct BodyChain {
    pub(crate) joints: Vec<Joint>,
    pub(crate) angles: Vec<f32>,
    pub(crate) link_length: f32,
    pub(crate) max_turn: f32,
}

impl BodyChain {
    pub fn builder() -> BodyChainBuilder {
        BodyChainBuilder::new()
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn link_length(&self) -> f32 {
        self.link_length
    }

    pub fn max_turn(&self) -> f32 {
        self.max_turn
    }

    pub fn head(&self) -> Vec2 {
        self.joints[0].position
    }

    pub fn head_angle(&self) -> f32 {
        self.angles[0]
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.joints.iter().map(|j| j.position)
    }

    /// Point offset from joint `i`, rotated by `angle_offset` relative to the
    /// joint's orientation and pushed `joint.size + length_offset` out.
    ///
    /// Limb shoulders, limb reach targets, eyes and fins all hang off the
    /// body through this.
    pub fn attachment_point(&self, i: usize, angle_offset: f32, length_offset: f32) -> Vec2 {
        let angle = self.angles[i] + angle_offset;
        self.joints[i].position
            + Vec2::new(angle.cos(), angle.sin()) * (self.joints[i].size + length_offset)
    }

    /// Relative phase between two joints' orientations, in `(−π, π]`.
    ///
    /// Renderers use this as the bend magnitude for tail and fin curvature.
    pub fn curvature(&self, i: usize, j: usize) -> f32 {
        signed_difference(self.angles[i], self.angles[j])
    }
}

/// Builds a [`BodyChain`] laid out in a straight line behind its origin,
/// all orientations zero.
pub struct BodyChainBuilder {
    origin: Vec2,
    joint_count: usize,
    link_length: f32,
    max_turn: f32,
    sizes: Vec<f32>,
}

impl BodyChainBuilder {
    pub fn new() -> Self {
        Self {
            origin: Vec2::ZERO,
            joint_count: 2,
            link_length: 0.0,
            max_turn: TAU,
            sizes: Vec::new(),
        }
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn joint_count(mut self, joint_count: usize) -> Self {
        self.joint_count = joint_count.max(2);
        self
    }

    pub fn link_length(mut self, link_length: f32) -> Self {
        self.link_length = link_length;
        self
    }

    pub fn max_turn(mut self, max_turn: f32) -> Self {
        self.max_turn = max_turn;
        self
    }

    /// Per-joint half-widths, indexed from the head. Missing entries reuse
    /// the last given value; an empty list means zero-width joints.
    pub fn sizes(mut self, sizes: &[f32]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    pub fn build(self) -> BodyChain {
        let mut joints = Vec::with_capacity(self.joint_count);
        let mut angles = Vec::with_capacity(self.joint_count);

        for i in 0..self.joint_count {
            let size = self
                .sizes
                .get(i)
                .or(self.sizes.last())
                .copied()
                .unwrap_or(0.0);
            let position = self.origin - Vec2::new(i as f32 * self.link_length, 0.0);
            joints.push(Joint::new(position, size));
            angles.push(0.0);
        }

        BodyChain {
            joints,
            angles,
            link_length: self.link_length,
            max_turn: self.max_turn,
        }
    }
}

impl Default for BodyChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
