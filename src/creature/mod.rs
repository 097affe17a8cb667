//! Creature assembly: one generic body/limb core configured per species.
//!
//! Snake, fish and lizard differ only in joint counts, widths and which
//! appendages hang off the spine, so a declarative [`SpeciesConfig`] drives a
//! single [`Creature`] type instead of one type per animal.

use crate::chain::{BodyChain, ChainSolver};
use crate::control::{InputState, LocomotionController, Viewport};
use crate::limb::{Limb, LimbAttachment, Side};
use glam::Vec2;
use std::f32::consts::PI;

/// Per-species body plan. All lengths in surface units.
#[derive(Debug, Clone)]
pub struct SpeciesConfig {
    pub name: &'static str,
    pub joint_count: usize,
    pub link_length: f32,
    pub max_turn: f32,
    pub cruise_speed: f32,
    pub body_widths: Vec<f32>,
    pub limbs: Vec<LimbAttachment>,
}

impl SpeciesConfig {
    pub fn snake() -> Self {
        // head joints are wider than the taper that follows
        let mut widths = vec![76.0, 80.0];
        widths.extend((2..48).map(|i| 64.0 - i as f32));
        Self {
            name: "snake",
            joint_count: 48,
            link_length: 32.0,
            max_turn: PI / 8.0,
            cruise_speed: 4.0,
            body_widths: widths,
            limbs: Vec::new(),
        }
    }

    pub fn fish() -> Self {
        Self {
            name: "fish",
            joint_count: 12,
            link_length: 64.0,
            max_turn: PI / 8.0,
            cruise_speed: 4.0,
            body_widths: vec![68.0, 81.0, 84.0, 83.0, 77.0, 64.0, 51.0, 38.0, 32.0, 19.0],
            limbs: Vec::new(),
        }
    }

    pub fn lizard() -> Self {
        let mut limbs = Vec::with_capacity(4);
        for i in 0..4 {
            let front = i < 2;
            limbs.push(LimbAttachment {
                spine_index: if front { 3 } else { 7 },
                side: if i % 2 == 0 { Side::Left } else { Side::Right },
                lift_angle: if front { PI / 4.0 } else { PI / 3.0 },
                reach: 80.0,
                joint_count: 4,
                joint_size: if front { 60.0 } else { 30.0 },
            });
        }
        Self {
            name: "lizard",
            joint_count: 14,
            link_length: 64.0,
            max_turn: PI / 8.0,
            cruise_speed: 4.0,
            body_widths: vec![
                52.0, 58.0, 40.0, 60.0, 68.0, 71.0, 65.0, 50.0, 28.0, 15.0, 11.0, 9.0, 7.0, 7.0,
            ],
            limbs,
        }
    }
}

/// One live creature: its spine, its limbs and its steering state. Owns all
/// of its joint arrays exclusively; ticked by the host once per frame.
pub struct Creature {
    config: SpeciesConfig,
    body: BodyChain,
    limbs: Vec<Limb>,
    controller: LocomotionController,
}

impl Creature {
    pub fn new(config: SpeciesConfig, origin: Vec2) -> Self {
        let body = BodyChain::builder()
            .origin(origin)
            .joint_count(config.joint_count)
            .link_length(config.link_length)
            .max_turn(config.max_turn)
            .sizes(&config.body_widths)
            .build();

        let limbs = config
            .limbs
            .iter()
            .map(|attachment| Limb::new(*attachment, &body))
            .collect();

        let controller = LocomotionController::new(config.cruise_speed);

        Self {
            config,
            body,
            limbs,
            controller,
        }
    }

    pub fn species(&self) -> &str {
        self.config.name
    }

    pub fn body(&self) -> &BodyChain {
        &self.body
    }

    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn controller(&self) -> &LocomotionController {
        &self.controller
    }

    /// Bend of the tail relative to the head, for fin/tail rendering.
    pub fn tail_curvature(&self) -> f32 {
        self.body.curvature(0, self.body.joint_count() - 1)
    }

    /// Advance one animation tick.
    ///
    /// Order matters: the controller reads the pre-tick head pose, the spine
    /// updates front to back, and only then are limb targets re-planned from
    /// the fresh spine and solved. Renderers read the result afterwards.
    pub fn tick(&mut self, input: &InputState, viewport: Viewport) {
        let command = self.controller.steer(input, viewport, &self.body);
        ChainSolver::update(&mut self.body, command);
        for limb in &mut self.limbs {
            limb.update(&self.body);
        }
    }
}
