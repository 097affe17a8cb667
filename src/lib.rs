//! # creature-ik
//!
//! Procedural locomotion for articulated 2D creatures: snake, fish and
//! lizard-like bodies driven by directional input or a moving target.
//!
//! ## Features
//! - Angle-constrained chain-follow solver for undulating spines
//! - Single-sweep FABRIK limb solver with foot-plant hysteresis
//! - Manual-heading and seek-target steering with a dead zone
//! - Declarative per-species body plans (one generic core, no subclassing)
//!
//! ## Example
//! ```rust
//! use creature_ik::{Creature, InputState, SpeciesConfig, Viewport};
//! use glam::Vec2;
//!
//! let viewport = Viewport::new(1280.0, 720.0);
//! let mut lizard = Creature::new(SpeciesConfig::lizard(), Vec2::new(640.0, 360.0));
//!
//! // flip to seek mode, then chase the pointer each frame
//! let mut input = InputState { toggle_mode: true, ..InputState::default() };
//! lizard.tick(&input, viewport);
//!
//! input.toggle_mode = false;
//! input.pointer = Vec2::new(1000.0, 500.0);
//! for _ in 0..60 {
//!     lizard.tick(&input, viewport);
//! }
//! assert!(lizard.body().head().distance(Vec2::new(1000.0, 500.0)) < 500.0);
//! ```

pub mod chain;
pub mod control;
pub mod creature;
pub mod limb;
pub mod math;

pub use chain::{BodyChain, BodyChainBuilder, ChainSolver, Joint, MotionCommand};
pub use control::{InputState, LocomotionController, Viewport};
pub use creature::{Creature, SpeciesConfig};
pub use limb::{Limb, LimbAttachment, LimbChain, Side};
