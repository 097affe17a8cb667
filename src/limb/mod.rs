//! Limb chains: a two-pass FABRIK solver plus the per-tick target planner
//! that decides where each foot should plant.

mod chain;
mod planner;

pub use chain::{LimbChain, SEGMENT_INSET};
pub use planner::{Limb, LimbAttachment, Side, SMOOTHING_FACTOR, TARGET_HYSTERESIS};
