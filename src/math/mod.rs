//! Math utilities module
//!
//! Scalar angle arithmetic and the distance-constraint primitive shared by
//! every solver in the crate.

mod angle;
mod vec;

pub use angle::{clamp_to_anchor, normalize, signed_difference};
pub use vec::constrain_distance;
