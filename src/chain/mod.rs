//! Body-chain data model and the head-driven follow solver.

mod body;
mod joint;
mod solver;

pub use body::{BodyChain, BodyChainBuilder};
pub use joint::Joint;
pub use solver::{ChainSolver, MotionCommand};
