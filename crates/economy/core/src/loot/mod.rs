//! Chest reward rolls and the RNG seam behind them.

pub mod rng;
pub mod roll;

pub use rng::{PcgRng, RngOracle, roll_seed};
pub use roll::{RollRange, RollSpec, roll_artifact_stats};
