//! Schedule-based progress and ETA.

pub mod calculator;
pub mod estimate;

pub use calculator::{compute_progress, compute_remaining, remaining_time, RemainingTime};
pub use estimate::LiveEstimate;
