//! Gang admission and memory preference scoring for the cluster scheduler.
//!
//! - `gang`: holds a pod back until enough members of its group are visible
//! - `scorer`: raw per-node score from allocatable memory
//! - `normalize`: rescales raw scores into the framework's score bounds
//! - `plugin`: adapts the three onto the host's plugin traits

pub mod cache;
pub mod config;
pub mod errors;
pub mod framework;
pub mod gang;
pub mod normalize;
pub mod plugin;
pub mod scorer;

#[cfg(test)]
pub mod test_lister;

pub use cache::ClusterCache;
pub use config::{SchedulerArgs, ScoreMode};
pub use framework::{Handle, MAX_NODE_SCORE, MIN_NODE_SCORE, NodeScore, Status};
pub use gang::Admission;
pub use plugin::GangScheduler;
