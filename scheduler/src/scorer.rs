use crate::config::ScoreMode;
use crate::errors::ScoreError;
use crate::framework::lister::NodeInfoLister;

pub type RawScore = i64;

impl ScoreMode {
    /// Raw preference for a node with `memory` allocatable.
    ///
    /// Higher is better after normalization, so `Least` negates. The negation
    /// saturates: `i64::MIN` maps to `i64::MAX`.
    pub fn score(&self, memory: i64) -> RawScore {
        match self {
            ScoreMode::Least => memory.saturating_neg(),
            ScoreMode::Most => memory,
        }
    }
}

/// Raw score of one candidate node, read from the node snapshot.
pub fn score(
    nodes: &dyn NodeInfoLister,
    mode: ScoreMode,
    node_name: &str,
) -> Result<RawScore, ScoreError> {
    let info = nodes.get(node_name)?;
    Ok(mode.score(info.allocatable.memory))
}
