//! Rescale raw node scores into `[MIN_NODE_SCORE, MAX_NODE_SCORE]`.
//!
//! The mapping is linear from `[min, max]` of the raw scores onto the score
//! bounds, so it keeps the relative order of nodes. When every node scored the
//! same, all of them get the midpoint of the bounds.

use crate::framework::{MAX_NODE_SCORE, MIN_NODE_SCORE, NodeScore};

/// Score given to every node when raw scores don't tell them apart.
pub const NEUTRAL_NODE_SCORE: i64 = MIN_NODE_SCORE + (MAX_NODE_SCORE - MIN_NODE_SCORE) / 2;

/// Rewrites every score in place. An empty slice is left as is.
pub fn normalize(scores: &mut [NodeScore]) {
    let Some((min, max)) = bounds(scores) else {
        return;
    };

    // i128 keeps both the range and the product exact over the whole i64 domain
    let range = i128::from(max) - i128::from(min);
    if range == 0 {
        for node in scores.iter_mut() {
            node.score = NEUTRAL_NODE_SCORE;
        }
        return;
    }

    let span = i128::from(MAX_NODE_SCORE - MIN_NODE_SCORE);
    for node in scores.iter_mut() {
        // multiply before dividing
        let offset = (i128::from(node.score) - i128::from(min)) * span / range;
        node.score = MIN_NODE_SCORE + offset as i64;
    }

    debug_assert!(
        scores
            .iter()
            .all(|n| (MIN_NODE_SCORE..=MAX_NODE_SCORE).contains(&n.score))
    );
}

fn bounds(scores: &[NodeScore]) -> Option<(i64, i64)> {
    let min = scores.iter().map(|n| n.score).min()?;
    let max = scores.iter().map(|n| n.score).max()?;
    Some((min, max))
}
