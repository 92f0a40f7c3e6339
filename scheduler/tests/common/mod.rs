use std::sync::Arc;

use scheduler::gang::{GROUP_NAME_LABEL, MIN_AVAILABLE_LABEL};
use scheduler::{ClusterCache, GangScheduler, Handle, ScoreMode};
use shared::models::{
    node::{Node, Resources},
    pod::Pod,
};

pub fn group_pod(name: &str, group: &str, min_available: &str) -> Pod {
    let mut pod = Pod::default();
    pod.metadata.name = name.to_string();
    pod.metadata
        .labels
        .insert(GROUP_NAME_LABEL.to_string(), group.to_string());
    pod.metadata
        .labels
        .insert(MIN_AVAILABLE_LABEL.to_string(), min_available.to_string());
    pod
}

/// Cache holding two nodes, `node-a` with 1000 and `node-b` with 2000 memory.
pub fn two_node_cluster() -> Arc<ClusterCache> {
    let cache = Arc::new(ClusterCache::new());
    cache.add_node(&Node::new("node-a", Resources::with_memory(1000)));
    cache.add_node(&Node::new("node-b", Resources::with_memory(2000)));
    cache
}

pub fn plugin(mode: ScoreMode, cache: &Arc<ClusterCache>) -> GangScheduler {
    GangScheduler::with_mode(mode, Handle::shared(cache.clone()))
}
