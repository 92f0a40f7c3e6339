//! YAML cluster snapshots.
//!
//! ```yaml
//! nodes:
//!   - name: node-a
//!     allocatable: { cpu: 4000, memory: 8589934592 }
//! pods:
//!   - metadata:
//!       name: worker-0
//!       labels: { podGroup: train, minAvailable: "2" }
//! ```

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use scheduler::ClusterCache;
use serde::Deserialize;
use shared::models::{
    node::Node,
    pod::{Pod, PodManifest},
};
use tokio::fs;

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    pods: Vec<PodManifest>,
    #[serde(default)]
    nodes: Vec<Node>,
}

/// Snapshot loaded into a cache the plugin can read from.
pub struct Cluster {
    pub cache: Arc<ClusterCache>,
    pub pods: Vec<Pod>,
}

impl Cluster {
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read snapshot '{}'", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse snapshot '{}'", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_yaml::from_str(content)?;

        let cache = Arc::new(ClusterCache::new());
        for node in &snapshot.nodes {
            cache.add_node(node);
        }

        let pods: Vec<Pod> = snapshot.pods.into_iter().map(Pod::from).collect();
        for pod in &pods {
            cache.add_pod(pod);
        }

        tracing::debug!(pods = pods.len(), nodes = snapshot.nodes.len(), "Loaded snapshot");
        Ok(Self { cache, pods })
    }

    pub fn pod(&self, name: &str) -> Result<&Pod> {
        self.pods
            .iter()
            .find(|pod| pod.metadata.name == name)
            .ok_or_else(|| anyhow!("pod '{}' not found in snapshot", name))
    }
}
