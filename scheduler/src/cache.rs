use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use shared::models::{node::Node, pod::Pod};
use uuid::Uuid;

use crate::errors::ListerError;
use crate::framework::lister::{LabelSelector, NodeInfo, NodeInfoLister, PodLister};

/// An in-memory concurrent view of pods and nodes, serving both listers.
///
/// Hosts feed it from their own watches; nothing here keeps it fresh.
#[derive(Debug, Default)]
pub struct ClusterCache {
    pods: DashMap<Uuid, Pod>,
    /// label key -> label value -> pod ids
    pod_label_idx: DashMap<String, DashMap<String, DashSet<Uuid>>>,
    nodes: DashMap<String, NodeInfo>,
}

impl ClusterCache {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Pod ops ---

    /// Inserts or replaces a pod, reindexing its labels.
    pub fn add_pod(&self, pod: &Pod) {
        let id = pod.metadata.id;
        if let Some(previous) = self.pods.insert(id, pod.clone()) {
            self.remove_pod_labels(&previous);
        }
        for (k, v) in &pod.metadata.labels {
            self.pod_label_idx
                .entry(k.clone())
                .or_default()
                .entry(v.clone())
                .or_default()
                .insert(id);
        }
    }

    pub fn delete_pod(&self, id: &Uuid) -> Option<Pod> {
        let (_, pod) = self.pods.remove(id)?;
        self.remove_pod_labels(&pod);
        Some(pod)
    }

    pub fn pod_count(&self) -> usize {
        self.pods.len()
    }

    fn remove_pod_labels(&self, pod: &Pod) {
        for (k, v) in &pod.metadata.labels {
            if let Some(inner) = self.pod_label_idx.get(k) {
                if let Some(set) = inner.get(v) {
                    set.remove(&pod.metadata.id);
                }
            }
        }
    }

    /// Ids of pods matching every requirement of the selector.
    pub fn query_pods_by_labels(&self, selector: &LabelSelector) -> Vec<Uuid> {
        if selector.is_empty() {
            return self.pods.iter().map(|entry| *entry.key()).collect();
        }

        let mut intersection: Option<HashSet<Uuid>> = None;
        for (k, v) in selector.requirements() {
            let ids: HashSet<Uuid> = match self.pod_label_idx.get(k) {
                Some(inner) => match inner.get(v) {
                    Some(set) => set.iter().map(|id| *id).collect(),
                    // no pods match
                    None => return Vec::new(),
                },
                // key not found
                None => return Vec::new(),
            };

            intersection = Some(match intersection {
                None => ids,
                Some(acc) => acc.intersection(&ids).copied().collect(),
            });
        }

        intersection.unwrap_or_default().into_iter().collect()
    }

    // --- Node ops ---

    pub fn add_node(&self, node: &Node) {
        self.nodes.insert(node.name.clone(), NodeInfo::from(node));
    }

    pub fn delete_node(&self, name: &str) -> Option<NodeInfo> {
        self.nodes.remove(name).map(|(_, info)| info)
    }
}

#[async_trait]
impl PodLister for ClusterCache {
    async fn list(&self, selector: &LabelSelector) -> Result<Vec<Pod>, ListerError> {
        Ok(self
            .query_pods_by_labels(selector)
            .iter()
            .filter_map(|id| self.pods.get(id).map(|entry| entry.clone()))
            .collect())
    }
}

impl NodeInfoLister for ClusterCache {
    fn get(&self, node_name: &str) -> Result<NodeInfo, ListerError> {
        self.nodes
            .get(node_name)
            .map(|entry| entry.clone())
            .ok_or_else(|| ListerError::NodeNotFound(node_name.to_string()))
    }

    fn list(&self) -> Vec<NodeInfo> {
        let mut nodes: Vec<NodeInfo> = self.nodes.iter().map(|entry| entry.clone()).collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        nodes
    }
}
