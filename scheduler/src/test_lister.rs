//! Listers for unit tests with switchable failures and call recording.

use std::sync::Mutex;

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{node::Node, pod::Pod};

use crate::errors::ListerError;
use crate::framework::lister::{LabelSelector, NodeInfo, NodeInfoLister, PodLister};

#[derive(Debug, Default)]
pub struct FailingLister {
    pub pods: Vec<Pod>,
    pub nodes: DashMap<String, NodeInfo>,
    pub fail_list: bool,
    pub fail_get: bool,

    pub list_calls: Mutex<Vec<String>>,
    pub get_calls: Mutex<Vec<String>>,
}

impl FailingLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn fail_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    pub fn with_pod(mut self, pod: &Pod) -> Self {
        self.pods.push(pod.clone());
        self
    }

    pub fn with_node(self, node: &Node) -> Self {
        self.nodes.insert(node.name.clone(), NodeInfo::from(node));
        self
    }
}

#[async_trait]
impl PodLister for FailingLister {
    async fn list(&self, selector: &LabelSelector) -> Result<Vec<Pod>, ListerError> {
        self.list_calls.lock().unwrap().push(selector.to_string());

        if self.fail_list {
            return Err(ListerError::Backend("Forced error".into()));
        }
        Ok(self
            .pods
            .iter()
            .filter(|pod| selector.matches(&pod.metadata.labels))
            .cloned()
            .collect())
    }
}

impl NodeInfoLister for FailingLister {
    fn get(&self, node_name: &str) -> Result<NodeInfo, ListerError> {
        self.get_calls.lock().unwrap().push(node_name.to_string());

        if self.fail_get {
            return Err(ListerError::Backend("Forced error".into()));
        }
        self.nodes
            .get(node_name)
            .map(|entry| entry.clone())
            .ok_or_else(|| ListerError::NodeNotFound(node_name.to_string()))
    }

    fn list(&self) -> Vec<NodeInfo> {
        self.nodes.iter().map(|entry| entry.clone()).collect()
    }
}
