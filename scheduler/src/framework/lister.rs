//! Collaborator interfaces the host provides to plugins.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use async_trait::async_trait;
use shared::models::{
    node::{Node, Resources},
    pod::Pod,
};

use crate::errors::ListerError;

/// Exact-match label selector. All requirements must hold; an empty
/// selector matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelector {
    match_labels: BTreeMap<String, String>,
}

impl LabelSelector {
    pub fn from_set<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            match_labels: labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty()
    }

    pub fn requirements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.match_labels
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn matches(&self, labels: &HashMap<String, String>) -> bool {
        self.requirements()
            .all(|(k, v)| labels.get(k).is_some_and(|actual| actual == v))
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .requirements()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Lists pods currently visible to the host.
#[async_trait]
pub trait PodLister: Send + Sync {
    async fn list(&self, selector: &LabelSelector) -> Result<Vec<Pod>, ListerError>;

    /// Number of visible pods carrying `key=value`.
    async fn count_by_label(&self, key: &str, value: &str) -> Result<usize, ListerError> {
        let selector = LabelSelector::from_set([(key, value)]);
        Ok(self.list(&selector).await?.len())
    }
}

/// Node as seen by the scheduling snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub name: String,
    pub allocatable: Resources,
}

impl From<&Node> for NodeInfo {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            allocatable: node.allocatable,
        }
    }
}

/// Point-in-time node snapshot lookups.
pub trait NodeInfoLister: Send + Sync {
    fn get(&self, node_name: &str) -> Result<NodeInfo, ListerError>;
    fn list(&self) -> Vec<NodeInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn selector_requires_every_pair() {
        let selector = LabelSelector::from_set([("podGroup", "a"), ("tier", "gpu")]);

        assert!(selector.matches(&labels(&[("podGroup", "a"), ("tier", "gpu"), ("x", "y")])));
        assert!(!selector.matches(&labels(&[("podGroup", "a")])));
        assert!(!selector.matches(&labels(&[("podGroup", "b"), ("tier", "gpu")])));
    }

    #[test]
    fn empty_selector_matches_all() {
        let selector = LabelSelector::default();
        assert!(selector.is_empty());
        assert!(selector.matches(&HashMap::new()));
    }

    #[test]
    fn display_is_sorted() {
        let selector = LabelSelector::from_set([("b", "2"), ("a", "1")]);
        assert_eq!(selector.to_string(), "a=1,b=2");
    }
}
