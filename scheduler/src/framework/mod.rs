//! Host-facing plugin surface.
//!
//! Status codes, the score bounds every score plugin must respect, the plugin
//! capability traits and the `Handle` through which plugins read cluster
//! state. The host drives these; this crate only implements them.

pub mod lister;

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use shared::models::pod::Pod;

use lister::{NodeInfoLister, PodLister};

/// Lowest score a node may be given after normalization.
pub const MIN_NODE_SCORE: i64 = 0;
/// Highest score a node may be given after normalization.
pub const MAX_NODE_SCORE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Success,
    /// Internal or configuration failure, not retried
    Error,
    /// Pod can't be placed right now, retried by the host
    Unschedulable,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Success => write!(f, "Success"),
            Code::Error => write!(f, "Error"),
            Code::Unschedulable => write!(f, "Unschedulable"),
        }
    }
}

/// Result of a plugin call as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: Code,
    reasons: Vec<String>,
}

impl Status {
    pub fn new(code: Code, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reasons = if reason.is_empty() { Vec::new() } else { vec![reason] };
        Self { code, reasons }
    }

    pub fn success() -> Self {
        Self::new(Code::Success, "")
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self::new(Code::Error, reason)
    }

    pub fn unschedulable(reason: impl Into<String>) -> Self {
        Self::new(Code::Unschedulable, reason)
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn is_success(&self) -> bool {
        self.code == Code::Success
    }

    pub fn message(&self) -> String {
        self.reasons.join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message())
        }
    }
}

/// Score of one candidate node for the pod being scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeScore {
    pub name: String,
    pub score: i64,
}

impl NodeScore {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Read-only views of cluster state handed to plugins at construction.
#[derive(Clone)]
pub struct Handle {
    pods: Arc<dyn PodLister>,
    nodes: Arc<dyn NodeInfoLister>,
}

impl Handle {
    pub fn new(pods: Arc<dyn PodLister>, nodes: Arc<dyn NodeInfoLister>) -> Self {
        Self { pods, nodes }
    }

    /// Handle backed by a single source serving both pods and nodes.
    pub fn shared<L>(lister: Arc<L>) -> Self
    where
        L: PodLister + NodeInfoLister + 'static,
    {
        Self {
            pods: lister.clone(),
            nodes: lister,
        }
    }

    pub fn pod_lister(&self) -> &dyn PodLister {
        self.pods.as_ref()
    }

    pub fn node_infos(&self) -> &dyn NodeInfoLister {
        self.nodes.as_ref()
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").finish_non_exhaustive()
    }
}

// --- Capabilities ---

pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;
}

/// Runs once per pod before any node is looked at.
#[async_trait]
pub trait PreFilterPlugin: Plugin {
    async fn pre_filter(&self, pod: &Pod) -> Status;
}

/// Runs once per (pod, node) pair.
pub trait ScorePlugin: Plugin {
    fn score(&self, pod: &Pod, node_name: &str) -> (i64, Status);

    fn score_extensions(&self) -> Option<&dyn ScoreExtensions> {
        None
    }
}

/// Runs once per pod over the scores of all candidate nodes.
pub trait ScoreExtensions: Send + Sync {
    fn normalize_score(&self, pod: &Pod, scores: &mut [NodeScore]) -> Status;
}
