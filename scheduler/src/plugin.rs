//! Framework adapter over the gate, scorer and normalizer.

use async_trait::async_trait;
use shared::models::pod::Pod;

use crate::config::{SchedulerArgs, ScoreMode};
use crate::errors::{ConfigError, GangError};
use crate::framework::{
    Handle, NodeScore, Plugin, PreFilterPlugin, ScoreExtensions, ScorePlugin, Status,
};
use crate::gang::{self, Admission};
use crate::{normalize, scorer};

/// Name used in the host's registry and profiles.
pub const NAME: &str = "CustomScheduler";

#[derive(Debug)]
pub struct GangScheduler {
    handle: Handle,
    mode: ScoreMode,
}

impl GangScheduler {
    /// Plugin factory. Without args the mode defaults to `Least`; args that
    /// are present must name a valid mode.
    pub fn new(args: Option<&serde_json::Value>, handle: Handle) -> Result<Self, ConfigError> {
        let args = match args {
            Some(raw) => SchedulerArgs::from_json(raw).inspect_err(|error| {
                tracing::error!(%error, "Rejecting plugin args");
            })?,
            None => SchedulerArgs::default(),
        };
        Ok(Self::with_mode(args.mode, handle))
    }

    pub fn with_mode(mode: ScoreMode, handle: Handle) -> Self {
        tracing::info!(%mode, "Custom scheduler runs with the mode");
        Self { handle, mode }
    }

    pub fn mode(&self) -> ScoreMode {
        self.mode
    }
}

impl Plugin for GangScheduler {
    fn name(&self) -> &'static str {
        NAME
    }
}

#[async_trait]
impl PreFilterPlugin for GangScheduler {
    async fn pre_filter(&self, pod: &Pod) -> Status {
        tracing::debug!(pod=%pod.metadata.name, "PreFilter");

        match gang::admit(self.handle.pod_lister(), pod).await {
            Ok(Admission::Admitted { .. }) => Status::success(),
            Ok(outcome @ Admission::Unschedulable { .. }) => {
                tracing::info!(pod=%pod.metadata.name, %outcome, "Waiting for group");
                Status::unschedulable("Not enough pods in the group.")
            }
            Err(error @ GangError::Query(_)) => {
                tracing::error!(pod=%pod.metadata.name, %error, "Group lookup failed");
                Status::error(error.to_string())
            }
            Err(error) => {
                tracing::warn!(pod=%pod.metadata.name, %error, "Invalid group labels");
                Status::error(error.to_string())
            }
        }
    }
}

impl ScorePlugin for GangScheduler {
    fn score(&self, pod: &Pod, node_name: &str) -> (i64, Status) {
        tracing::debug!(pod=%pod.metadata.name, node=%node_name, "Score");

        match scorer::score(self.handle.node_infos(), self.mode, node_name) {
            Ok(score) => (score, Status::success()),
            Err(error) => {
                tracing::warn!(pod=%pod.metadata.name, node=%node_name, %error, "Could not score node");
                (0, Status::error(error.to_string()))
            }
        }
    }

    fn score_extensions(&self) -> Option<&dyn ScoreExtensions> {
        Some(self)
    }
}

impl ScoreExtensions for GangScheduler {
    fn normalize_score(&self, pod: &Pod, scores: &mut [NodeScore]) -> Status {
        tracing::debug!(pod=%pod.metadata.name, nodes = scores.len(), "NormalizeScore");
        normalize::normalize(scores);
        Status::success()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cache::ClusterCache;
    use crate::framework::Code;
    use crate::gang::{GROUP_NAME_LABEL, MIN_AVAILABLE_LABEL};
    use crate::test_lister::FailingLister;
    use serde_json::json;
    use shared::models::node::{Node, Resources};

    fn plugin(mode: ScoreMode, cache: &Arc<ClusterCache>) -> GangScheduler {
        GangScheduler::with_mode(mode, Handle::shared(cache.clone()))
    }

    fn member(group: &str, min: &str) -> Pod {
        let mut pod = Pod::default();
        pod.metadata
            .labels
            .insert(GROUP_NAME_LABEL.to_string(), group.to_string());
        pod.metadata
            .labels
            .insert(MIN_AVAILABLE_LABEL.to_string(), min.to_string());
        pod
    }

    #[test]
    fn factory_defaults_and_validates_mode() {
        let cache = Arc::new(ClusterCache::new());

        let p = GangScheduler::new(None, Handle::shared(cache.clone())).unwrap();
        assert_eq!(p.mode(), ScoreMode::Least);
        assert_eq!(p.name(), "CustomScheduler");

        let args = json!({ "mode": "Most" });
        let p = GangScheduler::new(Some(&args), Handle::shared(cache.clone())).unwrap();
        assert_eq!(p.mode(), ScoreMode::Most);

        let args = json!({ "mode": "Balanced" });
        let err = GangScheduler::new(Some(&args), Handle::shared(cache)).unwrap_err();
        assert_eq!(err.to_string(), "invalid mode, got \"Balanced\"");
    }

    #[tokio::test]
    async fn pre_filter_maps_outcomes_to_codes() {
        let cache = Arc::new(ClusterCache::new());
        let p = plugin(ScoreMode::Least, &cache);

        let first = member("train", "2");
        cache.add_pod(&first);
        assert_eq!(p.pre_filter(&first).await.code(), Code::Unschedulable);

        cache.add_pod(&member("train", "2"));
        assert_eq!(p.pre_filter(&first).await, Status::success());

        let mut unlabeled = Pod::default();
        unlabeled.metadata.name = "stray".to_string();
        let status = p.pre_filter(&unlabeled).await;
        assert_eq!(status.code(), Code::Error);
        assert_eq!(status.message(), "pod stray is missing label \"podGroup\"");

        let status = p.pre_filter(&member("train", "two")).await;
        assert_eq!(status.code(), Code::Error);
    }

    #[tokio::test]
    async fn pre_filter_query_failure_is_error_not_unschedulable() {
        let lister = Arc::new(FailingLister::new().fail_list());
        let p = GangScheduler::with_mode(ScoreMode::Least, Handle::shared(lister));

        let status = p.pre_filter(&member("train", "1")).await;
        assert_eq!(status.code(), Code::Error);
        assert!(status.message().starts_with("error listing pods"));
    }

    #[test]
    fn score_failure_returns_zero_with_error() {
        let cache = Arc::new(ClusterCache::new());
        cache.add_node(&Node::new("node-a", Resources::with_memory(1000)));
        let p = plugin(ScoreMode::Most, &cache);
        let pod = member("train", "1");

        assert_eq!(p.score(&pod, "node-a"), (1000, Status::success()));

        let (score, status) = p.score(&pod, "ghost");
        assert_eq!(score, 0);
        assert_eq!(status.code(), Code::Error);
    }

    #[test]
    fn normalize_through_extensions() {
        let cache = Arc::new(ClusterCache::new());
        let p = plugin(ScoreMode::Least, &cache);
        let ext = p.score_extensions().expect("score extensions");

        let mut scores = vec![NodeScore::new("a", -1000), NodeScore::new("b", -2000)];
        assert!(ext.normalize_score(&Pod::default(), &mut scores).is_success());
        assert_eq!(scores[0].score, 100);
        assert_eq!(scores[1].score, 0);
    }
}
