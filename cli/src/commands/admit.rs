use anyhow::Result;
use clap::Parser;
use scheduler::framework::PreFilterPlugin;
use scheduler::framework::lister::PodLister;
use scheduler::gang::GroupSpec;
use scheduler::{GangScheduler, Handle};

use crate::config::Config;
use crate::snapshot::Cluster;

#[derive(Parser, Debug)]
pub struct AdmitArgs {
    /// Name of the pod in the snapshot
    pub pod: String,
}

#[tokio::main]
pub async fn handle(config: &Config, args: &AdmitArgs) -> Result<()> {
    let cluster = Cluster::load(&config.snapshot).await?;
    let pod = cluster.pod(&args.pod)?;
    let plugin = GangScheduler::with_mode(config.mode, Handle::shared(cluster.cache.clone()));

    // group details are informational, the plugin decides
    if let Ok(spec) = GroupSpec::from_pod(pod) {
        let visible = cluster
            .cache
            .count_by_label(scheduler::gang::GROUP_NAME_LABEL, spec.group)
            .await?;
        println!(
            "group={} minAvailable={} visible={}",
            spec.group, spec.min_available, visible
        );
    }

    let status = plugin.pre_filter(pod).await;
    println!("{}: {}", pod.metadata.name, status);
    Ok(())
}
