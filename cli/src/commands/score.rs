use anyhow::{Result, bail};
use clap::Parser;
use scheduler::framework::lister::NodeInfoLister;
use scheduler::framework::{PreFilterPlugin, ScorePlugin};
use scheduler::{GangScheduler, Handle, NodeScore};
use tabled::{Table, settings::Style};

use crate::config::Config;
use crate::snapshot::Cluster;
use crate::view::ScoreRow;

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Name of the pod in the snapshot
    pub pod: String,
    /// Score nodes even when the pod's group is not admitted
    #[arg(long)]
    pub skip_admission: bool,
}

#[tokio::main]
pub async fn handle(config: &Config, args: &ScoreArgs) -> Result<()> {
    let cluster = Cluster::load(&config.snapshot).await?;
    let pod = cluster.pod(&args.pod)?;
    let plugin = GangScheduler::with_mode(config.mode, Handle::shared(cluster.cache.clone()));

    if !args.skip_admission {
        let status = plugin.pre_filter(pod).await;
        if !status.is_success() {
            println!("{}: {}", pod.metadata.name, status);
            return Ok(());
        }
    }

    let nodes = NodeInfoLister::list(cluster.cache.as_ref());
    let mut scores = Vec::with_capacity(nodes.len());
    for node in &nodes {
        let (score, status) = plugin.score(pod, &node.name);
        if !status.is_success() {
            bail!("scoring node {} failed: {}", node.name, status);
        }
        scores.push(NodeScore::new(node.name.clone(), score));
    }

    let raw: Vec<i64> = scores.iter().map(|s| s.score).collect();
    if let Some(ext) = plugin.score_extensions() {
        let status = ext.normalize_score(pod, &mut scores);
        if !status.is_success() {
            bail!("normalizing scores failed: {}", status);
        }
    }

    let rows: Vec<ScoreRow> = nodes
        .iter()
        .zip(raw)
        .zip(&scores)
        .map(|((node, raw), scored)| ScoreRow {
            node: node.name.clone(),
            memory: node.allocatable.memory,
            raw,
            score: scored.score,
        })
        .collect();

    println!("mode={}", plugin.mode());
    let mut table = Table::new(rows);
    table.with(Style::blank());
    println!("{}", table);
    Ok(())
}
