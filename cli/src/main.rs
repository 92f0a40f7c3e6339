use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod snapshot;
mod view;

use commands::ModeArg;

/// Dry-run the gang scheduler plugin against a YAML cluster snapshot.
#[derive(Parser, Debug)]
#[command(name = "gangctl", version, about, long_about = None)]
struct GangCtl {
    /// Snapshot file, overrides GANGCTL_SNAPSHOT
    #[arg(short = 'f', long = "file", global = true)]
    file: Option<String>,

    /// Score mode, overrides GANG_SCHED_MODE
    #[arg(long, value_enum, global = true)]
    mode: Option<ModeArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the admission gate for a pod
    Admit(commands::admit::AdmitArgs),
    /// Score and normalize every node for a pod
    Score(commands::score::ScoreArgs),
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = GangCtl::parse();
    let config = match config::Config::load(cli.file, cli.mode.map(Into::into)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let result = match cli.command {
        Commands::Admit(args) => commands::admit::handle(&config, &args),
        Commands::Score(args) => commands::score::handle(&config, &args),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
