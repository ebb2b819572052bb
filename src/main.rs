use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use sb_core::board::PlacementMode;
use stampboard_lib::bootstrap::{
    self, resolve_config, run_app, wire_dependencies, ConfigOverrides,
};

#[derive(Parser)]
#[command(name = "stampboard")]
#[command(about = "Watch the clipboard for epoch timestamps and lay them out on a board", long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/stampboard/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Placement mode: grid or free
    #[arg(short, long)]
    placement: Option<PlacementMode>,

    /// IANA timezone for the local line, e.g. Europe/Berlin
    #[arg(short, long)]
    timezone: Option<String>,

    /// Log to stdout only
    #[arg(long)]
    no_log_file: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config,
        ConfigOverrides {
            placement: cli.placement,
            timezone: cli.timezone,
        },
    )?;

    bootstrap::tracing::init_tracing_subscriber(!cli.no_log_file)?;

    let runtime = wire_dependencies(&config)?;
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl-C");
        }
    };

    run_app(runtime, shutdown).await
}
