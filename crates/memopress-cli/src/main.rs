use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use memopress_cli::{
    cli::{Cli, Commands},
    commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the CLI flags when set.
    let env_filter = EnvFilter::builder()
        .with_default_directive(cli.level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Publish(args) => commands::publish::execute(args),
    }
}
