//! galactus - prune a node_modules tree

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use galactus_cli::cmd;
use galactus_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let quiet = cli.quiet;

    match cli.command {
        Commands::Prune {
            dir,
            dry_run,
            keep_dev,
            concurrency,
        } => cmd::prune::prune(&dir, keep_dev, concurrency, dry_run, quiet).await,
        Commands::Kept {
            dir,
            relative,
            json,
        } => cmd::kept::kept(&dir, relative, json).await,
        Commands::Completions { shell } => {
            cmd::completions::completions(shell);
            Ok(())
        }
    }
}
