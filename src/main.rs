//! bumper - Find the deepest release-safe commit in a range
//!
//! CLI binary that walks a git commit range, checks each commit's story
//! against the tracker, and prints the latest commit that is safe to bump
//! into a release branch.

use anyhow::Result;
use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(name = "bumper")]
#[command(about = "Find the deepest release-safe commit in a range")]
#[command(version)]
struct Cli {
    /// Commit range to consider bumping
    #[arg(long, default_value = "master..release-elect")]
    commit_range: String,

    /// Show every commit in the range with its story and acceptance state
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays pipeline-safe.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::run_bump(&cli.commit_range, cli.verbose).await?;

    Ok(())
}
