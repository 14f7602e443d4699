use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod black;
mod cli;
mod context;
mod error;
mod github;
mod provision;
mod report;
mod run;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing - debug logs only with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("black_report=debug")
    } else {
        EnvFilter::new("black_report=info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Single top-level catch: anything that propagates out of the sequence
    // fails the step through the runner's native mechanism (non-zero exit).
    if let Err(err) = run::execute(cli).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
