use crate::black;
use crate::cli::Cli;
use crate::context::RunContext;
use crate::github::CommentUpserter;
use crate::provision::{self, ProvisionOutcome};
use crate::report::render_report;
use anyhow::Context;
use tracing::{info, warn};

/// The whole run: provision, format, report, upsert, exit policy.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let ctx = RunContext::from_cli(cli).context("Failed to read run configuration")?;

    // Best-effort. A degraded outcome falls back to the system Python.
    match provision::setup_python(&ctx.python_version).await {
        ProvisionOutcome::Ready => info!("Python {} provisioned", ctx.python_version),
        ProvisionOutcome::Degraded { reason } => {
            warn!("Failed to setup Python: {}", reason);
            warn!("Using system Python as setup failed");
        }
    }

    let outcome = black::install_and_run(&ctx.black_version, &ctx.black_args, &ctx.paths).await;

    let body = render_report(
        &outcome.output,
        outcome.exit_code,
        &ctx.black_version,
        &ctx.paths,
    );

    if let Some(number) = ctx.event.pull_request {
        let upserter = CommentUpserter::new(
            ctx.github_token.clone(),
            ctx.event.owner.clone(),
            ctx.event.repo.clone(),
        )?;
        upserter.upsert(number, &body).await?;
    } else {
        info!("Not a pull request event, skipping comment");
    }

    apply_exit_policy(outcome.exit_code, ctx.fail_on_error)
}

/// Formatting issues fail the run only when fail-on-error is set; otherwise
/// they downgrade to a warning.
fn apply_exit_policy(exit_code: i32, fail_on_error: bool) -> anyhow::Result<()> {
    if exit_code != 0 && fail_on_error {
        anyhow::bail!("Black found formatting issues");
    }
    if exit_code != 0 {
        warn!("Black found formatting issues but fail-on-error is false");
    }
    Ok(())
}
