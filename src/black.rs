use tokio::process::Command;
use tracing::{debug, info};

/// What the formatter invocation produced. The exit code is data for the
/// report, not an error: a non-zero code means files need formatting.
#[derive(Debug)]
pub struct FormatOutcome {
    /// Combined stdout and stderr of the invocation.
    pub output: String,
    pub exit_code: i32,
}

/// Split the configured paths string into formatter arguments, discarding
/// empty segments.
pub fn split_paths(paths: &str) -> Vec<String> {
    paths.split_whitespace().map(str::to_string).collect()
}

/// Install the pinned Black version, then run it against the target paths.
///
/// This never returns an error: an install failure or an invocation that
/// cannot be started synthesizes exit code 1 with the failure message
/// appended to the captured output, so the report still gets rendered.
pub async fn install_and_run(black_version: &str, black_args: &str, paths: &str) -> FormatOutcome {
    match try_install_and_run(black_version, black_args, paths).await {
        Ok(outcome) => outcome,
        Err(e) => failure_outcome(&e.to_string()),
    }
}

/// Synthesized result for an invocation that could not be started at all.
fn failure_outcome(message: &str) -> FormatOutcome {
    FormatOutcome {
        output: format!("\nError: {}", message),
        exit_code: 1,
    }
}

async fn try_install_and_run(
    black_version: &str,
    black_args: &str,
    paths: &str,
) -> std::io::Result<FormatOutcome> {
    let pin = format!("black=={}", black_version);
    info!("Installing {}", pin);

    let install = Command::new("python")
        .args(["-m", "pip", "install", pin.as_str()])
        .output()
        .await?;

    if !install.status.success() {
        let stderr = String::from_utf8_lossy(&install.stderr);
        return Err(std::io::Error::other(format!(
            "pip install {} failed: {}",
            pin,
            stderr.trim()
        )));
    }

    // A fresh combined list; the configured argument string is never mutated.
    let args = build_args(black_args, paths);
    info!("Running black {}", args.join(" "));

    let output = Command::new("black").args(&args).output().await?;

    let mut captured = String::from_utf8_lossy(&output.stdout).to_string();
    captured.push_str(&String::from_utf8_lossy(&output.stderr));

    let exit_code = output.status.code().unwrap_or(1);
    debug!("black exited with {}", exit_code);

    Ok(FormatOutcome {
        output: captured,
        exit_code,
    })
}

fn build_args(black_args: &str, paths: &str) -> Vec<String> {
    let mut args: Vec<String> = black_args.split_whitespace().map(str::to_string).collect();
    args.extend(split_paths(paths));
    args
}
