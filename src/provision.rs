use tokio::process::Command;
use tracing::debug;

const SETUP_PYTHON_URL: &str =
    "https://raw.githubusercontent.com/actions/setup-python/main/dist/setup/setup-python.js";

/// Result of the best-effort Python provisioning step. This step never fails
/// the run; a degraded outcome means the system Python is used as-is.
#[derive(Debug)]
pub enum ProvisionOutcome {
    Ready,
    Degraded { reason: String },
}

/// Install the requested Python version and upgrade pip. Each sub-step must
/// succeed for a Ready outcome; the first failure short-circuits to Degraded.
pub async fn setup_python(version: &str) -> ProvisionOutcome {
    debug!("Provisioning Python {}", version);

    let steps: [(&str, Vec<&str>); 3] = [
        ("curl", vec!["-sL", SETUP_PYTHON_URL, "-o", "setup-python.js"]),
        ("node", vec!["setup-python.js", "--version", version]),
        ("python", vec!["-m", "pip", "install", "--upgrade", "pip"]),
    ];

    for (program, args) in steps {
        match Command::new(program).args(&args).output().await {
            Ok(output) if output.status.success() => {
                debug!("{} {} succeeded", program, args.join(" "));
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return ProvisionOutcome::Degraded {
                    reason: format!(
                        "{} exited with {}: {}",
                        program,
                        output.status.code().unwrap_or(-1),
                        stderr.trim()
                    ),
                };
            }
            Err(e) => {
                return ProvisionOutcome::Degraded {
                    reason: format!("failed to start {}: {}", program, e),
                };
            }
        }
    }

    ProvisionOutcome::Ready
}
