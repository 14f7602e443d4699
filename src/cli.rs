use clap::Parser;

/// Step inputs. On a GitHub Actions runner these arrive as INPUT_* env vars;
/// the flags exist so the step can also be exercised locally.
#[derive(Parser, Debug, Clone)]
#[command(name = "black-report")]
#[command(
    author,
    version,
    about = "Runs the Black formatter and posts a report comment on the pull request"
)]
pub struct Cli {
    /// Python version to provision (best-effort)
    #[arg(long, env = "INPUT_PYTHON_VERSION", default_value = "3.x")]
    pub python_version: String,

    /// Exact Black version to install
    #[arg(long, env = "INPUT_BLACK_VERSION", default_value = "24.3.0")]
    pub black_version: String,

    /// Base arguments passed to Black, before target paths are appended
    #[arg(long, env = "INPUT_BLACK_ARGS", default_value = "--check --diff")]
    pub black_args: String,

    /// Token used to authenticate GitHub API calls
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Space-delimited list of paths/globs to format
    #[arg(long, env = "INPUT_PATHS", default_value = ".")]
    pub paths: String,

    /// Whether formatting issues fail the run ("true"/anything else)
    #[arg(long, env = "INPUT_FAIL_ON_ERROR", default_value = "true")]
    pub fail_on_error: String,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
