use clap::Parser;
use depsnap::application::dto::OutputFormat;
use std::path::PathBuf;

/// Replay dependency change batches and print each target's dependency tree
#[derive(Parser, Debug)]
#[command(name = "depsnap")]
#[command(version)]
#[command(
    about = "Replay dependency change batches and print each target's dependency tree",
    long_about = None
)]
pub struct Args {
    /// Batch script to replay (YAML, or JSON with a .json extension)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to depsnap.config.yml next to the script)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only render this target (full name or moniker)
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,

    /// Exit with code 1 when any dependency shows as unresolved
    #[arg(long)]
    pub fail_on_unresolved: bool,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Only print errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
