// crates/tagnorm-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "tagnorm-cli")]
#[command(about = "Metric tag normalization: normalize, compare legacy vs fixed rules, audit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize tags from arguments or a file, one output per line
    Normalize(cmd::normalize::NormalizeArgs),

    /// Print legacy vs corrected normalization side by side
    Compare(cmd::compare::CompareArgs),

    /// Check normalized tags against the tag invariants (non-zero exit on violations)
    Audit(cmd::audit::AuditArgs),

    /// Rule profile tools (.tnp)
    Profile(cmd::profile::ProfileArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Audit(args) => cmd::audit::run(args),
        Commands::Profile(args) => cmd::profile::run(args),
    }
}
