use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod planner;
mod provider;
mod session;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("pomodrill=debug")
    } else {
        EnvFilter::new("pomodrill=warn")
    };

    // Logs go to stderr so they never interleave with prompts or --json output
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start(args) => cli::start::execute(args).await,
        Commands::Plan(args) => cli::plan::execute(args).await,
        Commands::Init(args) => cli::config::init(args),
        Commands::Schema => cli::config::schema(),
    }
}
