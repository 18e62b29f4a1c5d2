//! Shinobi CLI - Command-line interface
//!
//! Commands:
//! - fighters: Show the fighter built from each character record
//! - run: Seed a bracket and play it to the end
//! - resolve: Play one match of a saved bracket
//! - simulate: Play many tournaments and count champions

mod common;
mod fighters_cmd;
mod resolve_cmd;
mod run_cmd;
mod simulate_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fighters_cmd::FightersArgs;
use resolve_cmd::ResolveArgs;
use run_cmd::RunArgs;
use simulate_cmd::SimulateArgs;

#[derive(Parser)]
#[command(name = "shinobi")]
#[command(about = "Single-elimination ninja tournaments")]
struct Cli {
    /// Random seed for reproducible brackets and fights
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the fighter built from each character record
    Fighters(FightersArgs),
    /// Seed a bracket and play it to the end
    Run(RunArgs),
    /// Play one match of a saved bracket
    Resolve(ResolveArgs),
    /// Play many tournaments and count champions
    Simulate(SimulateArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fighters(args) => fighters_cmd::run(args),
        Commands::Run(args) => run_cmd::run(args, cli.seed),
        Commands::Resolve(args) => resolve_cmd::run(args, cli.seed),
        Commands::Simulate(args) => simulate_cmd::run(args, cli.seed),
    }
}
