mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "viewpan",
    version,
    about = "Viewport recentering offset calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Compute the offset that recenters a target within a stage
    Compute(commands::compute::ComputeArgs),
    /// Show the resolved configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Compute(args) => commands::compute::execute(&args),
        Commands::Config => commands::config::execute(),
    }
}
