//! Gridbench command-line entry point

use clap::Parser;
use gridbench_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(
    name = "gridbench",
    version,
    about = "Measure the parallel speedup of an external grid search and score an SVM classifier"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Speedup(args) => args.execute(),
        Commands::Score(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
