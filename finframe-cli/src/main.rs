// finframe-cli/src/main.rs
//
// Entry point for the finframe CLI: parses arguments, sets up logging,
// and dispatches to the subcommand implementations.

use clap::Parser;
use std::process;

use finframe_cli::{logging, Cli, Commands};

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => finframe_cli::run_extract(args),
        Commands::Scrape(args) => finframe_cli::run_scrape(args),
        Commands::Fetch(args) => finframe_cli::run_fetch(args),
        Commands::Info(args) => finframe_cli::run_info(args),
    };

    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}
