//! Implementation of the 'scrape' subcommand.

use crate::cli::ScrapeArgs;
use crate::error::CliResult;
use crate::terminal;

use finframe_core::config::ScrapeConfig;
use finframe_core::GalleryScraper;

pub fn run_scrape(args: ScrapeArgs) -> CliResult<()> {
    let config = ScrapeConfig::new(&args.out_dir).with_url(&args.url);
    let summary = GalleryScraper::new()?.run(&config)?;

    terminal::print_header("Scrape");
    terminal::print_status("entries", &summary.entries.to_string());
    terminal::print_status("images", &summary.images_dir.display().to_string());
    terminal::print_status("metadata", &summary.csv_path.display().to_string());
    terminal::print_success("Scrape complete");
    Ok(())
}
