//! Implementation of the 'fetch' subcommand.

use crate::cli::FetchArgs;
use crate::error::CliResult;
use crate::terminal;

use finframe_core::config::DownloadConfig;
use finframe_core::download_video;

pub fn run_fetch(args: FetchArgs) -> CliResult<()> {
    let mut config = DownloadConfig::new(&args.out_dir);
    config.live_from_start = !args.no_live_from_start;
    config.no_part = !args.keep_part;

    download_video(&args.url, &config)?;
    terminal::print_success(&format!(
        "Downloaded {} into {}",
        args.url,
        args.out_dir.display()
    ));
    Ok(())
}
