// finframe-cli/src/lib.rs
//
// Library portion of the finframe CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ExtractArgs, FetchArgs, InfoArgs, ScrapeArgs};
pub use commands::extract::run_extract;
pub use commands::fetch::run_fetch;
pub use commands::info::run_info;
pub use commands::scrape::run_scrape;
