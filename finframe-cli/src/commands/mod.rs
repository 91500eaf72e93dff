// finframe-cli/src/commands/mod.rs
//
// One module per subcommand.

pub mod extract;
pub mod fetch;
pub mod info;
pub mod scrape;
