// finframe-cli/src/terminal.rs
//
// Styled terminal output helpers shared by the subcommands.

use console::style;

/// Prints a section header.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().underlined());
}

/// Prints an aligned "label: value" status line.
pub fn print_status(label: &str, value: &str) {
    println!("  {:<18} {}", style(format!("{label}:")).bold(), value);
}

/// Prints a green success line.
pub fn print_success(text: &str) {
    println!("{} {}", style("✓").green().bold(), text);
}
