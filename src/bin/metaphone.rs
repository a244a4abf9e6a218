//! metaphone - Metaphone phonetic encoding on the command line.

use clap::Parser;
use colored::Colorize;
use std::process;

use libmetaphone::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
