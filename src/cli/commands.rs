//! Command execution for the CLI.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::Commands;
use crate::encoder::metaphone;
use crate::matching::sounds_like;

/// Execute a parsed CLI command.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Encode { words, max_len } => {
            if words.is_empty() {
                encode_stream(max_len)
            } else {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                for word in &words {
                    writeln!(out, "{}\t{}", word, metaphone(word, max_len))
                        .context("writing to stdout")?;
                }
                Ok(())
            }
        }
        Commands::Compare { a, b, max_len } => {
            let code_a = metaphone(&a, max_len);
            let code_b = metaphone(&b, max_len);
            if sounds_like(&a, &b, max_len) {
                println!(
                    "{} {} and {} share code {}",
                    "match:".green().bold(),
                    a,
                    b,
                    code_a.cyan()
                );
            } else {
                println!(
                    "{} {} ({}) vs {} ({})",
                    "no match:".red().bold(),
                    a,
                    code_a.cyan(),
                    b,
                    code_b.cyan()
                );
            }
            Ok(())
        }
    }
}

/// Encode words from stdin, one per line, until EOF.
fn encode_stream(max_len: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading from stdin")?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        writeln!(out, "{}\t{}", word, metaphone(word, max_len)).context("writing to stdout")?;
    }
    Ok(())
}
