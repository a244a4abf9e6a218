//! CLI argument definitions

use clap::{Parser, Subcommand};

use crate::encoder::DEFAULT_MAX_CODE_LEN;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "metaphone")]
#[command(about = "Metaphone phonetic encoding for approximate string matching")]
#[command(version)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Encode words into their Metaphone codes (reads stdin when no words
    /// are given, one word per line)
    Encode {
        /// Words to encode
        words: Vec<String>,

        /// Maximum code length
        #[arg(short, long, default_value_t = DEFAULT_MAX_CODE_LEN)]
        max_len: usize,
    },

    /// Compare two words for phonetic equality
    Compare {
        /// First word
        a: String,

        /// Second word
        b: String,

        /// Maximum code length
        #[arg(short, long, default_value_t = DEFAULT_MAX_CODE_LEN)]
        max_len: usize,
    },
}
