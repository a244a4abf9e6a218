//! CLI interface for libmetaphone
//!
//! Provides command-line utilities for encoding words and comparing them
//! phonetically.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
