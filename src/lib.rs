//! # libmetaphone
//!
//! Metaphone phonetic encoding for approximate string matching.
//!
//! The encoder maps an English word to a short uppercase code approximating
//! its pronunciation, so that words that sound alike tend to share a code.
//! Fuzzy-matching layers (spell checkers, "sounds-like" database operators)
//! compare codes instead of raw spellings:
//!
//! ```rust
//! use libmetaphone::prelude::*;
//!
//! assert_eq!(metaphone("GUMBO", 4), "KM");
//! assert_eq!(metaphone("Smith", 4), "SM0");
//! assert!(sounds_like("Smith", "Smyth", 4));
//! ```
//!
//! The algorithm is a single forward pass with bounded lookahead and
//! lookbehind. It is deterministic, allocation-light, and keeps no state
//! between calls, so it is safe to use from any number of threads.
//!
//! The code alphabet is `A`-`Z` plus the digit `0`, which stands for the
//! "th" sound. Output length is bounded by the caller-supplied maximum;
//! longer words are truncated, never rejected.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoder;
pub mod matching;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::encoder::{metaphone, Metaphone, DEFAULT_MAX_CODE_LEN};
    pub use crate::matching::{sounds_like, sounds_like_default};
}
