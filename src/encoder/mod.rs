//! The Metaphone phonetic-encoding transducer.
//!
//! Encoding is one forward pass over the normalized word: leading ASCII
//! non-letters are stripped, the remainder is upper-cased, the first one
//! or two letters go through the initial special-case table, and every
//! following letter is classified against its neighbors by the per-letter
//! rule table. Output stops the moment it reaches the requested
//! maximum length, checked after every individual symbol, so the bound
//! holds even for the one rule that emits two symbols at once.
//!
//! Every input yields a defined (possibly empty) code; there are no error
//! conditions. Empty input, all-punctuation input, and a zero maximum all
//! produce the empty code.

mod initial;
mod rules;
mod window;

use smallvec::SmallVec;

use window::Letters;

/// Conventional Metaphone code length used when callers do not pass an
/// explicit bound.
pub const DEFAULT_MAX_CODE_LEN: usize = 4;

/// Capped output buffer for one encoding pass.
///
/// Pushes past the cap are dropped, so rule code emits unconditionally and
/// the buffer enforces the length bound in one place. Codes are short, so
/// the inline capacity covers the common case without a heap allocation.
#[derive(Debug)]
pub(crate) struct CodeBuffer {
    code: SmallVec<[u8; 12]>,
    max_len: usize,
}

impl CodeBuffer {
    pub(crate) fn new(max_len: usize) -> Self {
        CodeBuffer {
            code: SmallVec::new(),
            max_len,
        }
    }

    /// Append one symbol unless the buffer already holds `max_len` symbols.
    pub(crate) fn push(&mut self, symbol: u8) {
        if self.code.len() < self.max_len {
            self.code.push(symbol);
        }
    }

    /// True once the cap is reached; the encoding loop exits immediately.
    pub(crate) fn is_full(&self) -> bool {
        self.code.len() >= self.max_len
    }

    /// The accumulated code. Symbols are always ASCII (`A`-`Z` or `0`).
    pub(crate) fn into_string(self) -> String {
        self.code.iter().map(|&b| b as char).collect()
    }
}

/// A reusable Metaphone encoder with a fixed maximum code length.
///
/// The encoder holds no per-call state; a single instance can be shared
/// freely across threads.
///
/// # Example
///
/// ```rust
/// use libmetaphone::encoder::Metaphone;
///
/// let encoder = Metaphone::new(4);
/// assert_eq!(encoder.encode("Thompson"), "0MPS");
/// assert_eq!(encoder.encode(""), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metaphone {
    max_code_len: usize,
}

impl Metaphone {
    /// Create an encoder producing codes of at most `max_code_len` symbols.
    pub fn new(max_code_len: usize) -> Self {
        Metaphone { max_code_len }
    }

    /// The maximum code length this encoder produces.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Encode `source` into its Metaphone code.
    ///
    /// Leading ASCII non-letters are stripped; if nothing remains the code
    /// is empty. Non-ASCII runes and embedded punctuation emit nothing and
    /// reset the previous-letter context. The result is always at most
    /// [`max_code_len`](Self::max_code_len) symbols drawn from `A`-`Z`
    /// and `0`.
    pub fn encode(&self, source: &str) -> String {
        let trimmed =
            source.trim_start_matches(|c: char| c.is_ascii() && !c.is_ascii_alphabetic());
        if trimmed.is_empty() {
            return String::new();
        }

        let letters = Letters::new(trimmed);
        let mut out = CodeBuffer::new(self.max_code_len);

        let start = initial::encode_initial(&letters, &mut out);
        // Seed the previous-letter context from the last consumed rune, not
        // from what the initial table emitted.
        let mut prev = if start > 0 {
            letters.letter(start as isize - 1)
        } else {
            None
        };

        for (i, &curr) in letters.runes().iter().enumerate().skip(start) {
            if out.is_full() {
                break;
            }
            // Non-letters emit nothing and break letter adjacency.
            if !curr.is_ascii_uppercase() {
                prev = None;
                continue;
            }
            // Collapse adjacent duplicates, except C so that digraphs like
            // -CCI- get both letters classified.
            if prev == Some(curr) && curr != 'C' {
                continue;
            }
            rules::classify(&letters, i, curr, prev, &mut out);
            prev = Some(curr);
        }

        out.into_string()
    }
}

impl Default for Metaphone {
    fn default() -> Self {
        Metaphone::new(DEFAULT_MAX_CODE_LEN)
    }
}

/// Encode `source` into a Metaphone code of at most `max_code_len` symbols.
///
/// Convenience wrapper around [`Metaphone::encode`].
///
/// # Example
///
/// ```rust
/// use libmetaphone::encoder::metaphone;
///
/// assert_eq!(metaphone("GUMBO", 4), "KM");
/// assert_eq!(metaphone("XYLOPHONE", 10), "SLFHN");
/// ```
pub fn metaphone(source: &str, max_code_len: usize) -> String {
    Metaphone::new(max_code_len).encode(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_non_alphabetic_inputs() {
        assert_eq!(metaphone("", 4), "");
        assert_eq!(metaphone("...", 4), "");
        assert_eq!(metaphone("123", 4), "");
        assert_eq!(metaphone("  \t", 4), "");
    }

    #[test]
    fn test_zero_cap_yields_empty_code() {
        assert_eq!(metaphone("GUMBO", 0), "");
        assert_eq!(metaphone("AB", 0), "");
        assert_eq!(metaphone("XYLOPHONE", 0), "");
    }

    #[test]
    fn test_cap_applies_to_initial_emission() {
        // The initial table emits A, then the loop must not run.
        assert_eq!(metaphone("AX", 1), "A");
        assert_eq!(metaphone("AX", 3), "AKS");
    }

    #[test]
    fn test_cap_splits_the_double_emission() {
        assert_eq!(metaphone("BOX", 3), "BKS");
        assert_eq!(metaphone("BOX", 2), "BK");
    }

    #[test]
    fn test_leading_non_letters_are_stripped() {
        assert_eq!(metaphone("  GUMBO", 4), metaphone("GUMBO", 4));
        assert_eq!(metaphone("123hello", 4), metaphone("hello", 4));
        assert_eq!(metaphone("-knob", 4), metaphone("knob", 4));
    }

    #[test]
    fn test_casing_is_irrelevant() {
        assert_eq!(metaphone("gumbo", 4), metaphone("GUMBO", 4));
        assert_eq!(metaphone("GuMbO", 4), "KM");
    }

    #[test]
    fn test_duplicate_letters_collapse() {
        assert_eq!(metaphone("BOOK", 10), "BK");
        assert_eq!(metaphone("HAPPY", 10), "HP");
        assert_eq!(metaphone("QUEEN", 10), "KN");
    }

    #[test]
    fn test_duplicate_c_is_still_classified() {
        // Both Cs are evaluated: hard K then soft S before E.
        assert_eq!(metaphone("ACCENT", 10), "AKSN");
    }

    #[test]
    fn test_non_letter_resets_adjacency() {
        // The duplicate collapse does not fire across a non-letter rune.
        assert_eq!(metaphone("AB3BA", 10), "ABB");
        assert_eq!(metaphone("ABBA", 10), "AB");
    }

    #[test]
    fn test_non_ascii_runes_are_boundaries() {
        // The é neither matches a rule nor carries adjacency.
        assert_eq!(metaphone("résumé", 10), "RSM");
    }

    #[test]
    fn test_default_encoder_uses_conventional_length() {
        let encoder = Metaphone::default();
        assert_eq!(encoder.max_code_len(), DEFAULT_MAX_CODE_LEN);
        assert_eq!(encoder.encode("Worcestershire"), "WRSS");
    }
}
