//! "Sounds-like" comparison on top of the encoder.
//!
//! Fuzzy-matching layers compare Metaphone codes for equality rather than
//! raw spellings; this module is that thin comparison surface.

use crate::encoder::{metaphone, DEFAULT_MAX_CODE_LEN};

/// True when `a` and `b` share a Metaphone code of at most `max_code_len`
/// symbols.
///
/// Two words with empty codes (empty or all-punctuation input) compare as
/// sounding alike, matching the encoder's "no match is not an error"
/// stance; callers that want to treat empty input specially should check
/// the codes themselves.
///
/// # Example
///
/// ```rust
/// use libmetaphone::matching::sounds_like;
///
/// assert!(sounds_like("Smith", "Smyth", 4));
/// assert!(!sounds_like("Smith", "Jones", 4));
/// ```
pub fn sounds_like(a: &str, b: &str, max_code_len: usize) -> bool {
    metaphone(a, max_code_len) == metaphone(b, max_code_len)
}

/// [`sounds_like`] with the conventional four-symbol code length.
pub fn sounds_like_default(a: &str, b: &str) -> bool {
    sounds_like(a, b, DEFAULT_MAX_CODE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homophones_match() {
        assert!(sounds_like("Smith", "Smyth", 4));
        assert!(sounds_like("knight", "night", 10));
        assert!(sounds_like_default("bare", "bear"));
    }

    #[test]
    fn test_distinct_words_do_not_match() {
        assert!(!sounds_like("Smith", "Jones", 4));
        assert!(!sounds_like_default("cat", "dog"));
    }

    #[test]
    fn test_empty_codes_compare_equal() {
        assert!(sounds_like("", "...", 4));
        assert!(sounds_like("123", "", 4));
    }

    #[test]
    fn test_zero_length_codes_always_match() {
        assert!(sounds_like("cat", "dog", 0));
    }
}
