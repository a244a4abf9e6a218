//! Property-based tests for the Metaphone encoder.
//!
//! These pin down the encoder's contract rather than specific codes:
//!
//! 1. **Length bound**: `len(code) <= max_code_len`, unconditionally
//! 2. **Alphabet**: every symbol is `A`-`Z` or `0`
//! 3. **Case insensitivity**: upper/lower/mixed case encode identically
//! 4. **Truncation monotonicity**: a shorter cap yields a prefix
//! 5. **Leading punctuation**: stripped without affecting the code
//! 6. **Totality**: every input yields a defined (possibly empty) code

use libmetaphone::prelude::*;
use proptest::prelude::*;

// String generators
fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{0,24}").unwrap()
}

fn arb_ascii_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn code_never_exceeds_cap(word in arb_ascii_text(), n in 0usize..12) {
        prop_assert!(metaphone(&word, n).len() <= n);
    }

    #[test]
    fn code_alphabet_is_uppercase_and_zero(word in any::<String>(), n in 0usize..12) {
        let code = metaphone(&word, n);
        prop_assert!(
            code.bytes().all(|b| b == b'0' || b.is_ascii_uppercase()),
            "unexpected symbol in code {:?}",
            code
        );
    }

    #[test]
    fn casing_is_irrelevant(word in arb_ascii_text(), n in 0usize..12) {
        let code = metaphone(&word, n);
        prop_assert_eq!(&code, &metaphone(&word.to_uppercase(), n));
        prop_assert_eq!(&code, &metaphone(&word.to_lowercase(), n));
    }

    #[test]
    fn truncation_is_prefix_monotone(word in arb_ascii_text(), n in 0usize..12) {
        let shorter = metaphone(&word, n);
        let longer = metaphone(&word, n + 1);
        prop_assert!(
            longer.starts_with(&shorter),
            "{:?} is not a prefix of {:?}",
            shorter,
            longer
        );
    }

    #[test]
    fn leading_punctuation_is_irrelevant(
        prefix in prop::string::string_regex("[ 0-9.,;-]{0,6}").unwrap(),
        word in arb_word(),
        n in 0usize..12,
    ) {
        let combined = format!("{prefix}{word}");
        prop_assert_eq!(metaphone(&combined, n), metaphone(&word, n));
    }

    #[test]
    fn zero_cap_yields_empty_code(word in any::<String>()) {
        prop_assert_eq!(metaphone(&word, 0), "");
    }

    #[test]
    fn empty_input_yields_empty_code(n in 0usize..12) {
        prop_assert_eq!(metaphone("", n), "");
    }

    #[test]
    fn encoding_is_deterministic(word in any::<String>(), n in 0usize..12) {
        prop_assert_eq!(metaphone(&word, n), metaphone(&word, n));
    }

    #[test]
    fn sounds_like_is_reflexive(word in arb_ascii_text(), n in 0usize..8) {
        prop_assert!(sounds_like(&word, &word, n));
    }
}
