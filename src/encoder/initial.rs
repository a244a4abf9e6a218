//! Special-case handling for the first one or two letters of a word.
//!
//! Word starts carry the classic Metaphone exceptions: silent letters in
//! "KN-"/"GN-"/"PN-"/"WR-", the "AE-" and "X-" rewrites, and vowels kept
//! only in initial position. The handler consumes zero, one, or two runes
//! and reports how many, leaving the main loop to start right after them.
//!
//! The table is deliberately asymmetric: G/K/P and W have a no-match branch
//! that consumes nothing, so the main loop re-examines the first letter
//! under the general rules, while A, X, and the other vowels always consume
//! at least one rune. Output compatibility depends on keeping it that way.

use super::window::{is_vowel, Letters};
use super::CodeBuffer;

/// Apply the initial-letter table, emitting into `out`.
///
/// Returns the number of runes consumed (0, 1, or 2); the main loop starts
/// at that position.
pub(crate) fn encode_initial(letters: &Letters, out: &mut CodeBuffer) -> usize {
    let second = letters.letter(1);
    match letters.letter(0) {
        // AE- is pronounced E-; any other A- keeps the A.
        Some('A') => {
            if second == Some('E') {
                out.push(b'E');
                2
            } else {
                out.push(b'A');
                1
            }
        }
        // GN-, KN-, PN-: the first letter is silent.
        Some('G' | 'K' | 'P') => {
            if second == Some('N') {
                out.push(b'N');
                2
            } else {
                0
            }
        }
        // WH- and WR- drop the W; W before a vowel is kept.
        Some('W') => match second {
            Some(c @ ('H' | 'R')) => {
                out.push(c as u8);
                2
            }
            Some(c) if is_vowel(c) => {
                out.push(b'W');
                2
            }
            _ => 0,
        },
        // Initial X sounds like S.
        Some('X') => {
            out.push(b'S');
            1
        }
        // Other vowels are kept only here; the main loop drops them.
        Some(c @ ('E' | 'I' | 'O' | 'U')) => {
            out.push(c as u8);
            1
        }
        _ => 0,
    }
}
