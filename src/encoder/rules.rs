//! Per-letter classification rules for the main transduction loop.
//!
//! Each letter maps to zero, one, or two output symbols depending on its
//! neighbors: up to four runes ahead and up to two runes behind, all read
//! through the clamped [`Letters`] windows. The rule set is the classic
//! Metaphone table, kept bit-for-bit including two historical quirks
//! called out inline.

use super::window::{is_vowel, Letters};
use super::CodeBuffer;

/// Classify the letter at rune position `pos` and emit its symbols.
///
/// `prev` is the previous letter as tracked by the main loop (reset by
/// non-letter runes), which is distinct from the raw rune at `pos - 1`;
/// the K rule reads the raw rune on purpose.
pub(crate) fn classify(
    letters: &Letters,
    pos: usize,
    curr: char,
    prev: Option<char>,
    out: &mut CodeBuffer,
) {
    let i = pos as isize;
    match curr {
        // B is silent after M, as in "bomb".
        'B' => {
            if prev != Some('M') {
                out.push(b'B');
            }
        }
        // "sh" for -CIA- and -CH-; S for soft C (-CI-, -CE-, -CY-);
        // hard K otherwise.
        'C' => {
            let next2 = letters.window(i, 2);
            let next3 = letters.window(i, 3);
            let before3 = letters.window(i - 1, 3);
            if next3 == ['C', 'I', 'A'] || next2 == ['C', 'H'] {
                out.push(b'X');
            } else if next2 == ['C', 'I'] || next2 == ['C', 'E'] || next2 == ['C', 'Y'] {
                out.push(b'S');
            } else if before3 != ['S', 'C', 'I'] || next2 != ['S', 'C', 'E'] || next2 != ['S', 'C', 'Y'] {
                // Historical quirk, kept bit-for-bit: the guard compares a
                // two-rune window against three-rune patterns, so it is
                // always true and hard C always reaches the K branch.
                out.push(b'K');
            }
        }
        // J for -DGE-/-DGI-/-DGY-, T otherwise.
        'D' => {
            let next3 = letters.window(i, 3);
            if next3 == ['D', 'G', 'E'] || next3 == ['D', 'G', 'I'] || next3 == ['D', 'G', 'Y'] {
                out.push(b'J');
            } else {
                out.push(b'T');
            }
        }
        'F' => out.push(b'F'),
        // Silent in -GH- (unless the H precedes a vowel), -GN-, -GNED,
        // and -GDE-/-GDI-/-GDY-; J after I/E/Y; K otherwise.
        'G' => {
            let next2 = letters.window(i, 2);
            let next3 = letters.window(i, 3);
            let next4 = letters.window(i, 4);
            let after_gh = letters.letter(i + 2);
            if (next2 == ['G', 'H'] && !after_gh.is_some_and(is_vowel))
                || next2 == ['G', 'N']
                || next4 == ['G', 'N', 'E', 'D']
                || next3 == ['G', 'D', 'E']
                || next3 == ['G', 'D', 'I']
                || next3 == ['G', 'D', 'Y']
            {
                // silent
            } else if matches!(prev, Some('I' | 'E' | 'Y')) {
                out.push(b'J');
            } else {
                out.push(b'K');
            }
        }
        // H is audible only before a vowel and outside the CH/SH/PH/TH/GH
        // digraphs. The lookbehind window clamps at the word start, so for
        // a second-position H it reads the H itself; kept for output
        // compatibility.
        'H' => {
            let before2 = letters.window(i - 2, 2);
            if letters.letter(i + 1).is_some_and(is_vowel)
                && before2 != ['C', 'H']
                && before2 != ['S', 'H']
                && before2 != ['P', 'H']
                && before2 != ['T', 'H']
                && before2 != ['G', 'H']
            {
                out.push(b'H');
            }
        }
        'J' => out.push(b'J'),
        // K is silent after C (the C already emitted K).
        'K' => {
            if letters.letter(i - 1) != Some('C') {
                out.push(b'K');
            }
        }
        'L' | 'M' | 'N' => out.push(curr as u8),
        // PH sounds like F.
        'P' => {
            if letters.letter(i + 1) == Some('H') {
                out.push(b'F');
            } else {
                out.push(b'P');
            }
        }
        'Q' => out.push(b'K'),
        'R' => out.push(b'R'),
        // "sh" for SH- and -SIO-/-SIA-.
        'S' => {
            let next3 = letters.window(i, 3);
            if letters.letter(i + 1) == Some('H')
                || next3 == ['S', 'I', 'O']
                || next3 == ['S', 'I', 'A']
            {
                out.push(b'X');
            } else {
                out.push(b'S');
            }
        }
        // "sh" for -TIO-/-TIA-, the TH sound marker for -TH-, T for -TCH-,
        // and nothing otherwise.
        'T' => {
            let next3 = letters.window(i, 3);
            if next3 == ['T', 'I', 'O'] || next3 == ['T', 'I', 'A'] {
                out.push(b'X');
            } else if letters.letter(i + 1) == Some('H') {
                out.push(b'0');
            } else if next3 == ['T', 'C', 'H'] {
                out.push(b'T');
            }
        }
        'V' => out.push(b'F'),
        // W is audible only before a vowel.
        'W' => {
            if letters.letter(i + 1).is_some_and(is_vowel) {
                out.push(b'W');
            }
        }
        // X sounds like KS: the one rule that emits two symbols.
        'X' => {
            out.push(b'K');
            out.push(b'S');
        }
        // Y is audible only before a vowel.
        'Y' => {
            if letters.letter(i + 1).is_some_and(is_vowel) {
                out.push(b'Y');
            }
        }
        'Z' => out.push(b'S'),
        // Vowels and anything else are dropped past the first position.
        _ => {}
    }
}
