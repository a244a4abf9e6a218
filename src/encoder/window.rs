//! Bounded window lookups over the normalized letter buffer.
//!
//! Every classification rule reads its context through [`Letters`], which
//! clamps and truncates out-of-range windows instead of indexing directly.
//! A window starting at or past the end yields an empty slice, a negative
//! start clamps to position zero, and a window extending past the end
//! truncates to the available length. Rules that compare an empty or
//! shortened window against a pattern simply fail to match, which is the
//! intended behavior for letters near the word boundaries.

/// The normalized, upper-cased letter buffer for one encoding pass.
///
/// Positions are rune positions, not byte offsets, so multi-byte input
/// degrades gracefully: non-ASCII runes occupy one position each and never
/// match any rule pattern.
#[derive(Debug)]
pub(crate) struct Letters {
    runes: Vec<char>,
}

impl Letters {
    /// Build the buffer from already-trimmed input, upper-casing ASCII
    /// letters in place. Non-ASCII runes are kept as-is; they act as
    /// rule boundaries rather than participants.
    pub(crate) fn new(source: &str) -> Self {
        Letters {
            runes: source.chars().map(|c| c.to_ascii_uppercase()).collect(),
        }
    }

    /// Number of rune positions in the buffer.
    pub(crate) fn len(&self) -> usize {
        self.runes.len()
    }

    /// All runes, for iteration by the main loop.
    pub(crate) fn runes(&self) -> &[char] {
        &self.runes
    }

    /// A window of up to `len` runes starting at `start`.
    ///
    /// `start` may be negative (clamped to 0) or past the end (yields an
    /// empty slice); the window truncates at the end of the buffer.
    pub(crate) fn window(&self, start: isize, len: usize) -> &[char] {
        let n = self.runes.len();
        if start >= n as isize {
            return &[];
        }
        let from = start.max(0) as usize;
        let to = (from + len).min(n);
        &self.runes[from..to]
    }

    /// The single rune at `idx`, or `None` when out of range.
    pub(crate) fn letter(&self, idx: isize) -> Option<char> {
        self.window(idx, 1).first().copied()
    }
}

/// The five vowels the rule set recognizes.
#[inline]
pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}
