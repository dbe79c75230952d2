//! Exact-pattern occurrence scanning.
//!
//! A [`PatternMatcher`] preprocesses one pattern and then counts or locates
//! its occurrences in arbitrary text using the bad-character rule: on a
//! mismatch, the alignment jumps past the rightmost occurrence of the
//! mismatched text character within the pattern. Patterns here are short
//! query tokens, so rebuilding a matcher per query is cheap.

use ahash::AHashMap;

/// A compiled search pattern.
///
/// Text is treated as a sequence of Unicode characters. The rightmost
/// occurrence table is sparse; patterns only touch a handful of characters.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Vec<char>,
    rightmost: AHashMap<char, usize>,
}

impl PatternMatcher {
    /// Compile `pattern`. O(|pattern|) time and space.
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut rightmost = AHashMap::with_capacity(pattern.len());
        for (i, ch) in pattern.iter().enumerate() {
            rightmost.insert(*ch, i);
        }
        Self { pattern, rightmost }
    }

    /// Number of occurrences of the pattern in `text`.
    ///
    /// After a full match the alignment advances by exactly one, so
    /// overlapping occurrences are counted: "aa" occurs three times in
    /// "aaaa". An empty pattern matches nowhere, and a pattern longer than
    /// the text cannot match at all.
    pub fn count_occurrences(&self, text: &str) -> usize {
        let text: Vec<char> = text.chars().collect();
        let m = self.pattern.len();
        if m == 0 || m > text.len() {
            return 0;
        }
        let mut count = 0;
        let mut i = 0;
        while i <= text.len() - m {
            match self.mismatch_shift(&text, i) {
                None => {
                    count += 1;
                    i += 1;
                }
                Some(shift) => i += shift,
            }
        }
        count
    }

    /// Char index of the first occurrence of the pattern in `text`, or the
    /// char length of `text` when it does not occur.
    pub fn first_occurrence(&self, text: &str) -> usize {
        let text: Vec<char> = text.chars().collect();
        let m = self.pattern.len();
        if m == 0 || m > text.len() {
            return text.len();
        }
        let mut i = 0;
        while i <= text.len() - m {
            match self.mismatch_shift(&text, i) {
                None => return i,
                Some(shift) => i += shift,
            }
        }
        text.len()
    }

    /// Compare the pattern right-to-left against `text` at alignment `i`.
    /// `None` on a full match, otherwise the bad-character shift.
    fn mismatch_shift(&self, text: &[char], i: usize) -> Option<usize> {
        for j in (0..self.pattern.len()).rev() {
            let observed = text[i + j];
            if self.pattern[j] != observed {
                let right = self
                    .rightmost
                    .get(&observed)
                    .map_or(-1, |pos| *pos as isize);
                return Some((j as isize - right).max(1) as usize);
            }
        }
        None
    }
}
