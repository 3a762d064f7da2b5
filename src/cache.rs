//! Memoized feedback patterns.
//!
//! The pattern for a `(guess, target)` pair never changes, so a cache can be
//! shared freely between scoring threads and between sessions that use the same
//! word lists. It is an ordinary owned value; hand out an `Arc<PatternCache>`
//! to share it.

use dashmap::DashMap;
use rayon::prelude::*;

use crate::feedback::FeedbackPattern;
use crate::word::Word;

#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: DashMap<(Word, Word), FeedbackPattern>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the pattern for `guess` against `target`, computing and storing it on a miss.
    ///
    /// Two threads missing on the same key both compute the same value, so the
    /// second insert is harmless.
    pub fn get(&self, guess: &Word, target: &Word) -> FeedbackPattern {
        let key = (*guess, *target);
        if let Some(pattern) = self.patterns.get(&key) {
            return *pattern;
        }
        let pattern = FeedbackPattern::calculate(guess, target);
        self.patterns.insert(key, pattern);
        pattern
    }

    /// Fill the cache for every pair in `guesses × targets`.
    pub fn warm(&self, guesses: &[Word], targets: &[Word]) {
        guesses.par_iter().for_each(|guess| {
            for target in targets {
                self.get(guess, target);
            }
        });
        log::debug!(
            "Pattern cache warmed for {}x{} pairs ({} entries)",
            guesses.len(),
            targets.len(),
            self.len()
        );
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn clear(&self) {
        self.patterns.clear();
    }
}
