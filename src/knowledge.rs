//! Accumulated knowledge about the secret word.
//!
//! A [`KnowledgeState`] is an immutable value: [`KnowledgeState::apply_feedback`]
//! returns the next state and leaves the previous one untouched, so scoring
//! threads reading the old state never observe a half-applied round.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::{letter_index, LetterSet, Word};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeState {
    /// Letters known to sit at a position (green)
    fixed: [Option<u8>; WORD_LENGTH],
    /// Letters known to be in the word at a yet unknown position (yellow)
    required: LetterSet,
    /// Letters with no occurrences left to place
    excluded: LetterSet,
    /// Letters proven not to be at each position
    not_here: [LetterSet; WORD_LENGTH],
    min_count: [u8; ALPHABET_SIZE],
    max_count: [u8; ALPHABET_SIZE],
    candidates: Vec<Word>,
}

impl KnowledgeState {
    /// Fresh knowledge at the start of a session: every answer is a candidate.
    pub fn new(answers: Vec<Word>) -> Self {
        Self {
            fixed: [None; WORD_LENGTH],
            required: LetterSet::new(),
            excluded: LetterSet::new(),
            not_here: [LetterSet::new(); WORD_LENGTH],
            min_count: [0; ALPHABET_SIZE],
            max_count: [WORD_LENGTH as u8; ALPHABET_SIZE],
            candidates: answers,
        }
    }

    pub fn fixed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.fixed
    }

    pub fn required(&self) -> LetterSet {
        self.required
    }

    pub fn excluded(&self) -> LetterSet {
        self.excluded
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    fn fixed_letters(&self) -> LetterSet {
        self.fixed.iter().flatten().copied().collect()
    }

    /// Fold one round of feedback into a new state and filter the candidates.
    ///
    /// Only the current candidates are filtered, so the candidate list never
    /// grows back.
    pub fn apply_feedback(&self, guess: &Word, pattern: FeedbackPattern) -> KnowledgeState {
        let mut next = KnowledgeState {
            fixed: self.fixed,
            required: self.required,
            excluded: self.excluded,
            not_here: self.not_here,
            min_count: self.min_count,
            max_count: self.max_count,
            candidates: Vec::new(),
        };
        let feedbacks = pattern.to_feedbacks();
        let letters = guess.letters();

        let mut marked = [0u8; ALPHABET_SIZE];
        let mut any_absent = [false; ALPHABET_SIZE];

        for (i, (&fb, &g)) in feedbacks.iter().zip(letters).enumerate() {
            let idx = letter_index(g);
            match fb {
                Feedback::Correct => {
                    next.fixed[i] = Some(g);
                    next.required.remove(g);
                    marked[idx] += 1;
                }
                Feedback::Present => {
                    next.required.insert(g);
                    next.not_here[i].insert(g);
                    marked[idx] += 1;
                }
                Feedback::Absent => {
                    next.excluded.insert(g);
                    next.not_here[i].insert(g);
                    any_absent[idx] = true;
                }
            }
        }

        for &g in letters {
            let idx = letter_index(g);
            next.min_count[idx] = next.min_count[idx].max(marked[idx]);
            if any_absent[idx] {
                next.max_count[idx] = next.max_count[idx].min(marked[idx]);
            }
        }

        next.cleanup();

        next.candidates = self
            .candidates
            .iter()
            .filter(|word| next.is_consistent(word))
            .copied()
            .collect();

        log::debug!(
            "Feedback {} for {} left {} of {} candidates (fixed {}, required {}, excluded {})",
            pattern.to_letters(),
            guess,
            next.candidates.len(),
            self.candidates.len(),
            next.fixed
                .iter()
                .map(|&f| f.map_or('?', |l| l as char))
                .collect::<String>(),
            next.required,
            next.excluded
        );

        next
    }

    /// Drop redundant letters: a fixed letter is no longer "required somewhere",
    /// and a letter that is fixed or required is never globally excluded.
    ///
    /// Idempotent.
    pub fn cleanup(&mut self) {
        let fixed = self.fixed_letters();
        self.required = self.required.difference(fixed);
        self.excluded = self.excluded.difference(fixed.union(self.required));
    }

    /// Whether `word` agrees with everything learned so far.
    pub fn is_consistent(&self, word: &Word) -> bool {
        let letters = word.letters();

        for (i, fixed) in self.fixed.iter().enumerate() {
            if let Some(l) = fixed {
                if letters[i] != *l {
                    return false;
                }
            }
        }

        if self.required.iter().any(|l| !word.contains(l)) {
            return false;
        }

        if letters.iter().any(|&l| self.excluded.contains(l)) {
            return false;
        }

        // a yellow or gray letter is known not to be at that position
        if letters
            .iter()
            .zip(&self.not_here)
            .any(|(&l, banned)| banned.contains(l))
        {
            return false;
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(self.min_count.iter().zip(&self.max_count))
            .all(|(&count, (&min, &max))| count >= min && count <= max)
    }
}
