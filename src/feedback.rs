//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback pattern (green/yellow/gray)
//! for a guess against a target word, and parsing the pattern a player reports.

use crate::error::{PatternDefect, SolverError};
use crate::word::{letter_index, Word};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word, or all of its occurrences already accounted for (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// The letter used when the player types feedback
    pub fn to_letter(self) -> char {
        match self {
            Feedback::Correct => 'C',
            Feedback::Present => 'P',
            Feedback::Absent => 'A',
        }
    }

    /// Parse from a character: C/P/A, the colour initials g/y/b, or 2/1/0
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' | 'g' | '2' => Some(Feedback::Correct),
            'p' | 'y' | '1' => Some(Feedback::Present),
            'a' | 'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn value(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242).
/// Each position can be 0 (absent), 1 (present), or 2 (correct).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    pub const ALL_ABSENT: Self = Self(0);

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            pattern += fb.value() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Dense index in `0..NUM_PATTERNS`, for counting tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Calculate the feedback pattern for a guess against a target word.
    ///
    /// Exact matches are marked first and use up their letter's budget in the
    /// target; each remaining guess letter is then Present while the target
    /// still has unmatched copies of it, otherwise Absent. A letter occurring
    /// `k` times in the target therefore earns at most `k` non-Absent marks.
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target = target.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut target_remaining = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                feedback[i] = Feedback::Correct;
            } else {
                target_remaining[letter_index(target[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = letter_index(guess[i]);
                if target_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    target_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern typed by the player, like "CPAAP", "c p a a p", "gybbb" or "21000".
    ///
    /// Whitespace is ignored. Anything that is not exactly five valid symbols
    /// is rejected with [`SolverError::MalformedPattern`].
    pub fn parse(s: &str) -> Result<Self, SolverError> {
        let malformed = |reason| SolverError::MalformedPattern {
            input: s.to_string(),
            reason,
        };

        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != WORD_LENGTH {
            return Err(malformed(PatternDefect::WrongLength {
                expected: WORD_LENGTH,
                found: symbols.len(),
            }));
        }

        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (slot, &c) in feedbacks.iter_mut().zip(&symbols) {
            *slot = Feedback::from_char(c)
                .ok_or_else(|| malformed(PatternDefect::InvalidSymbol(c)))?;
        }
        Ok(Self::new(feedbacks))
    }

    /// Display as the C/P/A letters the player types
    pub fn to_letters(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_letter()).collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl TryFrom<&[Feedback]> for FeedbackPattern {
    type Error = SolverError;

    fn try_from(feedbacks: &[Feedback]) -> Result<Self, Self::Error> {
        let arr: [Feedback; WORD_LENGTH] =
            feedbacks
                .try_into()
                .map_err(|_| SolverError::MalformedPattern {
                    input: feedbacks.iter().map(|f| f.to_letter()).collect(),
                    reason: PatternDefect::WrongLength {
                        expected: WORD_LENGTH,
                        found: feedbacks.len(),
                    },
                })?;
        Ok(Self::new(arr))
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
