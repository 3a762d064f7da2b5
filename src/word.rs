//! Words and letter sets.
//!
//! Words are stored as five uppercase ASCII bytes so they can be copied, hashed
//! and compared cheaply inside the scoring loop.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{ALPHABET_SIZE, WORD_LENGTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error(
        "Expected word of length: {expected_length}. Found word \"{word}\" of length {}",
        word.chars().count()
    )]
    InvalidLength { word: String, expected_length: usize },
    #[error("Word \"{word}\" contains '{letter}', which is not a letter A-Z")]
    InvalidLetter { word: String, letter: char },
}

/// Index of an uppercase ASCII letter in `0..26`.
#[inline]
pub fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase());
    (letter - b'A') as usize
}

/// A five letter word over `A`..=`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Number of occurrences of `letter` in the word.
    pub fn count(&self, letter: u8) -> u8 {
        self.0.iter().filter(|&&l| l == letter).count() as u8
    }

    /// Occurrence count of every letter, indexed by [`letter_index`].
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &l in &self.0 {
            counts[letter_index(l)] += 1;
        }
        counts
    }

    pub fn letter_set(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if s.chars().count() != WORD_LENGTH || bytes.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                word: s.to_string(),
                expected_length: WORD_LENGTH,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return Err(WordError::InvalidLetter {
                    word: s.to_string(),
                    letter: b as char,
                });
            }
            *slot = b.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &l in &self.0 {
            write!(f, "{}", l as char)?;
        }
        Ok(())
    }
}

/// A set of uppercase letters packed into the low 26 bits of a `u32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    fn bit(letter: u8) -> u32 {
        1 << letter_index(letter)
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    pub fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'A'..=b'Z').filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, l) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", l as char)?;
        }
        write!(f, "}}")
    }
}
