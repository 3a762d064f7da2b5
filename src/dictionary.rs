//! Word list loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::word::Word;
use crate::WORD_LENGTH;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("File '{}' not found", path.display())]
    NotFound { path: PathBuf },
    #[error("Unable to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No valid {}-letter words found in '{}'", WORD_LENGTH, path.display())]
    Empty { path: PathBuf },
}

/// Parse one word per line.
///
/// Lines are trimmed and uppercased; lines that are not five letters long are
/// ignored, and five character lines with non-letters are skipped with a warning.
pub fn parse_word_list(text: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() == WORD_LENGTH)
        .filter_map(|line| match line.parse::<Word>() {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("Skipping dictionary entry: {e}");
                None
            }
        })
        .collect()
}

/// Load a word list from a file, rejecting files without a single valid word.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let words = parse_word_list(&text);
    if words.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

/// The two word lists a game is played with.
///
/// `answers` is the universe the secret word is drawn from, `allowed` the words
/// that may be guessed. Order is preserved from the source files, since the
/// scorer breaks ties by position in the guess pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub answers: Vec<Word>,
    pub allowed: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary; without an `allowed` list the answers double as guesses.
    pub fn new(answers: Vec<Word>, allowed: Option<Vec<Word>>) -> Self {
        let allowed = allowed.unwrap_or_else(|| answers.clone());
        Self { answers, allowed }
    }

    pub fn load(
        answers_path: impl AsRef<Path>,
        allowed_path: Option<impl AsRef<Path>>,
    ) -> Result<Self, DictionaryError> {
        let answers = load_word_list(answers_path)?;
        let allowed = allowed_path.map(load_word_list).transpose()?;
        let dictionary = Self::new(answers, allowed);

        log::info!("Loaded {} answer words", dictionary.answers.len());
        log::info!("Loaded {} allowed guesses", dictionary.allowed.len());
        Ok(dictionary)
    }
}
