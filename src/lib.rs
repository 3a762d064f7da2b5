//! # Wordle Solver
//!
//! An interactive Wordle solver using entropy-based information theory.
//!
//! Each turn the solver scores a pool of allowed guesses by the Shannon entropy
//! of the feedback patterns they would produce against the remaining possible
//! answers, recommends the best one, then narrows the possible answers using the
//! feedback the player reports.

pub mod cache;
pub mod config;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod knowledge;
pub mod session;
pub mod word;

pub use cache::PatternCache;
pub use config::SolverConfig;
pub use dictionary::{load_word_list, Dictionary};
pub use entropy::{EntropyScorer, GuessAnalysis};
pub use error::SolverError;
pub use feedback::{Feedback, FeedbackPattern};
pub use knowledge::KnowledgeState;
pub use session::{Session, SessionStatus};
pub use word::{LetterSet, Word};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet words are drawn from (`A`..=`Z`)
pub const ALPHABET_SIZE: usize = 26;
