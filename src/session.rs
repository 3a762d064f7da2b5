//! One game of Wordle, from the first suggestion to a win or running out of guesses.
//!
//! The session owns the [`KnowledgeState`] and replaces it each round; scoring
//! is delegated to an [`EntropyScorer`].

use std::sync::Arc;

use rayon::prelude::*;

use crate::cache::PatternCache;
use crate::config::SolverConfig;
use crate::dictionary::Dictionary;
use crate::entropy::{EntropyScorer, GuessAnalysis};
use crate::error::SolverError;
use crate::feedback::FeedbackPattern;
use crate::knowledge::KnowledgeState;
use crate::word::Word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    /// Either the last feedback was all green or a single candidate is left
    Solved(Word),
    /// No answer is consistent with the feedback given so far
    NoCandidates,
    OutOfGuesses,
}

/// Guess-count statistics from solving every answer in the dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// `(guesses, number of answers solved in that many guesses)`, ascending
    pub distribution: Vec<(usize, usize)>,
    /// Answers not solved within the attempt limit
    pub failures: usize,
    /// Average guesses over the solved answers
    pub average: f64,
}

#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Arc<Dictionary>,
    config: SolverConfig,
    scorer: EntropyScorer,
    state: KnowledgeState,
    history: Vec<(Word, FeedbackPattern)>,
}

impl Session {
    pub fn new(dictionary: Dictionary, config: SolverConfig) -> Self {
        let scorer = if config.pattern_cache {
            EntropyScorer::with_cache(Arc::new(PatternCache::new()))
        } else {
            EntropyScorer::new()
        };
        Self::with_scorer(Arc::new(dictionary), config, scorer)
    }

    /// Build a session around an existing scorer, e.g. one whose cache is shared
    /// with other sessions over the same word lists.
    pub fn with_scorer(
        dictionary: Arc<Dictionary>,
        config: SolverConfig,
        scorer: EntropyScorer,
    ) -> Self {
        let state = KnowledgeState::new(dictionary.answers.clone());
        Self {
            dictionary,
            config,
            scorer,
            state,
            history: Vec::new(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn scorer(&self) -> &EntropyScorer {
        &self.scorer
    }

    pub fn state(&self) -> &KnowledgeState {
        &self.state
    }

    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    pub fn remaining_count(&self) -> usize {
        self.state.remaining_count()
    }

    pub fn possible_answers(&self) -> &[Word] {
        self.state.candidates()
    }

    /// The guesses that get scored: the allowed list, cut to `pool_limit` words.
    pub fn candidate_pool(&self) -> &[Word] {
        let allowed: &[Word] = &self.dictionary.allowed;
        match self.config.pool_limit {
            0 => allowed,
            limit => &allowed[..limit.min(allowed.len())],
        }
    }

    pub fn reset(&mut self) {
        self.state = KnowledgeState::new(self.dictionary.answers.clone());
        self.history.clear();
    }

    /// Recommend the next guess.
    ///
    /// A lone remaining candidate is returned as is rather than scored.
    pub fn suggest(&self) -> Result<GuessAnalysis, SolverError> {
        match self.possible_answers() {
            [] => Err(SolverError::EmptyPossibleSet),
            [only] => Ok(GuessAnalysis {
                word: *only,
                entropy: 0.0,
                expected_remaining: 1.0,
                is_possible_answer: true,
            }),
            possible => self.scorer.best_guess(self.candidate_pool(), possible),
        }
    }

    pub fn top_suggestions(&self, n: usize) -> Result<Vec<GuessAnalysis>, SolverError> {
        self.scorer
            .top_guesses(self.candidate_pool(), self.possible_answers(), n)
    }

    /// Record the feedback for `guess` and narrow the candidates.
    pub fn apply(&mut self, guess: Word, pattern: FeedbackPattern) -> SessionStatus {
        self.state = self.state.apply_feedback(&guess, pattern);
        self.history.push((guess, pattern));
        self.status()
    }

    pub fn status(&self) -> SessionStatus {
        if let Some(&(guess, pattern)) = self.history.last() {
            if pattern.is_win() {
                return SessionStatus::Solved(guess);
            }
        }
        match self.possible_answers() {
            [] => SessionStatus::NoCandidates,
            [only] => SessionStatus::Solved(*only),
            _ if self.history.len() >= self.config.max_attempts => SessionStatus::OutOfGuesses,
            _ => SessionStatus::InProgress,
        }
    }

    /// Play until the feedback is all green or the attempts run out, asking
    /// `get_feedback` for the pattern of each guess.
    /// Returns the sequence of guesses made.
    pub fn solve_with_feedback<F>(
        &mut self,
        mut get_feedback: F,
    ) -> Result<Vec<(Word, FeedbackPattern)>, SolverError>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut guesses = Vec::new();

        for _ in 0..self.config.max_attempts {
            let best = self.suggest()?;
            let pattern = get_feedback(&best.word);
            guesses.push((best.word, pattern));
            self.apply(best.word, pattern);

            if pattern.is_win() {
                break;
            }
        }

        Ok(guesses)
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(
        &mut self,
        target: &Word,
    ) -> Result<Vec<(Word, FeedbackPattern)>, SolverError> {
        let scorer = self.scorer.clone();
        self.solve_with_feedback(|guess| scorer.pattern(guess, target))
    }

    /// Solve every answer from a fresh session, calling `on_solved` after each one.
    pub fn benchmark<F>(&self, on_solved: F) -> Result<BenchmarkReport, SolverError>
    where
        F: Fn(&Word, usize) + Sync,
    {
        let fresh = Session::with_scorer(
            self.dictionary.clone(),
            self.config.clone(),
            self.scorer.clone(),
        );

        let guess_counts: Vec<Option<usize>> = self
            .dictionary
            .answers
            .par_iter()
            .map(|target| -> Result<Option<usize>, SolverError> {
                let mut session = fresh.clone();
                let guesses = session.solve_for_target(target)?;
                on_solved(target, guesses.len());
                let won = guesses.last().is_some_and(|(_, pattern)| pattern.is_win());
                Ok(won.then_some(guesses.len()))
            })
            .collect::<Result<_, _>>()?;

        let max_guesses = guess_counts.iter().flatten().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_guesses + 1];
        let mut failures = 0;
        for count in guess_counts {
            match count {
                Some(count) => distribution[count] += 1,
                None => failures += 1,
            }
        }

        let solved: usize = distribution.iter().sum();
        let total_guesses: usize = distribution.iter().enumerate().map(|(g, c)| g * c).sum();
        let average = if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        };

        Ok(BenchmarkReport {
            distribution: distribution
                .into_iter()
                .enumerate()
                .filter(|(_, count)| *count > 0)
                .collect(),
            failures,
            average,
        })
    }
}
