//! Entropy-based guess scoring.
//!
//! This module implements an information-theoretic approach to choosing a guess.
//! The key insight is that we want to maximize the expected information gain
//! (entropy) from each guess, which minimizes the expected number of remaining
//! possible words.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;

use crate::cache::PatternCache;
use crate::error::SolverError;
use crate::feedback::FeedbackPattern;
use crate::word::Word;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

/// Shannon entropy, in bits, of a distribution given as bucket counts.
///
/// Empty buckets are skipped; `total` must be the sum of `counts` and non-zero.
pub fn entropy(counts: &[u32], total: usize) -> f64 {
    let n = total as f64;
    let mut entropy = 0.0;
    for &count in counts {
        if count > 0 {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Scores guesses against the set of answers that are still possible.
///
/// The scorer is stateless apart from an optional [`PatternCache`], which can
/// be shared with other scorers through the `Arc`.
#[derive(Debug, Clone, Default)]
pub struct EntropyScorer {
    cache: Option<Arc<PatternCache>>,
}

impl EntropyScorer {
    /// A scorer that computes every pattern directly.
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self { cache: Some(cache) }
    }

    pub fn cache(&self) -> Option<&Arc<PatternCache>> {
        self.cache.as_ref()
    }

    pub fn pattern(&self, guess: &Word, target: &Word) -> FeedbackPattern {
        match &self.cache {
            Some(cache) => cache.get(guess, target),
            None => FeedbackPattern::calculate(guess, target),
        }
    }

    /// How many of the `possible` answers produce each pattern for `guess`.
    pub fn pattern_counts(
        &self,
        guess: &Word,
        possible: &[Word],
    ) -> [u32; FeedbackPattern::NUM_PATTERNS] {
        let mut pattern_counts = [0u32; FeedbackPattern::NUM_PATTERNS];
        for answer in possible {
            pattern_counts[self.pattern(guess, answer).index()] += 1;
        }
        pattern_counts
    }

    pub fn entropy_for_word(&self, guess: &Word, possible: &[Word]) -> Result<f64, SolverError> {
        if possible.is_empty() {
            return Err(SolverError::EmptyPossibleSet);
        }
        Ok(entropy(&self.pattern_counts(guess, possible), possible.len()))
    }

    fn analyze(&self, guess: &Word, possible: &[Word], answers: &HashSet<Word>) -> GuessAnalysis {
        let entropy = entropy(&self.pattern_counts(guess, possible), possible.len());
        GuessAnalysis {
            word: *guess,
            entropy,
            expected_remaining: possible.len() as f64 / 2_f64.powf(entropy),
            is_possible_answer: answers.contains(guess),
        }
    }

    fn check_inputs(pool: &[Word], possible: &[Word]) -> Result<(), SolverError> {
        if pool.is_empty() {
            return Err(SolverError::EmptyCandidatePool);
        }
        if possible.is_empty() {
            return Err(SolverError::EmptyPossibleSet);
        }
        Ok(())
    }

    /// The guess in `pool` with the highest entropy over `possible`.
    ///
    /// Ties go to the word that comes first in `pool`, so the result depends
    /// only on the order of the pool. With a single possible answer every guess
    /// scores 0 and the first pool word is returned; deciding to stop is up to
    /// the caller.
    pub fn best_guess(
        &self,
        pool: &[Word],
        possible: &[Word],
    ) -> Result<GuessAnalysis, SolverError> {
        Self::check_inputs(pool, possible)?;
        let answers: HashSet<Word> = possible.iter().copied().collect();

        let best = pool
            .par_iter()
            .map(|word| self.analyze(word, possible, &answers))
            // rayon keeps `a` before `b` in pool order, so `>` keeps the first maximum
            .reduce_with(|a, b| if b.entropy > a.entropy { b } else { a })
            .ok_or(SolverError::EmptyCandidatePool)?;

        log::debug!(
            "Best of {} guesses over {} answers: {} ({:.3} bits)",
            pool.len(),
            possible.len(),
            best.word,
            best.entropy
        );
        Ok(best)
    }

    /// The `n` best guesses in `pool`, highest entropy first, ties in pool order.
    pub fn top_guesses(
        &self,
        pool: &[Word],
        possible: &[Word],
        n: usize,
    ) -> Result<Vec<GuessAnalysis>, SolverError> {
        Self::check_inputs(pool, possible)?;
        let answers: HashSet<Word> = possible.iter().copied().collect();

        let mut analyses: Vec<GuessAnalysis> = pool
            .par_iter()
            .map(|word| self.analyze(word, possible, &answers))
            .collect();

        // stable sort keeps pool order among equal scores
        analyses.sort_by(|a, b| {
            b.entropy
                .partial_cmp(&a.entropy)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        analyses.truncate(n);
        Ok(analyses)
    }
}
