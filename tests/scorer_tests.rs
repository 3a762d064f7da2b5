mod common;

use std::sync::Arc;

use common::{get_test_words, get_tricky_words, w, words};
use wordle_solver::{EntropyScorer, PatternCache, SolverError};

#[test]
fn test_two_patterns_give_one_bit() {
    let scorer = EntropyScorer::new();
    let possible = words(&["ABIDE", "ABODE"]);

    let counts = scorer.pattern_counts(&w("ABIDE"), &possible);
    assert_eq!(counts.iter().filter(|&&c| c > 0).count(), 2);
    assert_eq!(counts.iter().sum::<u32>(), 2);
    assert_eq!(scorer.entropy_for_word(&w("ABIDE"), &possible).unwrap(), 1.0);
}

#[test]
fn test_entropy_bounds() {
    let scorer = EntropyScorer::new();
    let possible = words(&["CRANE", "TRACE", "CRATE", "SLATE"]);

    let entropy = scorer.entropy_for_word(&w("CRANE"), &possible).unwrap();
    assert!(entropy > 0.0);
    assert!(entropy <= 2.0);
}

#[test]
fn test_every_answer_distinguished() {
    let scorer = EntropyScorer::new();
    let possible = get_test_words();

    let entropy = scorer.entropy_for_word(&w("CRANE"), &possible).unwrap();
    assert!((entropy - (possible.len() as f64).log2()).abs() < 1e-12);
}

#[test]
fn test_best_guess_may_be_outside_possible_set() {
    let scorer = EntropyScorer::new();
    let possible = words(&["FIGHT", "LIGHT", "MIGHT", "NIGHT", "SIGHT"]);
    let pool = words(&["FIGHT", "FLAMS", "NIGHT"]);

    let best = scorer.best_guess(&pool, &possible).unwrap();
    assert_eq!(best.word, w("FLAMS"));
    assert!(!best.is_possible_answer);
    assert!((best.entropy - 5f64.log2()).abs() < 1e-12);
    assert!((best.expected_remaining - 1.0).abs() < 1e-9);
}

#[test]
fn test_ties_resolve_to_pool_order() {
    let scorer = EntropyScorer::new();
    let possible = words(&["ABIDE", "ABODE"]);

    let forward = scorer.best_guess(&words(&["ABIDE", "ABODE"]), &possible).unwrap();
    assert_eq!(forward.word, w("ABIDE"));

    let backward = scorer.best_guess(&words(&["ABODE", "ABIDE"]), &possible).unwrap();
    assert_eq!(backward.word, w("ABODE"));
}

#[test]
fn test_single_possible_still_returns_a_guess() {
    let scorer = EntropyScorer::new();
    let pool = get_test_words();

    let best = scorer.best_guess(&pool, &[w("TOAST")]).unwrap();
    assert_eq!(best.entropy, 0.0);
    assert_eq!(best.word, pool[0]);
}

#[test]
fn test_best_guess_comes_from_pool() {
    let scorer = EntropyScorer::new();
    let pool = get_tricky_words();
    let possible = get_test_words();

    for end in 1..pool.len() {
        let best = scorer.best_guess(&pool[..end], &possible).unwrap();
        assert!(pool[..end].contains(&best.word));
    }
}

#[test]
fn test_empty_inputs_are_rejected() {
    let scorer = EntropyScorer::new();
    let words = get_test_words();

    assert_eq!(
        scorer.best_guess(&[], &words),
        Err(SolverError::EmptyCandidatePool)
    );
    assert_eq!(
        scorer.best_guess(&words, &[]),
        Err(SolverError::EmptyPossibleSet)
    );
    assert_eq!(
        scorer.top_guesses(&words, &[], 3),
        Err(SolverError::EmptyPossibleSet)
    );
    assert_eq!(
        scorer.entropy_for_word(&words[0], &[]),
        Err(SolverError::EmptyPossibleSet)
    );
}

#[test]
fn test_top_guesses_sorted_and_led_by_best() {
    let scorer = EntropyScorer::new();
    let pool = get_tricky_words();
    let possible = get_test_words();

    let top = scorer.top_guesses(&pool, &possible, 5).unwrap();
    assert_eq!(top.len(), 5);
    for i in 1..top.len() {
        assert!(top[i - 1].entropy >= top[i].entropy);
    }

    let best = scorer.best_guess(&pool, &possible).unwrap();
    assert_eq!(top[0], best);

    let all = scorer.top_guesses(&pool, &possible, 100).unwrap();
    assert_eq!(all.len(), pool.len());
}

#[test]
fn test_cached_scorer_matches_uncached() {
    let cache = Arc::new(PatternCache::new());
    let cached = EntropyScorer::with_cache(cache.clone());
    let plain = EntropyScorer::new();
    let pool = get_tricky_words();
    let possible = get_test_words();

    let a = cached.top_guesses(&pool, &possible, pool.len()).unwrap();
    let b = plain.top_guesses(&pool, &possible, pool.len()).unwrap();
    assert_eq!(a, b);
    assert_eq!(cache.len(), pool.len() * possible.len());

    // a second scorer sharing the cache sees the same patterns
    let shared = EntropyScorer::with_cache(cache.clone());
    assert_eq!(
        shared.best_guess(&pool, &possible).unwrap(),
        plain.best_guess(&pool, &possible).unwrap()
    );
    assert_eq!(cache.len(), pool.len() * possible.len());
}
