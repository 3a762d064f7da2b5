use thiserror::Error;

/// Errors surfaced by the scoring and feedback boundary of the solver.
///
/// None of these are retried internally: they are deterministic given the
/// input, so the caller decides whether to stop or ask again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("No candidate guesses to score")]
    EmptyCandidatePool,
    #[error("No possible answers remain, the feedback may be contradictory or mis-entered")]
    EmptyPossibleSet,
    #[error("Malformed feedback pattern \"{input}\": {reason}")]
    MalformedPattern { input: String, reason: PatternDefect },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternDefect {
    #[error("expected {expected} symbols, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("invalid symbol '{0}', use C (correct), P (present) or A (absent)")]
    InvalidSymbol(char),
}
