use thiserror::Error;

/// Failures raised while building a comparator or scoring a candidate.
///
/// None of these are retried; they surface straight to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A required list was never supplied.
    #[error("missing required input: {what}")]
    MissingInput { what: &'static str },

    #[error("invalid reference answers: {reason}")]
    InvalidReference { reason: String },

    #[error("provided answers contain duplicate value '{label}'")]
    DuplicateAnswer { label: String },

    /// Fewer than two candidate answers leave no pairs to compare.
    #[error("cannot score {len} answer(s): at least two are required to form a pair")]
    DegenerateScore { len: usize },
}
