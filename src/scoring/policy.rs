use anyhow::{bail, Result};
use std::fmt;

/// What to do with a candidate too short to form a single pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Score it as 0 correct out of 0, worth 0 points.
    #[default]
    Zero,
    /// Fail with `ScoringError::DegenerateScore`.
    Reject,
}

impl DegeneratePolicy {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(DegeneratePolicy::Zero),
            "reject" => Ok(DegeneratePolicy::Reject),
            other => bail!("expected 'zero' or 'reject', got '{}'", other),
        }
    }
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::Zero => write!(f, "zero"),
            DegeneratePolicy::Reject => write!(f, "reject"),
        }
    }
}
