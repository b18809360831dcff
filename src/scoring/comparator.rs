//! Pairwise order scoring.
//!
//! Every candidate answer is compared with every later candidate answer.
//! Each pair earns credit when the reference ordering agrees on which of the
//! two comes first, so a mostly-right ordering earns mostly-full credit.
//!
//! With reference `[Declaration, Articles, Constitution, War of 1812]` and
//! candidate `[Declaration, Constitution, Articles, War of 1812]`, only the
//! `Constitution` before `Articles` pair is wrong: 5 of 6 pairs are correct.

use std::collections::HashMap;
use tracing::debug;

use super::error::ScoringError;
use super::policy::DegeneratePolicy;
use super::score::Score;
use super::validation::{find_duplicate, normalize};

/// Holds a reference ordering and scores candidate orderings against it.
///
/// Immutable once built; clone it or share it across threads freely.
#[derive(Debug, Clone)]
pub struct OrderComparator {
    reference: Vec<String>,
    positions: HashMap<String, usize>,
    case_sensitive: bool,
    degenerate_policy: DegeneratePolicy,
}

impl OrderComparator {
    /// Build a comparator with the default degenerate policy.
    pub fn new<I, S>(reference: I, case_sensitive: bool) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_policy(reference, case_sensitive, DegeneratePolicy::default())
    }

    pub fn builder() -> OrderComparatorBuilder {
        OrderComparatorBuilder::default()
    }

    fn with_policy<I, S>(
        reference: I,
        case_sensitive: bool,
        degenerate_policy: DegeneratePolicy,
    ) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reference = normalize(reference, case_sensitive);

        if reference.len() < 2 {
            return Err(ScoringError::InvalidReference {
                reason: format!("need at least 2 answers, got {}", reference.len()),
            });
        }
        if let Some(label) = find_duplicate(&reference) {
            return Err(ScoringError::InvalidReference {
                reason: format!("duplicate value '{}'", label),
            });
        }

        let positions = reference
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        debug!(
            answers = reference.len(),
            case_sensitive,
            policy = %degenerate_policy,
            "built order comparator"
        );

        Ok(Self {
            reference,
            positions,
            case_sensitive,
            degenerate_policy,
        })
    }

    /// Normalized reference answers in their correct order.
    pub fn reference(&self) -> &[String] {
        &self.reference
    }

    pub fn len(&self) -> usize {
        self.reference.len()
    }

    /// Always false; a comparator holds at least two answers.
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }

    /// Apply this comparator's case policy to a list of answers.
    pub fn normalize<I, S>(&self, items: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        normalize(items, self.case_sensitive)
    }

    /// Score `candidate` against the reference ordering.
    ///
    /// Answers missing from the reference still count toward the total pair
    /// count but never make a pair correct.
    pub fn score<I, S>(&self, candidate: I, points_available: u32) -> Result<Score, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidate = self.normalize(candidate);

        if let Some(label) = find_duplicate(&candidate) {
            return Err(ScoringError::DuplicateAnswer {
                label: label.to_string(),
            });
        }

        if candidate.len() < 2 {
            return match self.degenerate_policy {
                DegeneratePolicy::Zero => {
                    debug!(answers = candidate.len(), "no pairs to score");
                    Ok(Score::empty(points_available))
                }
                DegeneratePolicy::Reject => Err(ScoringError::DegenerateScore {
                    len: candidate.len(),
                }),
            };
        }

        let ranks: Vec<Option<usize>> = candidate
            .iter()
            .map(|label| self.positions.get(label).copied())
            .collect();

        let mut correct = 0u64;
        for (i, earlier) in ranks.iter().enumerate() {
            let Some(earlier) = earlier else { continue };
            for later in ranks[i + 1..].iter().flatten() {
                if earlier < later {
                    correct += 1;
                }
            }
        }

        let total = Score::pairs_for(candidate.len());
        let unmatched = ranks.iter().filter(|r| r.is_none()).count();
        debug!(correct, total, unmatched, "scored candidate");

        Ok(Score::new(correct, total, points_available))
    }
}

/// Step-by-step construction of an [`OrderComparator`].
#[derive(Debug, Clone)]
pub struct OrderComparatorBuilder {
    reference: Option<Vec<String>>,
    case_sensitive: bool,
    degenerate_policy: DegeneratePolicy,
}

impl Default for OrderComparatorBuilder {
    fn default() -> Self {
        Self {
            reference: None,
            case_sensitive: true,
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

impl OrderComparatorBuilder {
    pub fn reference<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reference = Some(items.into_iter().map(|s| s.as_ref().to_string()).collect());
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn build(self) -> Result<OrderComparator, ScoringError> {
        let reference = self.reference.ok_or(ScoringError::MissingInput {
            what: "reference answers",
        })?;
        OrderComparator::with_policy(reference, self.case_sensitive, self.degenerate_policy)
    }
}
