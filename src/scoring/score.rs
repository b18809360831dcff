use serde::Serialize;
use std::fmt;

/// Result of scoring one candidate ordering.
///
/// Only the three counts are stored; percent and awarded points are derived
/// on access, so two scores compare equal exactly when their counts do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Score {
    correct_pair_count: u64,
    total_pair_count: u64,
    points_available: u32,
}

impl Score {
    /// Build a score from raw pair counts.
    ///
    /// `correct_pair_count` must not exceed `total_pair_count`; release builds
    /// clamp it.
    pub fn new(correct_pair_count: u64, total_pair_count: u64, points_available: u32) -> Self {
        debug_assert!(
            correct_pair_count <= total_pair_count,
            "correct pairs ({}) exceed total pairs ({})",
            correct_pair_count,
            total_pair_count
        );
        Self {
            correct_pair_count: correct_pair_count.min(total_pair_count),
            total_pair_count,
            points_available,
        }
    }

    /// Score for a candidate too short to form any pair.
    pub fn empty(points_available: u32) -> Self {
        Self::new(0, 0, points_available)
    }

    /// Number of unordered position pairs in a list of `n` answers.
    pub fn pairs_for(n: usize) -> u64 {
        let n = n as u64;
        if n < 2 {
            0
        } else {
            n * (n - 1) / 2
        }
    }

    pub fn correct_pair_count(&self) -> u64 {
        self.correct_pair_count
    }

    pub fn total_pair_count(&self) -> u64 {
        self.total_pair_count
    }

    pub fn points_available(&self) -> u32 {
        self.points_available
    }

    /// Fraction of pairs in the right relative order, in `[0, 1]`.
    /// Zero when there were no pairs to compare.
    pub fn percent_correct(&self) -> f64 {
        if self.total_pair_count == 0 {
            0.0
        } else {
            self.correct_pair_count as f64 / self.total_pair_count as f64
        }
    }

    /// Awarded points, rounded to nearest with ties rounding up.
    ///
    /// Computed as `(2·c·p + t) / (2·t)` in integers so thirds and halves
    /// never land on the wrong side of a float boundary.
    pub fn points(&self) -> u32 {
        if self.total_pair_count == 0 {
            return 0;
        }
        let c = self.correct_pair_count as u128;
        let t = self.total_pair_count as u128;
        let p = self.points_available as u128;
        // c <= t, so the quotient never exceeds p
        ((2 * c * p + t) / (2 * t)) as u32
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correct Pairs: {}; Percent Correct: {}; Points: {}",
            self.correct_pair_count,
            self.percent_correct(),
            self.points()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_one_third() {
        let score = Score::new(1, 3, 100);
        assert_eq!(score.points(), 33);
        assert!((score.percent_correct() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounding_two_thirds() {
        let score = Score::new(2, 3, 150);
        assert_eq!(score.points(), 100);
    }

    #[test]
    fn test_rounding_half_rounds_up() {
        assert_eq!(Score::new(1, 2, 1).points(), 1);
        assert_eq!(Score::new(1, 2, 3).points(), 2);
        assert_eq!(Score::new(1, 4, 2).points(), 1);
    }

    #[test]
    fn test_rounding_one_third_of_seventy() {
        // 23.33 -> 23
        assert_eq!(Score::new(1, 3, 70).points(), 23);
    }

    #[test]
    fn test_full_and_zero_credit() {
        assert_eq!(Score::new(3, 3, 97).points(), 97);
        assert_eq!(Score::new(3, 3, 97).percent_correct(), 1.0);
        assert_eq!(Score::new(0, 3, 98).points(), 0);
    }

    #[test]
    fn test_empty_score_is_zero() {
        let score = Score::empty(100);
        assert_eq!(score.total_pair_count(), 0);
        assert_eq!(score.percent_correct(), 0.0);
        assert_eq!(score.points(), 0);
        assert_eq!(score.points_available(), 100);
    }

    #[test]
    fn test_zero_points_available() {
        assert_eq!(Score::new(2, 3, 0).points(), 0);
    }

    #[test]
    fn test_pairs_for() {
        assert_eq!(Score::pairs_for(0), 0);
        assert_eq!(Score::pairs_for(1), 0);
        assert_eq!(Score::pairs_for(2), 1);
        assert_eq!(Score::pairs_for(4), 6);
        assert_eq!(Score::pairs_for(15), 105);
    }

    #[test]
    fn test_equality_over_counts() {
        assert_eq!(Score::new(1, 3, 100), Score::new(1, 3, 100));
        assert_ne!(Score::new(1, 3, 100), Score::new(1, 3, 99));
        assert_ne!(Score::new(1, 3, 100), Score::new(2, 6, 100));
    }

    #[test]
    fn test_display() {
        let score = Score::new(1, 1, 10);
        assert_eq!(
            score.to_string(),
            "Correct Pairs: 1; Percent Correct: 1; Points: 10"
        );
    }

    #[test]
    fn test_serializes_counts() {
        let json = serde_json::to_value(Score::new(2, 3, 150)).unwrap();
        assert_eq!(json["correct_pair_count"], 2);
        assert_eq!(json["total_pair_count"], 3);
        assert_eq!(json["points_available"], 150);
    }
}
