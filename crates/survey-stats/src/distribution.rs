use serde::Serialize;

use crate::descriptive::{self, percentage};

/// How values are mapped onto distribution buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bucketing {
    /// Every distinct value is its own bucket.
    #[default]
    Exact,
    /// Values are rounded to the nearest integer, halves rounding up.
    Rounded,
}

/// Frequency distribution of a discrete score.
///
/// Each bin holds one distinct score, the number of values equal to it and
/// that number as a percentage of all valid values. Bins are sorted by
/// ascending score.
///
/// # Examples
///
/// ```
/// use survey_stats::distribution::{Bucketing, ScoreDistribution};
///
/// let dist = ScoreDistribution::new([Some(7.0), Some(5.0), None, Some(7.0)], Bucketing::Exact);
/// assert_eq!(dist.bins.len(), 2);
/// assert_eq!(dist.bins[0].score, 5.0);
/// assert_eq!(dist.bins[1].count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ScoreDistribution {
    pub bins: Vec<ScoreBin>,
}

/// A single bin of a [`ScoreDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBin {
    pub score: f64,
    pub count: usize,
    /// Share of all valid values, 0–100.
    pub percentage: f64,
}

impl ScoreDistribution {
    /// Builds a distribution from possibly missing values.
    #[must_use]
    pub fn new<I>(values: I, bucketing: Bucketing) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<f64>>,
    {
        let mut scores = descriptive::valid_values(values);
        if bucketing == Bucketing::Rounded {
            for score in &mut scores {
                *score = round_half_up(*score);
            }
        }
        scores.sort_by(f64::total_cmp);

        let total = scores.len();
        let mut bins = Vec::<ScoreBin>::new();
        for score in scores {
            match bins.last_mut() {
                Some(bin) if bin.score == score => bin.count += 1,
                _ => bins.push(ScoreBin {
                    score,
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }
        for bin in &mut bins {
            bin.percentage = percentage(bin.count, total);
        }

        Self { bins }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of values across all bins.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Rounds to the nearest integer with halves rounding towards positive infinity.
///
/// ```
/// # use survey_stats::distribution::round_half_up;
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(2.49), 2.0);
/// ```
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to a fixed number of decimal places, halves rounding up.
///
/// ```
/// # use survey_stats::distribution::round_to;
/// assert_eq!(round_to(0.456, 2), 0.46);
/// assert_eq!(round_to(0.12344, 4), 0.1234);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_bins_sorted_ascending() {
        let dist = ScoreDistribution::new([8.0, 3.0, 8.0, 5.0], Bucketing::Exact);
        let scores = dist.bins.iter().map(|b| b.score).collect::<Vec<_>>();
        assert_eq!(scores, vec![3.0, 5.0, 8.0]);
        assert_eq!(dist.bins[2].count, 2);
        assert_eq!(dist.bins[2].percentage, 50.0);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_fractional_scores_stay_separate_without_rounding() {
        let dist = ScoreDistribution::new([2.5, 2.4], Bucketing::Exact);
        assert_eq!(dist.bins.len(), 2);
    }

    #[test]
    fn test_rounded_bins_merge() {
        let dist = ScoreDistribution::new([2.5, 3.4, 2.4], Bucketing::Rounded);
        assert_eq!(dist.bins.len(), 2);
        assert_eq!(dist.bins[0].score, 2.0);
        assert_eq!(dist.bins[1].score, 3.0);
        assert_eq!(dist.bins[1].count, 2);
    }

    #[test]
    fn test_percentage_is_relative_to_valid_values() {
        let dist = ScoreDistribution::new([Some(1.0), None, None, Some(2.0)], Bucketing::Exact);
        assert_eq!(dist.bins[0].percentage, 50.0);
        assert_eq!(dist.bins[1].percentage, 50.0);
    }

    #[test]
    fn test_empty() {
        let dist = ScoreDistribution::new(Vec::<f64>::new(), Bucketing::Exact);
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
    }
}
