//! Correlation and significance testing.
//!
//! The significance test is approximate: the t-statistic of a Pearson
//! correlation is treated as a standard-normal z-score and the tail
//! probability is taken from the Abramowitz–Stegun (7.1.26) approximation of
//! the error function. For small samples this overstates significance
//! compared to an exact t-distribution.

use crate::descriptive;

/// Significance threshold for p-values.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

// Abramowitz & Stegun 7.1.26
const ERF_A1: f64 = 0.254_829_592;
const ERF_A2: f64 = -0.284_496_736;
const ERF_A3: f64 = 1.421_413_741;
const ERF_A4: f64 = -1.453_152_027;
const ERF_A5: f64 = 1.061_405_429;
const ERF_P: f64 = 0.327_591_1;

/// Pearson correlation coefficient of paired samples.
///
/// Missing values must already have been dropped pairwise (see
/// [`complete_pairs`]). Returns `0.0` when there are no pairs or when either
/// variable has zero variance.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
///
/// # Examples
///
/// ```
/// # use survey_stats::inference::pearson;
/// let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
/// assert!((r + 1.0).abs() < 1e-12);
/// assert_eq!(pearson(&[1.0, 1.0], &[2.0, 3.0]), 0.0);
/// ```
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "paired samples must have equal length");
    if x.is_empty() {
        return 0.0;
    }

    let mean_x = descriptive::mean(x.iter().copied());
    let mean_y = descriptive::mean(y.iter().copied());
    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Splits possibly missing pairs into two aligned samples, keeping only pairs
/// where both sides are present.
///
/// ```
/// # use survey_stats::inference::complete_pairs;
/// let (x, y) = complete_pairs([(Some(1.0), Some(2.0)), (None, Some(3.0)), (Some(4.0), Some(5.0))]);
/// assert_eq!(x, vec![1.0, 4.0]);
/// assert_eq!(y, vec![2.0, 5.0]);
/// ```
pub fn complete_pairs<I>(pairs: I) -> (Vec<f64>, Vec<f64>)
where
    I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
{
    pairs
        .into_iter()
        .filter_map(|(x, y)| Some((x?, y?)))
        .unzip()
}

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// Maximum absolute error is about `1.5e-7`.
#[must_use]
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let abs_x = x.abs();
    let t = 1.0 / (1.0 + ERF_P * abs_x);
    let poly = ((((ERF_A5 * t + ERF_A4) * t + ERF_A3) * t + ERF_A2) * t + ERF_A1) * t;
    sign * (1.0 - poly * (-abs_x * abs_x).exp())
}

/// Approximate two-sided p-value of a Pearson correlation `r` over `n` pairs.
///
/// * `n <= 2` yields `1.0` (insufficient evidence).
/// * `|r| >= 1` yields `0.0`.
/// * Otherwise `t = |r| * sqrt((n - 2) / (1 - r²))` is treated as a z-score
///   and `1 - erf(t / √2)` is returned.
///
/// # Examples
///
/// ```
/// # use survey_stats::inference::p_value;
/// assert_eq!(p_value(0.5, 2), 1.0);
/// assert_eq!(p_value(-1.0, 10), 0.0);
/// assert!(p_value(0.99, 50) < 0.01);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn p_value(r: f64, n: usize) -> f64 {
    if n <= 2 {
        return 1.0;
    }
    let abs_r = r.abs();
    if abs_r >= 1.0 {
        return 0.0;
    }

    let t = abs_r * ((n as f64 - 2.0) / (1.0 - abs_r * abs_r)).sqrt();
    let z = t;
    1.0 - erf(z / std::f64::consts::SQRT_2)
}

/// Returns whether a p-value is below [`SIGNIFICANCE_LEVEL`].
#[must_use]
pub fn is_significant(p_value: f64) -> bool {
    p_value < SIGNIFICANCE_LEVEL
}

/// Confidence level of a [`confidence_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidenceLevel {
    #[default]
    Percent95,
    Percent99,
}

impl ConfidenceLevel {
    /// Two-sided critical z-value for this level.
    #[must_use]
    pub fn z(self) -> f64 {
        match self {
            ConfidenceLevel::Percent95 => 1.96,
            ConfidenceLevel::Percent99 => 2.576,
        }
    }
}

/// Normal-approximation confidence interval for the mean of the valid values.
///
/// Returns `(mean - margin, mean + margin)` with
/// `margin = z * std_dev / sqrt(n)`, or `(0.0, 0.0)` for empty input.
///
/// ```
/// # use survey_stats::inference::{confidence_interval, ConfidenceLevel};
/// let (lower, upper) = confidence_interval([Some(4.0), Some(6.0)], ConfidenceLevel::Percent95);
/// assert!(lower < 5.0 && upper > 5.0);
/// assert_eq!(confidence_interval(Vec::<f64>::new(), ConfidenceLevel::Percent99), (0.0, 0.0));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn confidence_interval<I>(values: I, level: ConfidenceLevel) -> (f64, f64)
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    let Some(stats) = descriptive::DescriptiveStats::new(values) else {
        return (0.0, 0.0);
    };
    let margin = level.z() * (stats.std_dev / (stats.n as f64).sqrt());
    (stats.mean - margin, stats.mean + margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_self_correlation_is_one() {
        let x = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_constant_inputs_yield_zero() {
        assert_eq!(pearson(&[2.0, 2.0, 2.0], &[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(pearson(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_pearson_empty_is_zero() {
        assert_eq!(pearson(&[], &[]), 0.0);
    }

    #[test]
    fn test_pearson_known_value() {
        // Σdxdy = 8, Σdx² = 10, Σdy² = 10 → r = 0.8
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert!((pearson(&x, &y) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_erf_reference_points() {
        assert!(erf(0.0).abs() < 1e-8);
        assert!((erf(1.0) - 0.842_700_79).abs() < 2e-7);
        assert!((erf(-1.0) + 0.842_700_79).abs() < 2e-7);
        assert!((erf(3.0) - 0.999_977_91).abs() < 2e-7);
    }

    #[test]
    fn test_p_value_no_correlation_is_about_one() {
        assert!((p_value(0.0, 100) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_p_value_strong_correlation_is_small() {
        assert!(p_value(0.99, 50) < 0.01);
    }

    #[test]
    fn test_p_value_guards() {
        assert_eq!(p_value(0.9, 0), 1.0);
        assert_eq!(p_value(0.9, 2), 1.0);
        assert_eq!(p_value(1.0, 10), 0.0);
        assert_eq!(p_value(-1.0, 10), 0.0);
    }

    #[test]
    fn test_p_value_is_symmetric_in_sign() {
        assert_eq!(p_value(0.3, 40), p_value(-0.3, 40));
    }

    #[test]
    fn test_p_value_uses_normal_approximation() {
        // r = 0.6, n = 6: t = 0.6 * sqrt(4 / 0.64) = 1.5
        // 1 - erf(1.5 / √2) ≈ 0.1336 (an exact t-test would give ≈ 0.208)
        let p = p_value(0.6, 6);
        assert!((p - 0.133_614).abs() < 1e-5, "p = {p}");
    }

    #[test]
    fn test_complete_pairs_drops_partial_pairs() {
        let (x, y) = complete_pairs([(Some(1.0), None), (None, None), (Some(2.0), Some(3.0))]);
        assert_eq!(x, vec![2.0]);
        assert_eq!(y, vec![3.0]);
    }

    #[test]
    fn test_confidence_interval_levels() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // mean 5, std_dev 2, n 8
        let (lo95, hi95) = confidence_interval(values, ConfidenceLevel::Percent95);
        let margin95 = 1.96 * 2.0 / 8f64.sqrt();
        assert!((lo95 - (5.0 - margin95)).abs() < 1e-12);
        assert!((hi95 - (5.0 + margin95)).abs() < 1e-12);

        let (lo99, hi99) = confidence_interval(values, ConfidenceLevel::Percent99);
        assert!(lo99 < lo95 && hi99 > hi95);
    }

    #[test]
    fn test_confidence_interval_empty() {
        assert_eq!(
            confidence_interval([None::<f64>], ConfidenceLevel::default()),
            (0.0, 0.0)
        );
    }
}
