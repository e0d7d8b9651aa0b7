use serde::Serialize;

use crate::{descriptive, percentiles::compute_percentile};

/// Multiplier applied to the IQR to obtain the Tukey fences.
pub const TUKEY_FENCE_FACTOR: f64 = 1.5;

/// Boxplot statistics for a numeric sample.
///
/// Quartiles are computed with linear interpolation (see
/// [`compute_percentile`]). Values strictly outside the Tukey fences
/// (`q1 - 1.5 * iqr`, `q3 + 1.5 * iqr`) are reported as outliers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxplotStats {
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Interquartile range (`q3 - q1`).
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Values strictly outside the fences, in ascending order.
    pub outliers: Vec<f64>,
    /// Number of valid values in the sample.
    pub n: usize,
}

impl BoxplotStats {
    /// Computes boxplot statistics from unsorted, possibly missing values.
    ///
    /// # Returns
    ///
    /// * `Some(BoxplotStats)` - if at least one valid value is present
    /// * `None` - if there is nothing to plot; callers omit the series
    ///
    /// # Examples
    ///
    /// ```
    /// # use survey_stats::boxplot::BoxplotStats;
    /// let stats = BoxplotStats::new([Some(3.0), None, Some(1.0), Some(2.0)]).unwrap();
    /// assert_eq!(stats.n, 3);
    /// assert_eq!(stats.median, 2.0);
    /// assert!(stats.outliers.is_empty());
    ///
    /// assert!(BoxplotStats::new([None::<f64>]).is_none());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<f64>>,
    {
        let mut sorted = descriptive::valid_values(values);
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes boxplot statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let q1 = compute_percentile(sorted_values, 0.25)?;
        let median = compute_percentile(sorted_values, 0.5)?;
        let q3 = compute_percentile(sorted_values, 0.75)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - TUKEY_FENCE_FACTOR * iqr;
        let upper_fence = q3 + TUKEY_FENCE_FACTOR * iqr;
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| v < lower_fence || v > upper_fence)
            .collect();

        Some(Self {
            min,
            max,
            q1,
            median,
            q3,
            iqr,
            lower_fence,
            upper_fence,
            outliers,
            n: sorted_values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_high_outlier() {
        let stats = BoxplotStats::new([1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();

        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 100.0);
        assert_eq!(stats.q1, 2.25);
        assert_eq!(stats.median, 3.5);
        assert_eq!(stats.q3, 4.75);
        assert_eq!(stats.iqr, 2.5);
        assert_eq!(stats.lower_fence, -1.5);
        assert_eq!(stats.upper_fence, 8.5);
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.n, 6);
    }

    #[test]
    fn test_sorts_input() {
        let stats = BoxplotStats::new([100.0, 5.0, 1.0, 4.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.q1, 2.25);
        assert_eq!(stats.outliers, vec![100.0]);
    }

    #[test]
    fn test_values_on_fence_are_not_outliers() {
        // q1 = 1, q3 = 1, iqr = 0: fences collapse onto the quartiles
        let stats = BoxplotStats::new([1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_empty_is_none() {
        assert!(BoxplotStats::new(Vec::<f64>::new()).is_none());
        assert!(BoxplotStats::new([None::<f64>, None]).is_none());
    }
}
