use std::{collections::HashMap, fmt::Display};

use serde::Serialize;

/// Descriptive statistics summarizing a dataset.
///
/// Missing values (`None`) are dropped before any measure is computed, and
/// `n` reports the number of values that remained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStats {
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    ///
    /// For an even number of values this is the average of the two central
    /// values.
    pub median: f64,
    /// The population variance of the dataset (divided by `n`).
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
    /// The number of valid values.
    pub n: usize,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted, possibly missing values.
    ///
    /// This method drops missing values and sorts the remainder internally.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` or `Option<f64>` values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one valid value
    /// * `None` - if the dataset is empty or contains only missing values
    ///
    /// # Examples
    ///
    /// ```
    /// # use survey_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<f64>>,
    {
        // Moments are accumulated in input order, before sorting.
        let mut values = valid_values(values);
        let (mean, variance) = moments(&values)?;
        values.sort_by(f64::total_cmp);
        Some(Self::with_moments(&values, mean, variance))
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use survey_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (mean, variance) = moments(sorted_values)?;
        Some(Self::with_moments(sorted_values, mean, variance))
    }

    fn with_moments(sorted_values: &[f64], mean: f64, variance: f64) -> Self {
        let count = sorted_values.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };

        Self {
            min: sorted_values[0],
            max: sorted_values[count - 1],
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
            n: count,
        }
    }
}

/// Mean and population variance, `None` for an empty slice.
#[expect(clippy::cast_precision_loss)]
fn moments(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance))
}

/// Drops missing values, keeping the order of the remaining ones.
pub fn valid_values<I>(values: I) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    values.into_iter().filter_map(Into::into).collect()
}

/// Arithmetic mean of the valid values, `0.0` when there are none.
///
/// ```
/// # use survey_stats::descriptive::mean;
/// assert_eq!(mean([Some(2.0), None, Some(4.0)]), 3.0);
/// assert_eq!(mean([None::<f64>]), 0.0);
/// ```
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    DescriptiveStats::new(values).map_or(0.0, |s| s.mean)
}

/// Median of the valid values, `0.0` when there are none.
///
/// ```
/// # use survey_stats::descriptive::median;
/// assert_eq!(median([3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median([4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
#[must_use]
pub fn median<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    DescriptiveStats::new(values).map_or(0.0, |s| s.median)
}

/// Population standard deviation of the valid values, `0.0` when there are none.
#[must_use]
pub fn std_dev<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    DescriptiveStats::new(values).map_or(0.0, |s| s.std_dev)
}

/// `count / total * 100`, or `0.0` when `total` is zero.
///
/// ```
/// # use survey_stats::descriptive::percentage;
/// assert_eq!(percentage(5, 10), 50.0);
/// assert_eq!(percentage(0, 0), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Counts items by the string form of a key.
///
/// Entries are returned in order of first appearance so that a subsequent
/// stable sort breaks ties deterministically.
///
/// ```
/// # use survey_stats::descriptive::count_by;
/// let counts = count_by(["b", "a", "b"], |s| *s);
/// assert_eq!(counts, vec![("b".to_owned(), 2), ("a".to_owned(), 1)]);
/// ```
pub fn count_by<T, I, F, K>(items: I, mut key: F) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    K: Display,
{
    let mut index = HashMap::<String, usize>::new();
    let mut counts = Vec::<(String, usize)>::new();
    for item in items {
        let key = key(&item).to_string();
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_input_yields_zero() {
        let empty: [Option<f64>; 0] = [];
        assert_eq!(mean(empty), 0.0);
        assert_eq!(median(empty), 0.0);
        assert_eq!(std_dev(empty), 0.0);
        assert!(DescriptiveStats::new(empty).is_none());
    }

    #[test]
    fn test_only_missing_values_yields_zero() {
        let values = [None::<f64>, None];
        assert_eq!(mean(values), 0.0);
        assert_eq!(median(values), 0.0);
        assert_eq!(std_dev(values), 0.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median([5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median([5.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median([Some(8.0), None, Some(6.0)]), 7.0);
    }

    #[test]
    fn test_std_dev_is_population() {
        // Sample std dev of [1, 3] would be sqrt(2); population is 1.
        assert_eq!(std_dev([1.0, 3.0]), 1.0);
        assert_eq!(std_dev([4.0]), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(5, 10), 50.0);
        assert_eq!(percentage(10, 10), 100.0);
    }

    #[test]
    fn test_count_by_keeps_first_appearance_order() {
        let items = ["x", "y", "x", "z", "y", "x"];
        let counts = count_by(items, |s| *s);
        assert_eq!(
            counts,
            vec![
                ("x".to_owned(), 3),
                ("y".to_owned(), 2),
                ("z".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn test_count_by_uses_string_form() {
        let counts = count_by([1, 2, 1], |v| *v);
        assert_eq!(counts, vec![("1".to_owned(), 2), ("2".to_owned(), 1)]);
    }

    proptest! {
        #[test]
        fn test_median_is_order_invariant(mut values in prop::collection::vec(-1000.0f64..1000.0, 1..50)) {
            let original = median(values.clone());
            values.reverse();
            prop_assert_eq!(median(values.clone()), original);
            values.sort_by(f64::total_cmp);
            prop_assert_eq!(median(values), original);
        }

        #[test]
        fn test_mean_lies_within_range(values in prop::collection::vec(-1000.0f64..1000.0, 1..50)) {
            let stats = DescriptiveStats::new(values.clone()).unwrap();
            prop_assert!(stats.mean >= stats.min - 1e-9);
            prop_assert!(stats.mean <= stats.max + 1e-9);
            prop_assert_eq!(stats.n, values.len());
        }
    }
}
