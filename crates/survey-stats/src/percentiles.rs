/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between closest ranks (the "R-7"
/// method used by most spreadsheet software). For a dataset with `n` values
/// the fractional index is `(n - 1) * fraction`; the result interpolates
/// between the values at the floor and ceiling of that index.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `fraction` - The percentile to compute, as a fraction (`0.25` for Q1)
///
/// # Returns
///
/// The value at the specified percentile, or `None` if the input is empty.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use survey_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 0.5), Some(2.5));
/// assert_eq!(compute_percentile(&values, 0.25), Some(1.75));
/// assert_eq!(compute_percentile(&[], 0.5), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], fraction: f64) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let last = sorted_values.len().checked_sub(1)?;
    let idx = last as f64 * fraction;
    let base = idx.floor() as usize;
    let rest = idx - idx.floor();
    let lower = sorted_values[base.min(last)];
    match sorted_values.get(base + 1) {
        Some(upper) => Some(lower + rest * (upper - lower)),
        None => Some(lower),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        assert_eq!(compute_percentile(&[7.0], 0.0), Some(7.0));
        assert_eq!(compute_percentile(&[7.0], 0.5), Some(7.0));
        assert_eq!(compute_percentile(&[7.0], 1.0), Some(7.0));
    }

    #[test]
    fn test_interpolates_between_neighbors() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        // index = 5 * 0.25 = 1.25
        assert_eq!(compute_percentile(&values, 0.25), Some(2.25));
        // index = 5 * 0.5 = 2.5
        assert_eq!(compute_percentile(&values, 0.5), Some(3.5));
        // index = 5 * 0.75 = 3.75
        assert_eq!(compute_percentile(&values, 0.75), Some(4.75));
    }

    #[test]
    fn test_extremes() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(compute_percentile(&values, 0.0), Some(10.0));
        assert_eq!(compute_percentile(&values, 1.0), Some(30.0));
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_unsorted_input_panics() {
        let _ = compute_percentile(&[3.0, 1.0], 0.5);
    }
}
