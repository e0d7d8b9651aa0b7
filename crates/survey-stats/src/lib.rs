//! Statistical primitives for survey analysis.
//!
//! This crate provides the numeric building blocks used by the survey
//! analysis engine:
//!
//! - **Descriptive statistics**: mean, median, population standard deviation,
//!   percentages and frequency tables
//! - **Percentiles**: linear-interpolation (R-7) percentiles of sorted data
//! - **Boxplot statistics**: quartiles, IQR, Tukey fences and outliers
//! - **Score distributions**: count/percentage per distinct score
//! - **Inference**: Pearson correlation, approximate p-values and confidence
//!   intervals
//!
//! Every function accepts empty input. Empty input yields `0` (or `None` for
//! structures that have no meaningful empty value) instead of `NaN`.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation
//! - [`boxplot`]: Boxplot statistics with outlier detection
//! - [`distribution`]: Frequency distributions of discrete scores
//! - [`inference`]: Correlation and significance testing
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use survey_stats::descriptive::{self, DescriptiveStats};
//!
//! let values = [Some(1.0), None, Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.n, 5);
//!
//! assert_eq!(descriptive::mean(Vec::<f64>::new()), 0.0);
//! ```
//!
//! ## Computing boxplot statistics
//!
//! ```
//! use survey_stats::boxplot::BoxplotStats;
//!
//! let stats = BoxplotStats::new([1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
//! assert_eq!(stats.outliers, vec![100.0]);
//! ```
//!
//! ## Testing a correlation
//!
//! ```
//! use survey_stats::inference;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let r = inference::pearson(&x, &x);
//! assert!((r - 1.0).abs() < 1e-12);
//! assert_eq!(inference::p_value(r, x.len()), 0.0);
//! ```

pub mod boxplot;
pub mod descriptive;
pub mod distribution;
pub mod inference;
pub mod percentiles;
