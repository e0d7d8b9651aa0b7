//! Aggregate analyses over survey responses.
//!
//! Every analysis takes the (possibly filtered) response slice and returns a
//! serializable value. Most of them only look at completed responses.
//!
//! # Modules
//!
//! - [`primary`]: Single-question distributions and headline metrics
//! - [`cross`]: Cross tabulations, tool overlap and correlations
//! - [`composite`]: Per-respondent composite indices
//! - [`clustering`]: Rule-based respondent segments
//! - [`insights`]: Executive summary
//! - [`report`]: Everything above in one [`SurveyReport`]
//!
//! ```
//! use survey_analysis::SurveyReport;
//! use survey_data::{ColumnMap, SurveyDataset};
//!
//! let csv = "#;Status\n1;Completed\n2;Incomplete\n";
//! let dataset = SurveyDataset::from_csv(csv, &ColumnMap::default()).unwrap();
//! let report = SurveyReport::compute(&dataset.responses);
//!
//! let metrics = report.key_metrics.unwrap();
//! assert_eq!(metrics.completed_responses, 1);
//! assert_eq!(metrics.completion_rate, 50.0);
//! ```

pub use self::{
    clustering::{ClusterProfile, Segment},
    insights::ExecutiveSummary,
    report::SurveyReport,
};

pub mod clustering;
pub mod composite;
pub mod cross;
pub mod insights;
pub mod primary;
pub mod report;

mod group;
#[cfg(test)]
mod test_util;
