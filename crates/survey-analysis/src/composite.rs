//! Per-respondent composite indices and their summaries.

use serde::Serialize;
use survey_data::{Compliance, SurveyResponse};
use survey_stats::{
    descriptive,
    distribution::{Bucketing, ScoreDistribution},
};

/// Number of tools the respondent has tried (0–9).
#[must_use]
pub fn adoption_index(response: &SurveyResponse) -> usize {
    response.tools.count()
}

/// Number of quality strategies the respondent uses (0–7).
#[must_use]
pub fn quality_coverage(response: &SurveyResponse) -> usize {
    response.quality_strategies.count()
}

/// Mean of the rated SDLC phases, `None` if no phase was rated.
#[must_use]
pub fn sdlc_maturity(response: &SurveyResponse) -> Option<f64> {
    let stats = descriptive::DescriptiveStats::new(response.sdlc_phases.values())?;
    Some(stats.mean)
}

/// Confidence attributed to a compliance answer, 0–1.
#[must_use]
pub fn compliance_score(compliance: Compliance) -> f64 {
    match compliance {
        Compliance::Yes => 1.0,
        Compliance::NotSure => 0.5,
        Compliance::No => 0.0,
    }
}

/// `belief * 0.4 + productivity * 0.4 + compliance * 10 * 0.2`.
///
/// `None` unless both belief and productivity are present.
#[must_use]
pub fn transformation_readiness(response: &SurveyResponse) -> Option<f64> {
    let belief = response.transformation_belief?;
    let productivity = response.productivity_change?;
    Some(belief * 0.4 + productivity * 0.4 + compliance_score(response.compliance) * 10.0 * 0.2)
}

/// Central tendency and distribution of one composite index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSummary {
    pub mean: f64,
    pub median: f64,
    pub distribution: ScoreDistribution,
}

impl IndexSummary {
    fn new(values: &[f64], bucketing: Bucketing) -> Self {
        Self {
            mean: descriptive::mean(values.iter().copied()),
            median: descriptive::median(values.iter().copied()),
            distribution: ScoreDistribution::new(values.iter().copied(), bucketing),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeIndices {
    pub adoption_index: IndexSummary,
    pub quality_coverage: IndexSummary,
    /// Distribution bucketed to whole points.
    pub sdlc_maturity: IndexSummary,
    /// Distribution bucketed to whole points.
    pub transformation_readiness: IndexSummary,
}

/// Summarizes all four composite indices over completed responses.
///
/// Respondents without an SDLC maturity or readiness value are left out of
/// that index only.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn composite_indices(responses: &[SurveyResponse]) -> CompositeIndices {
    let completed = survey_data::completed(responses);

    let adoption = completed
        .iter()
        .map(|r| adoption_index(r) as f64)
        .collect::<Vec<_>>();
    let quality = completed
        .iter()
        .map(|r| quality_coverage(r) as f64)
        .collect::<Vec<_>>();
    let maturity = completed
        .iter()
        .filter_map(|r| sdlc_maturity(r))
        .collect::<Vec<_>>();
    let readiness = completed
        .iter()
        .filter_map(|r| transformation_readiness(r))
        .collect::<Vec<_>>();

    CompositeIndices {
        adoption_index: IndexSummary::new(&adoption, Bucketing::Exact),
        quality_coverage: IndexSummary::new(&quality, Bucketing::Exact),
        sdlc_maturity: IndexSummary::new(&maturity, Bucketing::Rounded),
        transformation_readiness: IndexSummary::new(&readiness, Bucketing::Rounded),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use survey_data::{SdlcPhaseRatings, Tool, ToolFlags};

    use super::*;
    use crate::test_util::respondent;

    #[test]
    fn test_sdlc_maturity_ignores_missing_phases() {
        let mut r = respondent();
        assert_eq!(sdlc_maturity(&r), None);

        r.sdlc_phases = SdlcPhaseRatings {
            phase1: Some(4.0),
            phase4: Some(2.0),
            ..SdlcPhaseRatings::default()
        };
        assert_eq!(sdlc_maturity(&r), Some(3.0));
    }

    #[test]
    fn test_transformation_readiness() {
        let mut r = respondent();
        r.transformation_belief = Some(8.0);
        assert_eq!(transformation_readiness(&r), None);

        r.productivity_change = Some(6.0);
        r.compliance = Compliance::Yes;
        let value = transformation_readiness(&r).unwrap();
        assert!((value - 7.6).abs() < 1e-9);

        r.compliance = Compliance::NotSure;
        let value = transformation_readiness(&r).unwrap();
        assert!((value - 6.6).abs() < 1e-9);

        r.compliance = Compliance::No;
        let value = transformation_readiness(&r).unwrap();
        assert!((value - 5.6).abs() < 1e-9);
    }

    #[test]
    fn test_composite_indices_buckets() {
        let mut a = respondent();
        a.tools = ToolFlags::from_fn(|t| t == Tool::Cursor);
        a.sdlc_phases.phase1 = Some(3.4);
        let mut b = respondent();
        b.tools = ToolFlags::from_fn(|_| true);
        b.sdlc_phases.phase1 = Some(3.5);
        let mut incomplete = respondent();
        incomplete.status = survey_data::ResponseStatus::Incomplete;
        incomplete.tools = ToolFlags::from_fn(|_| true);

        let indices = composite_indices(&[a, b, incomplete]);

        assert_eq!(indices.adoption_index.mean, 5.0);
        assert_eq!(indices.adoption_index.distribution.bins.len(), 2);
        assert_eq!(indices.adoption_index.distribution.bins[1].score, 9.0);
        assert_eq!(indices.quality_coverage.mean, 0.0);

        let maturity = &indices.sdlc_maturity.distribution.bins;
        assert_eq!(maturity.len(), 2);
        assert_eq!(maturity[0].score, 3.0);
        assert_eq!(maturity[1].score, 4.0);
        assert!(indices.transformation_readiness.distribution.is_empty());
        assert_eq!(indices.transformation_readiness.mean, 0.0);
    }
}
