//! Executive summary derived from the other analyses.

use serde::Serialize;

use crate::{
    clustering::{ClusterProfile, Segment},
    cross::{CorrelationCell, CorrelationMatrix, VariableImportance},
};

/// Factor most strongly correlated with productivity change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryDriver {
    pub label: &'static str,
    /// Relative importance, 0–100.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub primary_driver: Option<PrimaryDriver>,
    /// Share of completed respondents in the AI Champions segment.
    pub champion_share: Option<f64>,
    pub strongest_correlation: Option<CorrelationCell>,
}

impl ExecutiveSummary {
    /// Builds the summary from already computed analyses.
    ///
    /// `importance` is expected in ranking order, as returned by
    /// [`variable_importance`](crate::cross::variable_importance).
    #[must_use]
    pub fn new(
        importance: &[VariableImportance],
        clusters: &[ClusterProfile],
        correlations: &CorrelationMatrix,
    ) -> Self {
        Self {
            primary_driver: importance.first().map(|top| PrimaryDriver {
                label: top.label,
                percentage: top.percentage,
            }),
            champion_share: clusters
                .iter()
                .find(|c| c.id == Segment::Innovators.id())
                .map(|c| c.percentage),
            strongest_correlation: correlations.strongest().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use survey_data::SurveyResponse;

    use super::*;
    use crate::{clustering::respondent_clusters, cross, test_util::respondent};

    fn summarize(responses: &[SurveyResponse]) -> ExecutiveSummary {
        ExecutiveSummary::new(
            &cross::variable_importance(responses),
            &respondent_clusters(responses),
            &cross::correlation_matrix(responses),
        )
    }

    #[test]
    fn test_empty_input_has_no_insights() {
        let summary = summarize(&[]);
        assert_eq!(summary.primary_driver, None);
        assert_eq!(summary.champion_share, None);
    }

    #[test]
    fn test_champion_share_and_driver() {
        let mut champion = respondent();
        champion.tools = survey_data::ToolFlags::from_fn(|_| true);
        champion.productivity_change = Some(9.0);
        champion.transformation_belief = Some(9.0);
        let mut skeptic = respondent();
        skeptic.productivity_change = Some(2.0);
        skeptic.transformation_belief = Some(1.0);

        let summary = summarize(&[champion, skeptic]);

        assert_eq!(summary.champion_share, Some(50.0));
        let driver = summary.primary_driver.unwrap();
        assert_eq!(driver.percentage, 100.0);
    }

    #[test]
    fn test_strongest_correlation_skips_diagonal() {
        let cell = |var1, var2, correlation| CorrelationCell {
            var1,
            var2,
            correlation,
            p_value: 0.0,
            is_significant: true,
        };
        let matrix = CorrelationMatrix {
            matrix: vec![
                cell("A", "A", 1.0),
                cell("A", "B", -0.6),
                cell("B", "A", 0.6),
                cell("B", "B", 1.0),
            ],
            labels: vec!["A", "B"],
        };

        let summary = ExecutiveSummary::new(&[], &[], &matrix);

        let strongest = summary.strongest_correlation.unwrap();
        assert_eq!((strongest.var1, strongest.var2), ("A", "B"));
        assert_eq!(strongest.correlation, -0.6);
    }
}
