//! All analyses of one (filtered) response set bundled together.

use serde::Serialize;
use survey_data::SurveyResponse;
use survey_stats::distribution::ScoreDistribution;

use crate::{
    clustering::{self, ClusterProfile},
    composite::{self, CompositeIndices},
    cross::{
        self, AiExperienceSdlc, ComplianceProductivity, CorrelationMatrix, ExperienceProductivity,
        InteractionCorrection, QualityCorrection, ToolCountProductivity, ToolOverlapMatrix,
        VariableImportance,
    },
    insights::ExecutiveSummary,
    primary::{
        self, CategoryShare, ChallengeRank, ComplianceStats, KeyMetrics, PhaseAverage,
        PhaseBoxplot, ToolAdoption,
    },
};

/// Every aggregate computed for a response set.
///
/// Each section is `None` when the response set is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReport {
    pub key_metrics: Option<KeyMetrics>,
    pub tool_adoption: Option<Vec<ToolAdoption>>,
    pub experience: Option<Vec<CategoryShare>>,
    pub roles: Option<Vec<CategoryShare>>,
    pub industries: Option<Vec<CategoryShare>>,
    pub industry_highlights: Option<Vec<CategoryShare>>,
    pub organization_types: Option<Vec<CategoryShare>>,
    pub ai_experience: Option<Vec<CategoryShare>>,
    pub sdlc_phases: Option<Vec<PhaseAverage>>,
    pub sdlc_boxplots: Option<Vec<PhaseBoxplot>>,
    pub quality_strategies: Option<Vec<CategoryShare>>,
    pub challenges: Option<Vec<ChallengeRank>>,
    pub challenge_highlights: Option<Vec<ChallengeRank>>,
    pub interaction_patterns: Option<Vec<CategoryShare>>,
    pub correction_frequency: Option<Vec<CategoryShare>>,
    pub compliance: Option<ComplianceStats>,
    pub productivity: Option<ScoreDistribution>,
    pub transformation: Option<ScoreDistribution>,
    pub experience_vs_productivity: Option<Vec<ExperienceProductivity>>,
    pub interaction_vs_correction: Option<Vec<InteractionCorrection>>,
    pub compliance_vs_productivity: Option<Vec<ComplianceProductivity>>,
    pub tool_overlap: Option<ToolOverlapMatrix>,
    pub tool_count_vs_productivity: Option<Vec<ToolCountProductivity>>,
    pub ai_experience_vs_sdlc: Option<Vec<AiExperienceSdlc>>,
    pub quality_vs_correction: Option<Vec<QualityCorrection>>,
    pub composite_indices: Option<CompositeIndices>,
    pub correlation_matrix: Option<CorrelationMatrix>,
    pub clusters: Option<Vec<ClusterProfile>>,
    pub variable_importance: Option<Vec<VariableImportance>>,
    pub executive_summary: Option<ExecutiveSummary>,
}

impl SurveyReport {
    #[must_use]
    pub fn compute(responses: &[SurveyResponse]) -> Self {
        if responses.is_empty() {
            tracing::debug!("no responses, report left empty");
            return Self::default();
        }

        let correlation_matrix = cross::correlation_matrix(responses);
        let clusters = clustering::respondent_clusters(responses);
        let variable_importance = cross::variable_importance(responses);
        let executive_summary =
            ExecutiveSummary::new(&variable_importance, &clusters, &correlation_matrix);

        let report = Self {
            key_metrics: Some(primary::key_metrics(responses)),
            tool_adoption: Some(primary::tool_adoption_stats(responses)),
            experience: Some(primary::experience_distribution(responses)),
            roles: Some(primary::role_distribution(responses)),
            industries: Some(primary::industry_distribution(responses)),
            industry_highlights: Some(primary::industry_highlights(responses)),
            organization_types: Some(primary::organization_type_stats(responses)),
            ai_experience: Some(primary::ai_experience_levels(responses)),
            sdlc_phases: Some(primary::sdlc_phase_averages(responses)),
            sdlc_boxplots: Some(primary::sdlc_boxplots(responses)),
            quality_strategies: Some(primary::quality_strategy_stats(responses)),
            challenges: Some(primary::challenge_distribution(responses)),
            challenge_highlights: Some(primary::challenge_highlights(responses)),
            interaction_patterns: Some(primary::interaction_pattern_stats(responses)),
            correction_frequency: Some(primary::correction_frequency_stats(responses)),
            compliance: Some(primary::compliance_stats(responses)),
            productivity: Some(primary::productivity_distribution(responses)),
            transformation: Some(primary::transformation_distribution(responses)),
            experience_vs_productivity: Some(cross::experience_vs_productivity(responses)),
            interaction_vs_correction: Some(cross::interaction_vs_correction(responses)),
            compliance_vs_productivity: Some(cross::compliance_vs_productivity(responses)),
            tool_overlap: Some(cross::tool_overlap_matrix(responses)),
            tool_count_vs_productivity: Some(cross::tool_count_vs_productivity(responses)),
            ai_experience_vs_sdlc: Some(cross::ai_experience_vs_sdlc(responses)),
            quality_vs_correction: Some(cross::quality_vs_correction(responses)),
            composite_indices: Some(composite::composite_indices(responses)),
            correlation_matrix: Some(correlation_matrix),
            clusters: Some(clusters),
            variable_importance: Some(variable_importance),
            executive_summary: Some(executive_summary),
        };
        tracing::debug!(responses = responses.len(), "report computed");
        report
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_metrics.is_none()
    }
}
