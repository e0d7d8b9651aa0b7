//! Single-dimension aggregates.
//!
//! Every function here restricts itself to completed responses, except
//! [`key_metrics`] which also reports the overall completion rate. Category
//! tables are sorted by descending count; equal counts keep the order in
//! which the categories first appear in the input.

use serde::Serialize;
use survey_data::{Compliance, QualityStrategy, SdlcPhase, SurveyResponse, Tool};
use survey_stats::{
    boxplot::BoxplotStats,
    descriptive::{self, count_by, percentage},
    distribution::{Bucketing, ScoreDistribution},
};

use crate::group::{group_by_key, truncate_label};

/// Number of roles listed by [`role_distribution`].
pub const ROLE_LIMIT: usize = 10;
/// Number of industries listed by [`industry_highlights`].
pub const INDUSTRY_HIGHLIGHT_LIMIT: usize = 8;
/// Number of challenges listed by [`challenge_highlights`].
pub const CHALLENGE_HIGHLIGHT_LIMIT: usize = 10;

const INDUSTRY_LABEL_MAX: usize = 30;
const CHALLENGE_LABEL_MAX: usize = 50;

/// Order in which tool adoption is reported.
const ADOPTION_ORDER: [Tool; 9] = [
    Tool::GithubCopilot,
    Tool::ClaudeCode,
    Tool::Cursor,
    Tool::Windsurf,
    Tool::Codex,
    Tool::Gemini,
    Tool::Devin,
    Tool::Lovable,
    Tool::AmazonQ,
];

/// A count with its share of a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountShare {
    pub count: usize,
    pub percentage: f64,
}

impl CountShare {
    #[must_use]
    pub fn new(count: usize, total: usize) -> Self {
        Self {
            count,
            percentage: percentage(count, total),
        }
    }
}

/// One row of a category frequency table.
///
/// `id` is the verbatim answer; `label` is the text to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

impl CategoryShare {
    fn new(id: String, count: usize, total: usize) -> Self {
        Self {
            label: id.clone(),
            id,
            count,
            percentage: percentage(count, total),
        }
    }
}

/// Frequency table of a free-text field over completed responses, sorted by
/// descending count.
fn category_table<F>(responses: &[SurveyResponse], field: F) -> Vec<CategoryShare>
where
    F: Fn(&SurveyResponse) -> &str,
{
    let completed = survey_data::completed(responses);
    let total = completed.len();
    let mut table = count_by(completed.iter().map(|r| field(r)), |v| *v)
        .into_iter()
        .map(|(value, count)| CategoryShare::new(value, count, total))
        .collect::<Vec<_>>();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolAdoption {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// How many completed respondents have tried each tool.
#[must_use]
pub fn tool_adoption_stats(responses: &[SurveyResponse]) -> Vec<ToolAdoption> {
    let completed = survey_data::completed(responses);
    ADOPTION_ORDER
        .into_iter()
        .map(|tool| {
            let share = CountShare::new(
                completed.iter().filter(|r| r.tools.get(tool)).count(),
                completed.len(),
            );
            ToolAdoption {
                id: tool.id(),
                label: tool.name(),
                count: share.count,
                percentage: share.percentage,
            }
        })
        .collect()
}

#[must_use]
pub fn experience_distribution(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    category_table(responses, |r| r.experience.as_str())
}

/// The [`ROLE_LIMIT`] most common roles.
#[must_use]
pub fn role_distribution(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    let mut table = category_table(responses, |r| r.role.as_str());
    table.truncate(ROLE_LIMIT);
    table
}

#[must_use]
pub fn industry_distribution(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    category_table(responses, |r| r.industry.as_str())
}

/// The [`INDUSTRY_HIGHLIGHT_LIMIT`] most common industries with labels
/// shortened for compact display.
#[must_use]
pub fn industry_highlights(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    industry_distribution(responses)
        .into_iter()
        .take(INDUSTRY_HIGHLIGHT_LIMIT)
        .map(|mut share| {
            share.label = truncate_label(&share.id, INDUSTRY_LABEL_MAX, INDUSTRY_LABEL_MAX - 3);
            share
        })
        .collect()
}

#[must_use]
pub fn organization_type_stats(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    category_table(responses, |r| r.organization_type.as_str())
}

#[must_use]
pub fn ai_experience_levels(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    category_table(responses, |r| r.ai_experience.as_str())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseAverage {
    pub phase: &'static str,
    /// Mean rating.
    pub value: f64,
    pub median: f64,
    pub std_dev: f64,
    /// Number of respondents who rated the phase.
    pub n: usize,
}

/// Rating summary of every SDLC phase, in phase order.
#[must_use]
pub fn sdlc_phase_averages(responses: &[SurveyResponse]) -> Vec<PhaseAverage> {
    let completed = survey_data::completed(responses);
    SdlcPhase::ALL
        .into_iter()
        .map(|phase| {
            let ratings = completed.iter().map(|r| r.sdlc_phases.get(phase));
            match descriptive::DescriptiveStats::new(ratings) {
                Some(stats) => PhaseAverage {
                    phase: phase.name(),
                    value: stats.mean,
                    median: stats.median,
                    std_dev: stats.std_dev,
                    n: stats.n,
                },
                None => PhaseAverage {
                    phase: phase.name(),
                    value: 0.0,
                    median: 0.0,
                    std_dev: 0.0,
                    n: 0,
                },
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseBoxplot {
    pub label: &'static str,
    #[serde(flatten)]
    pub stats: BoxplotStats,
}

/// Boxplot of every SDLC phase that has at least one rating.
#[must_use]
pub fn sdlc_boxplots(responses: &[SurveyResponse]) -> Vec<PhaseBoxplot> {
    let completed = survey_data::completed(responses);
    SdlcPhase::ALL
        .into_iter()
        .filter_map(|phase| {
            let stats = BoxplotStats::new(completed.iter().map(|r| r.sdlc_phases.get(phase)))?;
            Some(PhaseBoxplot {
                label: phase.short_name(),
                stats,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    /// All responses, completed or not.
    pub total_responses: usize,
    pub completed_responses: usize,
    pub completion_rate: f64,
    #[serde(rename = "activeAIUsers")]
    pub active_ai_users: ActiveAiUsers,
    pub avg_transformation_belief: ScaleSummary,
    pub avg_productivity_change: ScaleSummary,
    pub compliance_environment: CountShare,
    pub enterprise_users: CountShare,
}

/// Respondents who already use AI in their work.
///
/// A single answer may match both phrases and is then counted twice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveAiUsers {
    pub coding_only: usize,
    pub tech_tasks: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Summary of a 1–10 scale question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSummary {
    /// Mean answer.
    pub value: f64,
    pub median: f64,
    pub std_dev: f64,
    pub out_of: u8,
}

impl ScaleSummary {
    fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let stats = descriptive::DescriptiveStats::new(values);
        Self {
            value: stats.map_or(0.0, |s| s.mean),
            median: stats.map_or(0.0, |s| s.median),
            std_dev: stats.map_or(0.0, |s| s.std_dev),
            out_of: 10,
        }
    }
}

/// Headline numbers of the survey.
#[must_use]
pub fn key_metrics(responses: &[SurveyResponse]) -> KeyMetrics {
    let completed = survey_data::completed(responses);
    let completed_count = completed.len();
    let count_where = |pred: &dyn Fn(&SurveyResponse) -> bool| {
        completed.iter().filter(|r| pred(r)).count()
    };

    let coding_only = count_where(&|r| r.ai_experience.contains("actively use"));
    let tech_tasks = count_where(&|r| r.ai_experience.contains("technical tasks"));
    let active_total = coding_only + tech_tasks;

    KeyMetrics {
        total_responses: responses.len(),
        completed_responses: completed_count,
        completion_rate: percentage(completed_count, responses.len()),
        active_ai_users: ActiveAiUsers {
            coding_only,
            tech_tasks,
            total: active_total,
            percentage: percentage(active_total, completed_count),
        },
        avg_transformation_belief: ScaleSummary::new(
            completed.iter().map(|r| r.transformation_belief),
        ),
        avg_productivity_change: ScaleSummary::new(completed.iter().map(|r| r.productivity_change)),
        compliance_environment: CountShare::new(
            count_where(&|r| r.compliance == Compliance::Yes),
            completed_count,
        ),
        enterprise_users: CountShare::new(
            count_where(&|r| r.organization_type.contains("Large enterprise")),
            completed_count,
        ),
    }
}

/// Usage share of every quality strategy, most used first.
#[must_use]
pub fn quality_strategy_stats(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    let completed = survey_data::completed(responses);
    let mut table = QualityStrategy::ALL
        .into_iter()
        .map(|strategy| CategoryShare {
            id: strategy.id().to_owned(),
            label: strategy.name().to_owned(),
            count: completed
                .iter()
                .filter(|r| r.quality_strategies.get(strategy))
                .count(),
            percentage: 0.0,
        })
        .collect::<Vec<_>>();
    for share in &mut table {
        share.percentage = percentage(share.count, completed.len());
    }
    table.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    table
}

/// Aggregated ranking of one challenge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRank {
    pub id: String,
    /// `full_label`, shortened for display.
    pub label: String,
    pub full_label: String,
    /// Respondents who ranked the challenge first or second.
    pub count: usize,
    /// `count` relative to respondents who named any challenge.
    pub percentage: f64,
    /// Mean weight per mention.
    pub avg_score: f64,
    /// Sum of all weights.
    pub weighted_score: usize,
}

/// Ranks challenges by weighted score.
///
/// In a list of `L` challenges the one at position `i` (zero-based) scores
/// `L - i`, so a respondent's first choice always carries the most weight.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn challenge_distribution(responses: &[SurveyResponse]) -> Vec<ChallengeRank> {
    struct Tally {
        total_score: usize,
        top2_count: usize,
        mentions: usize,
    }

    let completed = survey_data::completed(responses);
    let mentions = completed.iter().flat_map(|r| {
        let ranks = r.challenges.len();
        r.challenges
            .iter()
            .enumerate()
            .map(move |(index, challenge)| (challenge.trim(), ranks - index, index < 2))
            .filter(|(challenge, _, _)| !challenge.is_empty())
    });
    let tallies = group_by_key(mentions.map(|(challenge, weight, top2)| (challenge, (weight, top2))))
        .into_iter()
        .map(|(challenge, entries)| {
            let tally = Tally {
                total_score: entries.iter().map(|(weight, _)| weight).sum(),
                top2_count: entries.iter().filter(|(_, top2)| *top2).count(),
                mentions: entries.len(),
            };
            (challenge, tally)
        })
        .collect::<Vec<_>>();

    let respondents = completed.iter().filter(|r| !r.challenges.is_empty()).count();
    let mut ranking = tallies
        .into_iter()
        .map(|(challenge, tally)| ChallengeRank {
            id: challenge.to_owned(),
            label: truncate_label(challenge, CHALLENGE_LABEL_MAX, CHALLENGE_LABEL_MAX - 3),
            full_label: challenge.to_owned(),
            count: tally.top2_count,
            percentage: percentage(tally.top2_count, respondents),
            avg_score: tally.total_score as f64 / tally.mentions as f64,
            weighted_score: tally.total_score,
        })
        .collect::<Vec<_>>();
    ranking.sort_by(|a, b| b.weighted_score.cmp(&a.weighted_score));
    ranking
}

/// The [`CHALLENGE_HIGHLIGHT_LIMIT`] highest ranked challenges.
#[must_use]
pub fn challenge_highlights(responses: &[SurveyResponse]) -> Vec<ChallengeRank> {
    let mut ranking = challenge_distribution(responses);
    ranking.truncate(CHALLENGE_HIGHLIGHT_LIMIT);
    ranking
}

/// Display form of an interaction pattern: the text before the first en-dash.
///
/// ```
/// # use survey_analysis::primary::interaction_label;
/// assert_eq!(interaction_label("Co-Pilot – I review every suggestion"), "Co-Pilot");
/// assert_eq!(interaction_label("Autonomous agent"), "Autonomous agent");
/// ```
#[must_use]
pub fn interaction_label(pattern: &str) -> &str {
    match pattern.split_once('–') {
        Some((head, _)) => head.trim(),
        None => pattern,
    }
}

#[must_use]
pub fn interaction_pattern_stats(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    category_table(responses, |r| r.interaction_pattern.as_str())
        .into_iter()
        .map(|mut share| {
            share.label = interaction_label(&share.id).to_owned();
            share
        })
        .collect()
}

#[must_use]
pub fn correction_frequency_stats(responses: &[SurveyResponse]) -> Vec<CategoryShare> {
    category_table(responses, |r| r.correction_frequency.as_str())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStats {
    pub compliance: ComplianceBreakdown,
    /// Distribution of the 1–5 influence rating among respondents who gave one.
    pub regulatory_influence: ScoreDistribution,
    pub avg_regulatory_influence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceBreakdown {
    pub yes: CountShare,
    pub no: CountShare,
    pub not_sure: CountShare,
}

#[must_use]
pub fn compliance_stats(responses: &[SurveyResponse]) -> ComplianceStats {
    let completed = survey_data::completed(responses);
    let share = |answer: Compliance| {
        CountShare::new(
            completed.iter().filter(|r| r.compliance == answer).count(),
            completed.len(),
        )
    };
    let influence = || completed.iter().map(|r| r.regulatory_influence);

    ComplianceStats {
        compliance: ComplianceBreakdown {
            yes: share(Compliance::Yes),
            no: share(Compliance::No),
            not_sure: share(Compliance::NotSure),
        },
        regulatory_influence: ScoreDistribution::new(influence(), Bucketing::Exact),
        avg_regulatory_influence: descriptive::mean(influence()),
    }
}

/// Distribution of the self-reported productivity change.
#[must_use]
pub fn productivity_distribution(responses: &[SurveyResponse]) -> ScoreDistribution {
    let completed = survey_data::completed(responses);
    ScoreDistribution::new(
        completed.iter().map(|r| r.productivity_change),
        Bucketing::Exact,
    )
}

/// Distribution of the agreement with the transformation statement.
#[must_use]
pub fn transformation_distribution(responses: &[SurveyResponse]) -> ScoreDistribution {
    let completed = survey_data::completed(responses);
    ScoreDistribution::new(
        completed.iter().map(|r| r.transformation_belief),
        Bucketing::Exact,
    )
}
