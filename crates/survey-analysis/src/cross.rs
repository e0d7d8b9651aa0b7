//! Two-dimensional aggregates and correlation analysis.
//!
//! All functions restrict themselves to completed responses. Matrices are
//! returned as flat lists of cells in row-major order together with the
//! axis labels.

use serde::Serialize;
use survey_data::{Compliance, EXPERIENCE_LEVELS, SdlcPhase, SurveyResponse, Tool};
use survey_stats::{
    descriptive::{self, count_by, percentage},
    distribution::round_to,
    inference::{complete_pairs, is_significant, p_value, pearson},
};
use tracing::debug;

use crate::{
    composite::{adoption_index, quality_coverage, sdlc_maturity},
    group::group_by_key,
    primary::interaction_label,
};

const UNKNOWN_EXPERIENCE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceProductivity {
    pub experience: String,
    pub avg_productivity: f64,
    pub median_productivity: f64,
    pub count: usize,
}

/// Productivity change per experience level.
///
/// Only respondents who rated their productivity are included. Levels follow
/// their natural order; levels outside the known set come first.
#[must_use]
pub fn experience_vs_productivity(responses: &[SurveyResponse]) -> Vec<ExperienceProductivity> {
    let rated = survey_data::completed(responses)
        .into_iter()
        .filter_map(|r| {
            let experience = if r.experience.is_empty() {
                UNKNOWN_EXPERIENCE
            } else {
                r.experience.as_str()
            };
            Some((experience, r.productivity_change?))
        });

    let mut groups = group_by_key(rated)
        .into_iter()
        .map(|(experience, values)| ExperienceProductivity {
            experience: experience.to_owned(),
            avg_productivity: descriptive::mean(values.iter().copied()),
            median_productivity: descriptive::median(values.iter().copied()),
            count: values.len(),
        })
        .collect::<Vec<_>>();
    groups.sort_by_key(|g| EXPERIENCE_LEVELS.iter().position(|&l| l == g.experience));
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyShare {
    pub frequency: String,
    pub count: usize,
    /// Share within the enclosing group.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionCorrection {
    /// Short interaction pattern label.
    pub pattern: String,
    /// Correction frequencies in order of first appearance.
    pub frequencies: Vec<FrequencyShare>,
    pub total: usize,
}

/// Correction frequency per interaction pattern, largest groups first.
///
/// Respondents who left either question blank are skipped.
#[must_use]
pub fn interaction_vs_correction(responses: &[SurveyResponse]) -> Vec<InteractionCorrection> {
    let answered = survey_data::completed(responses)
        .into_iter()
        .filter(|r| !r.interaction_pattern.is_empty() && !r.correction_frequency.is_empty())
        .map(|r| {
            (
                interaction_label(&r.interaction_pattern),
                r.correction_frequency.as_str(),
            )
        });

    let mut groups = group_by_key(answered)
        .into_iter()
        .map(|(pattern, frequencies)| {
            let total = frequencies.len();
            InteractionCorrection {
                pattern: pattern.to_owned(),
                frequencies: count_by(frequencies, |f| *f)
                    .into_iter()
                    .map(|(frequency, count)| FrequencyShare {
                        frequency,
                        count,
                        percentage: percentage(count, total),
                    })
                    .collect(),
                total,
            }
        })
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceProductivity {
    pub compliance: &'static str,
    pub avg_productivity: f64,
    pub median_productivity: f64,
    pub avg_transformation: f64,
    pub count: usize,
}

/// Productivity and transformation belief of regulated, unregulated and
/// unsure respondents, in that order.
///
/// Only respondents who rated their productivity are included. Empty groups
/// are kept with zero values.
#[must_use]
pub fn compliance_vs_productivity(responses: &[SurveyResponse]) -> Vec<ComplianceProductivity> {
    let rated = survey_data::completed(responses)
        .into_iter()
        .filter(|r| r.productivity_change.is_some())
        .collect::<Vec<_>>();

    [
        (Compliance::Yes, "Regulated"),
        (Compliance::No, "Not Regulated"),
        (Compliance::NotSure, "Unsure"),
    ]
    .into_iter()
    .map(|(answer, label)| {
        let group = rated
            .iter()
            .filter(|r| r.compliance == answer)
            .collect::<Vec<_>>();
        let productivity = || group.iter().map(|r| r.productivity_change);
        ComplianceProductivity {
            compliance: label,
            avg_productivity: descriptive::mean(productivity()),
            median_productivity: descriptive::median(productivity()),
            avg_transformation: descriptive::mean(group.iter().map(|r| r.transformation_belief)),
            count: group.len(),
        }
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOverlapCell {
    pub tool1: &'static str,
    pub tool2: &'static str,
    /// Respondents who tried both tools.
    pub count: usize,
    /// `count` relative to all completed respondents.
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolOverlapMatrix {
    pub matrix: Vec<ToolOverlapCell>,
    pub labels: Vec<&'static str>,
}

/// Co-occurrence of every pair of tools, including each tool with itself.
///
/// Without completed responses the matrix and its labels are empty.
#[must_use]
pub fn tool_overlap_matrix(responses: &[SurveyResponse]) -> ToolOverlapMatrix {
    let completed = survey_data::completed(responses);
    if completed.is_empty() {
        return ToolOverlapMatrix::default();
    }

    let matrix = Tool::ALL
        .into_iter()
        .flat_map(|row| Tool::ALL.into_iter().map(move |col| (row, col)))
        .map(|(row, col)| {
            let count = completed
                .iter()
                .filter(|r| r.tools.get(row) && r.tools.get(col))
                .count();
            ToolOverlapCell {
                tool1: row.short_name(),
                tool2: col.short_name(),
                count,
                percentage: percentage(count, completed.len()),
            }
        })
        .collect();

    ToolOverlapMatrix {
        matrix,
        labels: Tool::ALL.map(Tool::short_name).to_vec(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCountProductivity {
    pub tool_count: usize,
    pub avg_productivity: f64,
    pub median_productivity: f64,
    pub respondents: usize,
}

/// Productivity change by number of tools tried, in ascending tool count.
#[must_use]
pub fn tool_count_vs_productivity(responses: &[SurveyResponse]) -> Vec<ToolCountProductivity> {
    let rated = survey_data::completed(responses)
        .into_iter()
        .filter_map(|r| Some((adoption_index(r), r.productivity_change?)));

    let mut groups = group_by_key(rated)
        .into_iter()
        .map(|(tool_count, values)| ToolCountProductivity {
            tool_count,
            avg_productivity: descriptive::mean(values.iter().copied()),
            median_productivity: descriptive::median(values.iter().copied()),
            respondents: values.len(),
        })
        .collect::<Vec<_>>();
    groups.sort_by_key(|g| g.tool_count);
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationCell {
    pub var1: &'static str,
    pub var2: &'static str,
    /// Pearson r rounded to two decimals.
    pub correlation: f64,
    /// Rounded to four decimals.
    pub p_value: f64,
    /// Decided on the unrounded p-value.
    pub is_significant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub matrix: Vec<CorrelationCell>,
    pub labels: Vec<&'static str>,
}

impl CorrelationMatrix {
    /// Off-diagonal cell with the largest absolute correlation. The first
    /// such cell wins ties.
    #[must_use]
    pub fn strongest(&self) -> Option<&CorrelationCell> {
        self.matrix
            .iter()
            .filter(|cell| cell.var1 != cell.var2)
            .fold(None, |best: Option<&CorrelationCell>, cell| match best {
                Some(b) if b.correlation.abs() >= cell.correlation.abs() => Some(b),
                _ => Some(cell),
            })
    }
}

/// Pearson correlation between every pair of the numeric survey variables.
///
/// Each cell uses the respondents for whom both variables are present.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn correlation_matrix(responses: &[SurveyResponse]) -> CorrelationMatrix {
    let completed = survey_data::completed(responses);
    let variables: [(&'static str, Vec<Option<f64>>); 6] = [
        (
            "Productivity",
            completed.iter().map(|r| r.productivity_change).collect(),
        ),
        (
            "Transformation",
            completed.iter().map(|r| r.transformation_belief).collect(),
        ),
        (
            "Regulatory Impact",
            completed.iter().map(|r| r.regulatory_influence).collect(),
        ),
        (
            "Tool Count",
            completed
                .iter()
                .map(|r| Some(adoption_index(r) as f64))
                .collect(),
        ),
        (
            "SDLC Maturity",
            completed.iter().map(|r| sdlc_maturity(r)).collect(),
        ),
        (
            "Quality Strategies",
            completed
                .iter()
                .map(|r| Some(quality_coverage(r) as f64))
                .collect(),
        ),
    ];

    let mut matrix = Vec::with_capacity(variables.len() * variables.len());
    for (label1, values1) in &variables {
        for (label2, values2) in &variables {
            let (x, y) = complete_pairs(values1.iter().copied().zip(values2.iter().copied()));
            let r = pearson(&x, &y);
            let p = p_value(r, x.len());
            matrix.push(CorrelationCell {
                var1: *label1,
                var2: *label2,
                correlation: round_to(r, 2),
                p_value: round_to(p, 4),
                is_significant: is_significant(p),
            });
        }
    }
    debug!(respondents = completed.len(), "computed correlation matrix");

    CorrelationMatrix {
        matrix,
        labels: variables.iter().map(|(label, _)| *label).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseMean {
    pub phase: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiExperienceSdlc {
    pub level: &'static str,
    pub count: usize,
    pub phases: Vec<PhaseMean>,
}

/// Substring of the AI experience answer (lowercased) and the group it
/// selects.
const AI_EXPERIENCE_GROUPS: [(&str, &str); 4] = [
    ("actively use", "Active AI Users"),
    ("technical tasks", "Technical Task Users"),
    ("tried", "Tried AI"),
    ("no hands", "No AI Experience"),
];

/// Mean SDLC phase ratings per AI experience group. Groups nobody falls
/// into are omitted.
#[must_use]
pub fn ai_experience_vs_sdlc(responses: &[SurveyResponse]) -> Vec<AiExperienceSdlc> {
    let completed = survey_data::completed(responses);
    AI_EXPERIENCE_GROUPS
        .into_iter()
        .map(|(needle, level)| {
            let group = completed
                .iter()
                .filter(|r| r.ai_experience.to_lowercase().contains(needle))
                .collect::<Vec<_>>();
            AiExperienceSdlc {
                level,
                count: group.len(),
                phases: SdlcPhase::ALL
                    .into_iter()
                    .map(|phase| PhaseMean {
                        phase: phase.short_name(),
                        value: descriptive::mean(group.iter().map(|r| r.sdlc_phases.get(phase))),
                    })
                    .collect(),
            }
        })
        .filter(|g| g.count > 0)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyCount {
    pub frequency: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityCorrection {
    pub strategy_count: usize,
    pub total: usize,
    /// Correction frequencies in order of first appearance.
    pub frequencies: Vec<FrequencyCount>,
}

/// Correction frequency by number of quality strategies used, in ascending
/// strategy count. Respondents without a correction answer are skipped.
#[must_use]
pub fn quality_vs_correction(responses: &[SurveyResponse]) -> Vec<QualityCorrection> {
    let answered = survey_data::completed(responses)
        .into_iter()
        .filter(|r| !r.correction_frequency.is_empty())
        .map(|r| (quality_coverage(r), r.correction_frequency.as_str()));

    let mut groups = group_by_key(answered)
        .into_iter()
        .map(|(strategy_count, frequencies)| QualityCorrection {
            strategy_count,
            total: frequencies.len(),
            frequencies: count_by(frequencies, |f| *f)
                .into_iter()
                .map(|(frequency, count)| FrequencyCount { frequency, count })
                .collect(),
        })
        .collect::<Vec<_>>();
    groups.sort_by_key(|g| g.strategy_count);
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableImportance {
    pub id: &'static str,
    pub label: &'static str,
    /// Absolute Pearson correlation with productivity change.
    pub value: f64,
    /// Rounded to four decimals.
    pub p_value: f64,
    pub is_significant: bool,
    /// `value` relative to the strongest factor, 0–100.
    pub percentage: f64,
}

/// Numeric coding of the experience answer used as a productivity factor.
///
/// Only the exact labels listed here are recognized; every other answer
/// codes as `1`.
#[must_use]
pub fn experience_level_score(experience: &str) -> f64 {
    match experience {
        "> 10 years" => 4.0,
        "5-10 years" => 3.0,
        "2-5 years" => 2.0,
        _ => 1.0,
    }
}

type Factor = (&'static str, fn(&SurveyResponse) -> f64);

#[expect(clippy::cast_precision_loss)]
const FACTORS: [Factor; 7] = [
    ("Tool Adoption Count", |r| adoption_index(r) as f64),
    ("Transformation Belief", |r| {
        r.transformation_belief.unwrap_or(0.0)
    }),
    ("Quality Coverage", |r| quality_coverage(r) as f64),
    ("SDLC Maturity", |r| sdlc_maturity(r).unwrap_or(0.0)),
    ("Use of Copilot", |r| f64::from(u8::from(r.tools.github_copilot))),
    ("Use of Cursor", |r| f64::from(u8::from(r.tools.cursor))),
    ("Experience Level", |r| experience_level_score(&r.experience)),
];

/// Ranks factors by the strength of their correlation with productivity
/// change, strongest first.
///
/// Only respondents who rated their productivity are included; missing
/// factor values count as `0`. Empty input yields an empty list.
#[must_use]
pub fn variable_importance(responses: &[SurveyResponse]) -> Vec<VariableImportance> {
    let rated = survey_data::completed(responses)
        .into_iter()
        .filter_map(|r| Some((r, r.productivity_change?)))
        .collect::<Vec<_>>();
    if rated.is_empty() {
        return Vec::new();
    }

    let target = rated.iter().map(|(_, p)| *p).collect::<Vec<_>>();
    let mut importance = FACTORS
        .into_iter()
        .map(|(label, factor)| {
            let values = rated.iter().map(|(r, _)| factor(r)).collect::<Vec<_>>();
            let value = pearson(&values, &target).abs();
            let p = p_value(value, rated.len());
            VariableImportance {
                id: label,
                label,
                value,
                p_value: round_to(p, 4),
                is_significant: is_significant(p),
                percentage: 0.0,
            }
        })
        .collect::<Vec<_>>();

    let max = importance.iter().map(|i| i.value).fold(0.0, f64::max);
    for entry in &mut importance {
        entry.percentage = if max == 0.0 {
            0.0
        } else {
            entry.value / max * 100.0
        };
    }
    importance.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    importance
}
