//! Rule-based respondent segmentation.
//!
//! Each completed respondent is scored once and assigned to the first
//! segment whose rule matches. The rules are evaluated in the order of
//! [`SEGMENT_RULES`]; the last rule matches everyone, so every respondent
//! ends up in exactly one segment.

use serde::Serialize;
use survey_data::{SurveyResponse, Tool};
use survey_stats::descriptive::percentage;

use crate::composite::adoption_index;

/// Value used for a productivity or belief rating that is missing or zero.
const NEUTRAL_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Innovators,
    Pragmatists,
    Cautious,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Innovators, Segment::Pragmatists, Segment::Cautious];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Segment::Innovators => "innovators",
            Segment::Pragmatists => "pragmatists",
            Segment::Cautious => "cautious",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Segment::Innovators => "AI Champions",
            Segment::Pragmatists => "Experienced Pragmatists",
            Segment::Cautious => "Cautious Observers",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Segment::Innovators => "High adoption and high productivity ambitions",
            Segment::Pragmatists => "Purpose-driven usage with a focus on quality",
            Segment::Cautious => "Skeptical or early in adoption",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Segment::Innovators => "#A100FF",
            Segment::Pragmatists => "#6366F1",
            Segment::Cautious => "#06B6D4",
        }
    }
}

/// Scores a respondent is segmented on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RespondentProfile {
    /// Weighted mix of tool adoption, productivity change and transformation
    /// belief, 0–1.
    pub affinity: f64,
    pub is_senior: bool,
    pub is_cautious: bool,
}

#[expect(clippy::cast_precision_loss)]
impl RespondentProfile {
    #[must_use]
    pub fn new(response: &SurveyResponse) -> Self {
        let tool_fraction = adoption_index(response) as f64 / Tool::ALL.len() as f64;
        let productivity = rating_or_neutral(response.productivity_change) / 10.0;
        let belief = rating_or_neutral(response.transformation_belief) / 10.0;

        // Substring checks are literal: "6–10 years" (en-dash) is not senior,
        // and lowercase "half"/"most" are not cautious.
        Self {
            affinity: tool_fraction * 0.4 + productivity * 0.3 + belief * 0.3,
            is_senior: response.experience.contains("> 10") || response.experience.contains("5-10"),
            is_cautious: response.correction_frequency.contains("Half")
                || response.correction_frequency.contains("Most"),
        }
    }
}

fn rating_or_neutral(rating: Option<f64>) -> f64 {
    match rating {
        Some(value) if value != 0.0 => value,
        _ => NEUTRAL_RATING,
    }
}

type SegmentRule = (Segment, fn(&RespondentProfile) -> bool);

/// Segment assignment rules, first match wins.
pub const SEGMENT_RULES: [SegmentRule; 3] = [
    (Segment::Innovators, |p| p.affinity > 0.7 && !p.is_cautious),
    (Segment::Pragmatists, |p| p.is_senior || p.affinity > 0.4),
    (Segment::Cautious, |_| true),
];

#[must_use]
pub fn assign_segment(response: &SurveyResponse) -> Segment {
    let profile = RespondentProfile::new(response);
    SEGMENT_RULES
        .iter()
        .find(|(_, rule)| rule(&profile))
        .map_or(Segment::Cautious, |(segment, _)| *segment)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub size: usize,
    /// Share of completed respondents, 0–100.
    pub percentage: f64,
}

/// Segments completed respondents, largest segment first.
///
/// All three segments are reported, including empty ones. Without completed
/// responses the result is empty.
#[must_use]
pub fn respondent_clusters(responses: &[SurveyResponse]) -> Vec<ClusterProfile> {
    let completed = survey_data::completed(responses);
    if completed.is_empty() {
        return Vec::new();
    }

    let mut sizes = [0usize; Segment::ALL.len()];
    for response in &completed {
        let segment = assign_segment(response);
        if let Some(i) = Segment::ALL.iter().position(|&s| s == segment) {
            sizes[i] += 1;
        }
    }

    let mut clusters = Segment::ALL
        .into_iter()
        .zip(sizes)
        .map(|(segment, size)| ClusterProfile {
            id: segment.id(),
            name: segment.name(),
            description: segment.description(),
            color: segment.color(),
            size,
            percentage: percentage(size, completed.len()),
        })
        .collect::<Vec<_>>();
    clusters.sort_by(|a, b| b.size.cmp(&a.size));
    clusters
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use survey_data::{ResponseStatus, ToolFlags};

    use super::*;
    use crate::test_util::respondent;

    fn champion() -> SurveyResponse {
        let mut r = respondent();
        r.tools = ToolFlags::from_fn(|_| true);
        r.productivity_change = Some(9.0);
        r.transformation_belief = Some(9.0);
        r.correction_frequency = "Rarely".to_owned();
        r
    }

    #[test]
    fn test_champion_with_full_adoption() {
        // affinity = 1.0 * 0.4 + 0.9 * 0.3 + 0.9 * 0.3 = 0.94
        let r = champion();
        let profile = RespondentProfile::new(&r);
        assert!((profile.affinity - 0.94).abs() < 1e-9);
        assert_eq!(assign_segment(&r), Segment::Innovators);
    }

    #[test]
    fn test_cautious_correction_blocks_champion() {
        let mut r = champion();
        r.correction_frequency = "Most of the time".to_owned();
        assert_eq!(assign_segment(&r), Segment::Pragmatists);

        r.correction_frequency = "About Half of the time".to_owned();
        assert_eq!(assign_segment(&r), Segment::Pragmatists);
    }

    #[test]
    fn test_caution_check_is_case_sensitive() {
        let mut r = champion();
        r.correction_frequency = "most of the time".to_owned();
        assert_eq!(assign_segment(&r), Segment::Innovators);
    }

    #[test]
    fn test_missing_and_zero_ratings_are_neutral() {
        let mut r = respondent();
        r.productivity_change = Some(0.0);
        // affinity = 0 + 0.5 * 0.3 + 0.5 * 0.3 = 0.3
        let profile = RespondentProfile::new(&r);
        assert!((profile.affinity - 0.3).abs() < 1e-9);
        assert_eq!(assign_segment(&r), Segment::Cautious);
    }

    #[test]
    fn test_seniority_uses_literal_labels() {
        let mut r = respondent();
        r.experience = "> 10 years".to_owned();
        assert_eq!(assign_segment(&r), Segment::Pragmatists);

        r.experience = "5-10 years".to_owned();
        assert_eq!(assign_segment(&r), Segment::Pragmatists);

        // en-dash variant is not recognized as senior
        r.experience = "6–10 years".to_owned();
        assert!(!RespondentProfile::new(&r).is_senior);
        assert_eq!(assign_segment(&r), Segment::Cautious);
    }

    #[test]
    fn test_moderate_affinity_is_pragmatist() {
        let mut r = respondent();
        r.productivity_change = Some(8.0);
        r.transformation_belief = Some(8.0);
        // affinity = 0.24 + 0.24 = 0.48
        assert_eq!(assign_segment(&r), Segment::Pragmatists);
    }

    #[test]
    fn test_clusters_sorted_by_size() {
        let mut incomplete = champion();
        incomplete.status = ResponseStatus::Incomplete;
        let responses = [
            champion(),
            respondent(),
            respondent(),
            champion(),
            champion(),
            incomplete,
        ];

        let clusters = respondent_clusters(&responses);

        let ids = clusters.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["innovators", "cautious", "pragmatists"]);
        assert_eq!(clusters[0].size, 3);
        assert_eq!(clusters[0].name, "AI Champions");
        assert_eq!(clusters[0].color, "#A100FF");
        assert_eq!(clusters[0].percentage, percentage(3, 5));
        assert_eq!(clusters[2].size, 0);

        let total = clusters.iter().map(|c| c.percentage).sum::<f64>();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_sizes_keep_segment_order() {
        let clusters = respondent_clusters(&[respondent()]);
        let ids = clusters.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["cautious", "innovators", "pragmatists"]);
    }

    #[test]
    fn test_no_completed_responses() {
        let mut r = respondent();
        r.status = ResponseStatus::Incomplete;
        assert!(respondent_clusters(&[r]).is_empty());
        assert!(respondent_clusters(&[]).is_empty());
    }
}
