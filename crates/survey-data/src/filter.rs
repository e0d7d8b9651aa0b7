//! Respondent filtering
//!
//! A [`FilterState`] narrows the record set before any analysis runs. Values
//! are compared after collapsing whitespace, so an option picked from a list
//! matches records whose cells contain doubled or non-breaking spaces.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::response::{EXPERIENCE_LEVELS, SurveyResponse};

/// Active filter constraints. `None` (or an empty string) means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub experience: Option<String>,
    pub industry: Option<String>,
    pub organization_type: Option<String>,
    /// Reserved for segment filtering; currently ignored.
    pub cluster: Option<String>,
}

impl FilterState {
    /// Returns `true` if any constraint is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        [
            &self.experience,
            &self.industry,
            &self.organization_type,
            &self.cluster,
        ]
        .into_iter()
        .any(|value| constraint(value.as_deref()).is_some())
    }

    /// Returns `true` if `response` satisfies every set constraint.
    #[must_use]
    pub fn matches(&self, response: &SurveyResponse) -> bool {
        let accepts = |filter: &Option<String>, value: &str| {
            constraint(filter.as_deref())
                .is_none_or(|wanted| normalize_whitespace(wanted) == normalize_whitespace(value))
        };
        accepts(&self.experience, &response.experience)
            && accepts(&self.industry, &response.industry)
            && accepts(&self.organization_type, &response.organization_type)
    }
}

fn constraint(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Collapses whitespace runs into single spaces and trims both ends.
///
/// ```
/// # use survey_data::filter::normalize_whitespace;
/// assert_eq!(normalize_whitespace("  Banking /\u{a0} Insurance "), "Banking / Insurance");
/// ```
#[must_use]
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the records that satisfy `filter`, in input order.
#[must_use]
pub fn apply_filter(responses: &[SurveyResponse], filter: &FilterState) -> Vec<SurveyResponse> {
    responses
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Distinct values offered for each filterable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub experience: Vec<String>,
    pub industry: Vec<String>,
    pub organization_type: Vec<String>,
}

impl FilterOptions {
    /// Collects the normalized, non-empty values found among completed
    /// responses.
    ///
    /// Industries and organization types are sorted alphabetically.
    /// Experience levels follow their natural order; unrecognized levels come
    /// first.
    #[must_use]
    pub fn from_responses(responses: &[SurveyResponse]) -> Self {
        let distinct = |field: fn(&SurveyResponse) -> &str| {
            responses
                .iter()
                .filter(|r| r.is_completed())
                .map(|r| normalize_whitespace(field(r)))
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
        };

        let mut experience = distinct(|r| r.experience.as_str()).into_iter().collect::<Vec<_>>();
        experience.sort_by_key(|level| EXPERIENCE_LEVELS.iter().position(|l| l == level));

        Self {
            experience,
            industry: distinct(|r| r.industry.as_str()).into_iter().collect(),
            organization_type: distinct(|r| r.organization_type.as_str()).into_iter().collect(),
        }
    }
}
