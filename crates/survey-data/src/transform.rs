//! Raw row to typed record conversion

use tracing::debug;

use crate::{
    columns::ColumnMap,
    ingest::RawRow,
    response::{
        Compliance, QualityStrategyFlags, ResponseStatus, SdlcPhaseRatings, SurveyResponse,
        ToolFlags,
    },
};

/// Converts every raw row into a [`SurveyResponse`].
///
/// One record is produced per row, in input order. Rows are never dropped
/// and conversion never fails; unusable cells become defaults (`false`,
/// `None`, empty text).
#[must_use]
pub fn transform(rows: &[RawRow], columns: &ColumnMap) -> Vec<SurveyResponse> {
    let responses = rows
        .iter()
        .map(|row| transform_row(row, columns))
        .collect::<Vec<_>>();
    debug!(responses = responses.len(), "transformed survey rows");
    responses
}

#[must_use]
pub fn transform_row(row: &RawRow, columns: &ColumnMap) -> SurveyResponse {
    let text = |key: &str| row.get(key).to_owned();

    SurveyResponse {
        id: text(&columns.id),
        status: ResponseStatus::parse(row.get(&columns.status)),
        experience: text(&columns.experience),
        role: text(&columns.role),
        organization_type: text(&columns.organization_type),
        industry: text(&columns.industry),
        compliance: Compliance::parse(row.get(&columns.compliance)),
        regulatory_influence: parse_number(row.get(&columns.regulatory_influence)),
        ai_experience: text(&columns.ai_experience),
        sdlc_self_assessment: text(&columns.sdlc_self_assessment),
        tools: ToolFlags::from_fn(|tool| parse_bool(row.get(columns.tools.column(tool)))),
        sdlc_phases: SdlcPhaseRatings::from_fn(|phase| {
            parse_number(row.get(columns.sdlc_phases.column(phase)))
        }),
        challenges: parse_challenges(row.get(&columns.challenges)),
        interaction_pattern: text(&columns.interaction_pattern),
        correction_frequency: text(&columns.correction_frequency),
        quality_strategies: QualityStrategyFlags::from_fn(|strategy| {
            parse_bool(row.get(columns.quality_strategies.column(strategy)))
        }),
        transformation_belief: parse_number(row.get(&columns.transformation_belief)),
        productivity_change: parse_number(row.get(&columns.productivity_change)),
    }
}

/// Checkbox cell: `1`, or `yes`/`true` in any case.
///
/// ```
/// # use survey_data::transform::parse_bool;
/// assert!(parse_bool("1"));
/// assert!(parse_bool("YES"));
/// assert!(!parse_bool(""));
/// assert!(!parse_bool("0"));
/// ```
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("true")
}

/// Numeric cell.
///
/// Empty, whitespace-only, `-` and `—` cells are missing. Otherwise the
/// longest decimal number at the start of the cell (after leading whitespace)
/// is taken, so `"7 (much better)"` reads as `7`. A cell that does not start
/// with a number is missing.
///
/// ```
/// # use survey_data::transform::parse_number;
/// assert_eq!(parse_number("4"), Some(4.0));
/// assert_eq!(parse_number(" 2.5 points"), Some(2.5));
/// assert_eq!(parse_number("—"), None);
/// assert_eq!(parse_number("n/a"), None);
/// ```
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    if value == "—" || value == "-" || value.trim().is_empty() {
        return None;
    }
    let value = value.trim_start();
    let len = decimal_prefix_len(value.as_bytes());
    if len == 0 {
        return None;
    }
    value[..len].parse().ok()
}

/// Length of the longest prefix of the form `[+-]digits[.digits][e[+-]digits]`
/// that contains at least one mantissa digit.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = digits_from(pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(pos + 1 + sign);
        if exp_digits > 0 {
            pos += 1 + sign + exp_digits;
        }
    }
    pos
}

/// Ranked multi-select cell.
///
/// Every option carries a parenthesized explanation that may itself contain
/// commas, so options are separated on `"), "` and the closing parenthesis is
/// restored on all but the last one.
///
/// ```
/// # use survey_data::transform::parse_challenges;
/// let cell = "Context limitations (codebase awareness, memory issues), Code quality & correctness (logic errors, hallucinations)";
/// assert_eq!(
///     parse_challenges(cell),
///     vec![
///         "Context limitations (codebase awareness, memory issues)",
///         "Code quality & correctness (logic errors, hallucinations)",
///     ]
/// );
/// ```
#[must_use]
pub fn parse_challenges(value: &str) -> Vec<String> {
    if value.trim().is_empty() || value == "—" {
        return Vec::new();
    }
    let parts = value.split("), ").collect::<Vec<_>>();
    let last = parts.len() - 1;
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let mut part = part.trim().to_owned();
            if i < last && !part.ends_with(')') {
                part.push(')');
            }
            part
        })
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::response::{QualityStrategy, SdlcPhase, Tool};

    fn full_row(columns: &ColumnMap) -> RawRow {
        let mut row = RawRow::new();
        row.insert(&columns.id, "17");
        row.insert(&columns.status, "Completed");
        row.insert(&columns.experience, "> 10 years");
        row.insert(&columns.role, "Software Architect");
        row.insert(&columns.organization_type, "Large enterprise (1000+)");
        row.insert(&columns.industry, "Finance");
        row.insert(&columns.compliance, "Yes");
        row.insert(&columns.regulatory_influence, "4");
        row.insert(&columns.ai_experience, "I actively use AI for coding");
        row.insert(&columns.interaction_pattern, "Co-Pilot – I review every step");
        row.insert(&columns.correction_frequency, "Sometimes");
        row.insert(&columns.transformation_belief, "9");
        row.insert(&columns.productivity_change, "8");
        row.insert(columns.tools.column(Tool::Cursor), "1");
        row.insert(columns.tools.column(Tool::ClaudeCode), "Yes");
        row.insert(columns.sdlc_phases.column(SdlcPhase::Coding), "5");
        row.insert(
            columns.quality_strategies.column(QualityStrategy::ManualReview),
            "true",
        );
        row
    }

    #[test]
    fn test_transform_row_reads_every_field() {
        let columns = ColumnMap::default();
        let response = transform_row(&full_row(&columns), &columns);

        assert_eq!(response.id, "17");
        assert!(response.is_completed());
        assert_eq!(response.experience, "> 10 years");
        assert_eq!(response.organization_type, "Large enterprise (1000+)");
        assert_eq!(response.compliance, Compliance::Yes);
        assert_eq!(response.regulatory_influence, Some(4.0));
        assert_eq!(response.tools.count(), 2);
        assert!(response.tools.cursor && response.tools.claude_code);
        assert_eq!(response.sdlc_phases.phase3, Some(5.0));
        assert_eq!(response.sdlc_phases.phase1, None);
        assert_eq!(response.quality_strategies.count(), 1);
        assert_eq!(response.transformation_belief, Some(9.0));
        assert_eq!(response.productivity_change, Some(8.0));
        assert!(response.challenges.is_empty());
        assert_eq!(response.sdlc_self_assessment, "");
    }

    #[test]
    fn test_empty_row_yields_defaults() {
        let response = transform_row(&RawRow::new(), &ColumnMap::default());

        assert_eq!(response.status, ResponseStatus::Incomplete);
        assert_eq!(response.compliance, Compliance::No);
        assert_eq!(response.tools, ToolFlags::default());
        assert_eq!(response.sdlc_phases, SdlcPhaseRatings::default());
        assert_eq!(response.productivity_change, None);
        assert!(response.challenges.is_empty());
    }

    #[test]
    fn test_all_tool_cells_set_gives_nine_tools() {
        let columns = ColumnMap::default();
        let row = Tool::ALL
            .into_iter()
            .map(|tool| (columns.tools.column(tool), "1"))
            .collect::<RawRow>();
        assert_eq!(transform_row(&row, &columns).tools.count(), 9);
    }

    #[test]
    fn test_transform_keeps_order_and_count() {
        let columns = ColumnMap::default();
        let rows = ["a", "b", "c"]
            .into_iter()
            .map(|id| [(columns.id.as_str(), id)].into_iter().collect::<RawRow>())
            .collect::<Vec<_>>();
        let ids = transform(&rows, &columns)
            .into_iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_custom_columns_are_used() {
        let columns = ColumnMap {
            status: "State".to_owned(),
            ..ColumnMap::default()
        };
        let row = [("State", "Completed")].into_iter().collect::<RawRow>();
        assert!(transform_row(&row, &columns).is_completed());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("1"));
        assert!(parse_bool("yes"));
        assert!(parse_bool("Yes"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool(" yes"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("no"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_parse_number_missing_markers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("—"), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("+"), None);
    }

    #[test]
    fn test_parse_number_takes_leading_prefix() {
        assert_eq!(parse_number("7"), Some(7.0));
        assert_eq!(parse_number("  3.5"), Some(3.5));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("8/10"), Some(8.0));
        assert_eq!(parse_number("10 - Strongly agree"), Some(10.0));
        assert_eq!(parse_number("1e2x"), Some(100.0));
        assert_eq!(parse_number("4e"), Some(4.0));
        assert_eq!(parse_number("4e+"), Some(4.0));
    }

    #[test]
    fn test_parse_challenges_splits_on_closing_paren() {
        let cell = "Context limitations (codebase awareness, memory issues), Code quality & correctness (logic errors, hallucinations)";
        assert_eq!(
            parse_challenges(cell),
            vec![
                "Context limitations (codebase awareness, memory issues)".to_owned(),
                "Code quality & correctness (logic errors, hallucinations)".to_owned(),
            ]
        );
    }

    #[test]
    fn test_parse_challenges_edge_cases() {
        assert!(parse_challenges("").is_empty());
        assert!(parse_challenges("   ").is_empty());
        assert!(parse_challenges("—").is_empty());
        assert_eq!(parse_challenges("Security"), vec!["Security".to_owned()]);
        assert_eq!(
            parse_challenges("A (x), B (y), C"),
            vec!["A (x)".to_owned(), "B (y)".to_owned(), "C".to_owned()]
        );
        // trailing separator leaves an empty last segment, which is dropped
        assert_eq!(parse_challenges("A (x), "), vec!["A (x)".to_owned()]);
    }
}
