use indoc::indoc;
use pretty_assertions::assert_eq;
use survey_analysis::SurveyReport;
use survey_data::{ColumnMap, FilterOptions, FilterState, SurveyDataset, apply_filter};

const EXPORT: &str = indoc! {"
    #;Status;Experience;Industry;Org;Compliance;Productivity;Belief;Copilot;Cursor
    1;Completed;> 10 years;Finance;Large enterprise;Yes;8;9;1;1
    2;Completed;2–5 years;Public  Sector;Startup;No;6;7;1;0
    3;Incomplete;> 10 years;Finance;Large enterprise;Yes;2;3;0;0
"};

fn columns() -> ColumnMap {
    serde_json::from_str(
        r#"{
            "experience": "Experience",
            "industry": "Industry",
            "organizationType": "Org",
            "compliance": "Compliance",
            "productivityChange": "Productivity",
            "transformationBelief": "Belief",
            "tools": { "githubCopilot": "Copilot", "cursor": "Cursor" }
        }"#,
    )
    .unwrap()
}

fn load() -> SurveyDataset {
    SurveyDataset::from_csv(EXPORT, &columns()).unwrap()
}

#[test]
fn test_unfiltered_report() {
    let dataset = load();
    assert!(dataset.warnings.is_empty());

    let report = SurveyReport::compute(&dataset.responses);

    let metrics = report.key_metrics.unwrap();
    assert_eq!(metrics.total_responses, 3);
    assert_eq!(metrics.completed_responses, 2);
    assert!((metrics.completion_rate - 66.67).abs() < 0.01);
    assert_eq!(metrics.avg_productivity_change.value, 7.0);
    assert_eq!(metrics.compliance_environment.count, 1);
    assert_eq!(metrics.enterprise_users.count, 1);

    let adoption = report.tool_adoption.unwrap();
    assert_eq!(adoption[0].id, "githubCopilot");
    assert_eq!(adoption[0].count, 2);
    assert_eq!(adoption[0].percentage, 100.0);

    let clusters = report.clusters.unwrap();
    assert_eq!(clusters.iter().map(|c| c.size).sum::<usize>(), 2);

    let summary = report.executive_summary.unwrap();
    assert!(summary.primary_driver.is_some());
    assert!(summary.champion_share.is_some());
}

#[test]
fn test_filtered_report() {
    let dataset = load();
    let filter = FilterState {
        industry: Some("Public Sector".to_owned()),
        ..FilterState::default()
    };
    assert!(filter.is_active());

    let filtered = apply_filter(&dataset.responses, &filter);
    assert_eq!(filtered.len(), 1);

    let metrics = SurveyReport::compute(&filtered).key_metrics.unwrap();
    assert_eq!(metrics.completed_responses, 1);
    assert_eq!(metrics.avg_productivity_change.value, 6.0);
}

#[test]
fn test_filter_without_matches_yields_empty_report() {
    let dataset = load();
    let filter = FilterState {
        experience: Some("< 2 years".to_owned()),
        ..FilterState::default()
    };

    let filtered = apply_filter(&dataset.responses, &filter);
    let report = SurveyReport::compute(&filtered);

    assert!(report.is_empty());
    assert!(report.executive_summary.is_none());
}

#[test]
fn test_filter_options_from_export() {
    let options = FilterOptions::from_responses(&load().responses);

    assert_eq!(options.experience, vec!["2–5 years", "> 10 years"]);
    assert_eq!(options.industry, vec!["Finance", "Public Sector"]);
    assert_eq!(options.organization_type, vec!["Large enterprise", "Startup"]);
}
