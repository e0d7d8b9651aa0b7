//! Text summary command
//!
//! Prints the headline analyses of a (filtered) export as fixed-width tables.

use clap::Args;
use survey_analysis::{
    SurveyReport,
    clustering::ClusterProfile,
    cross::{CorrelationMatrix, VariableImportance},
    primary::{ChallengeRank, KeyMetrics},
};

use super::{DatasetArg, FilterArg};

/// Number of correlation pairs listed.
const CORRELATION_LIMIT: usize = 5;

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    #[clap(flatten)]
    pub filter: FilterArg,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let responses = arg.filter.apply(&arg.dataset.load()?);
    let report = SurveyReport::compute(&responses);

    println!("Survey Summary");
    println!("==============\n");

    let Some(metrics) = &report.key_metrics else {
        println!("No responses match the filter.");
        return Ok(());
    };
    print_key_metrics(metrics);
    println!();

    if let Some(clusters) = &report.clusters {
        print_segments(clusters);
        println!();
    }
    if let Some(challenges) = &report.challenge_highlights {
        print_challenges(challenges);
        println!();
    }
    if let Some(matrix) = &report.correlation_matrix {
        print_correlations(matrix);
        println!();
    }
    if let Some(importance) = &report.variable_importance {
        print_variable_importance(importance);
    }

    Ok(())
}

fn print_separator(width: usize) {
    println!("  {}", "-".repeat(width));
}

fn print_key_metrics(metrics: &KeyMetrics) {
    println!("Key Metrics");
    print_separator(48);
    println!("  {:<32} {:>14}", "Responses", metrics.total_responses);
    println!(
        "  {:<32} {:>14}",
        "Completed",
        format!(
            "{} ({:.1}%)",
            metrics.completed_responses, metrics.completion_rate
        )
    );
    println!(
        "  {:<32} {:>13.1}%",
        "Active AI users", metrics.active_ai_users.percentage
    );
    println!(
        "  {:<32} {:>14}",
        "Productivity change",
        format!(
            "{:.1} / {}",
            metrics.avg_productivity_change.value, metrics.avg_productivity_change.out_of
        )
    );
    println!(
        "  {:<32} {:>14}",
        "Transformation belief",
        format!(
            "{:.1} / {}",
            metrics.avg_transformation_belief.value, metrics.avg_transformation_belief.out_of
        )
    );
    println!(
        "  {:<32} {:>13.1}%",
        "Regulated environment", metrics.compliance_environment.percentage
    );
    println!(
        "  {:<32} {:>13.1}%",
        "Large enterprise", metrics.enterprise_users.percentage
    );
}

fn print_segments(clusters: &[ClusterProfile]) {
    println!("Segments");
    println!("  {:<28} {:>8} {:>10}", "Segment", "Size", "Share");
    print_separator(48);
    for cluster in clusters {
        println!(
            "  {:<28} {:>8} {:>9.1}%",
            cluster.name, cluster.size, cluster.percentage
        );
    }
}

fn print_challenges(challenges: &[ChallengeRank]) {
    println!("Top Challenges");
    println!("  {:<50} {:>8} {:>10}", "Challenge", "Score", "Top-2");
    print_separator(70);
    for challenge in challenges {
        println!(
            "  {:<50} {:>8} {:>9.1}%",
            challenge.label, challenge.weighted_score, challenge.percentage
        );
    }
}

fn print_correlations(matrix: &CorrelationMatrix) {
    // each pair appears twice in the matrix
    let mut pairs = matrix
        .matrix
        .iter()
        .filter(|cell| {
            let row = matrix.labels.iter().position(|l| *l == cell.var1);
            let col = matrix.labels.iter().position(|l| *l == cell.var2);
            row < col
        })
        .collect::<Vec<_>>();
    pairs.sort_by(|a, b| b.correlation.abs().total_cmp(&a.correlation.abs()));
    pairs.truncate(CORRELATION_LIMIT);

    println!("Strongest Correlations");
    println!(
        "  {:<40} {:>8} {:>10} {:>6}",
        "Variables", "r", "p", "Sig."
    );
    print_separator(67);
    for cell in pairs {
        println!(
            "  {:<40} {:>+8.2} {:>10.4} {:>6}",
            format!("{} / {}", cell.var1, cell.var2),
            cell.correlation,
            cell.p_value,
            if cell.is_significant { "yes" } else { "no" },
        );
    }
}

fn print_variable_importance(importance: &[VariableImportance]) {
    println!("Productivity Drivers");
    println!(
        "  {:<28} {:>8} {:>10} {:>10}",
        "Factor", "|r|", "p", "Relative"
    );
    print_separator(59);
    for entry in importance {
        println!(
            "  {:<28} {:>8.3} {:>10.4} {:>9.0}%",
            entry.label, entry.value, entry.p_value, entry.percentage
        );
    }
}
