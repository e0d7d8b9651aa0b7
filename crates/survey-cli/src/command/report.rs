use std::path::PathBuf;

use clap::Args;
use survey_analysis::SurveyReport;

use super::{DatasetArg, FilterArg};
use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    #[clap(flatten)]
    pub filter: FilterArg,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let responses = arg.filter.apply(&arg.dataset.load()?);
    if responses.is_empty() {
        tracing::warn!("no responses match the filter");
    }

    let report = SurveyReport::compute(&responses);
    Output::save_json(&report, arg.output.clone())
}
