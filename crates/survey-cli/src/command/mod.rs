use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use survey_data::{FilterState, SurveyResponse, apply_filter};

use crate::util;

use self::{options::OptionsArg, report::ReportArg, summary::SummaryArg};

mod columns;
mod options;
mod report;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute the full analysis report as JSON
    Report(#[clap(flatten)] ReportArg),
    /// Print the headline analyses as text tables
    Summary(#[clap(flatten)] SummaryArg),
    /// List the values available for each filter
    Options(#[clap(flatten)] OptionsArg),
    /// Print the built-in column map as JSON
    Columns,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Options(arg) => options::run(&arg)?,
        Mode::Columns => columns::run()?,
    }
    Ok(())
}

/// Survey export to load.
#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the `;`-separated survey export
    pub csv: PathBuf,

    /// JSON file overriding the question text of individual columns
    #[arg(long)]
    pub columns: Option<PathBuf>,
}

impl DatasetArg {
    pub(crate) fn load(&self) -> anyhow::Result<Vec<SurveyResponse>> {
        let columns = util::read_column_map(self.columns.as_deref())?;
        let dataset = util::read_survey_file(&self.csv, &columns)?;
        Ok(dataset.responses)
    }
}

/// Respondent filters. Values are matched ignoring whitespace differences.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArg {
    /// Only include respondents with this experience answer
    #[arg(long)]
    pub experience: Option<String>,

    /// Only include respondents from this industry
    #[arg(long)]
    pub industry: Option<String>,

    /// Only include respondents from this organization type
    #[arg(long)]
    pub org_type: Option<String>,
}

impl FilterArg {
    fn to_state(&self) -> FilterState {
        FilterState {
            experience: self.experience.clone(),
            industry: self.industry.clone(),
            organization_type: self.org_type.clone(),
            cluster: None,
        }
    }

    pub(crate) fn apply(&self, responses: &[SurveyResponse]) -> Vec<SurveyResponse> {
        let state = self.to_state();
        if !state.is_active() {
            return responses.to_vec();
        }
        let filtered = apply_filter(responses, &state);
        tracing::info!(
            before = responses.len(),
            after = filtered.len(),
            "applied respondent filter"
        );
        filtered
    }
}
