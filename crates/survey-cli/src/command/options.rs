use std::path::PathBuf;

use clap::Args;
use survey_data::FilterOptions;

use super::DatasetArg;
use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct OptionsArg {
    #[clap(flatten)]
    pub dataset: DatasetArg,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &OptionsArg) -> anyhow::Result<()> {
    let responses = arg.dataset.load()?;
    let options = FilterOptions::from_responses(&responses);
    Output::save_json(&options, arg.output.clone())
}
