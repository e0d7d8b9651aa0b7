use survey_data::ColumnMap;

use crate::util::Output;

pub(crate) fn run() -> anyhow::Result<()> {
    Output::stdout().write_json(ColumnMap::default())
}
