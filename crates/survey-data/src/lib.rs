//! Survey export ingestion and typed response records.
//!
//! The pipeline is:
//!
//! 1. [`ingest::parse_survey_csv`] reads the `;`-delimited export into
//!    [`RawRow`]s keyed by header text.
//! 2. [`transform::transform`] resolves the headers through a [`ColumnMap`]
//!    and produces typed [`SurveyResponse`]s.
//! 3. [`filter::apply_filter`] narrows the records before analysis.
//!
//! [`SurveyDataset::from_csv`] runs the first two steps in one call:
//!
//! ```
//! use survey_data::{ColumnMap, SurveyDataset};
//!
//! let columns = ColumnMap::default();
//! let csv = "#;Status\n1;Completed\n2;Incomplete\n";
//! let dataset = SurveyDataset::from_csv(csv, &columns).unwrap();
//!
//! assert_eq!(dataset.responses.len(), 2);
//! assert!(dataset.responses[0].is_completed());
//! assert!(dataset.warnings.is_empty());
//! ```

use tracing::info;

pub use self::{
    columns::ColumnMap,
    filter::{FilterOptions, FilterState, apply_filter},
    ingest::{IngestError, RawRow, RowWarning, RowWarningKind},
    response::*,
};

pub mod columns;
pub mod filter;
pub mod ingest;
pub mod response;
pub mod transform;

/// Typed records of one export together with the row warnings raised while
/// reading it.
#[derive(Debug, Clone, Default)]
pub struct SurveyDataset {
    pub responses: Vec<SurveyResponse>,
    pub warnings: Vec<RowWarning>,
}

impl SurveyDataset {
    pub fn from_csv(text: &str, columns: &ColumnMap) -> Result<Self, IngestError> {
        Ok(Self::from_parsed(ingest::parse_survey_csv(text)?, columns))
    }

    pub fn from_reader<R: std::io::Read>(
        source: R,
        columns: &ColumnMap,
    ) -> Result<Self, IngestError> {
        Ok(Self::from_parsed(
            ingest::parse_survey_reader(source)?,
            columns,
        ))
    }

    fn from_parsed(parsed: ingest::ParsedCsv, columns: &ColumnMap) -> Self {
        let responses = transform::transform(&parsed.rows, columns);
        info!(
            responses = responses.len(),
            completed = responses.iter().filter(|r| r.is_completed()).count(),
            warnings = parsed.warnings.len(),
            "loaded survey dataset"
        );
        Self {
            responses,
            warnings: parsed.warnings,
        }
    }
}
