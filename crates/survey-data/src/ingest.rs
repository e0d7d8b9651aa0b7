//! CSV ingestion
//!
//! Parses the `;`-delimited survey export into [`RawRow`]s keyed by the
//! normalized header text. Structural problems that do not prevent reading a
//! row (too few or too many cells) are collected as [`RowWarning`]s; text the
//! CSV reader cannot process at all aborts with an [`IngestError`] that still
//! carries the warnings gathered up to that point.

use std::{collections::HashMap, fmt, io};

use csv::ReaderBuilder;
use tracing::{debug, warn};

/// Field separator of the survey export.
pub const DELIMITER: u8 = b';';

/// One data row of the export, keyed by normalized header text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell for `key`, or an empty string if the row has none.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = RawRow::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

/// Rows read from an export together with non-fatal diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
    pub warnings: Vec<RowWarning>,
}

/// A structural problem with a single row that did not stop parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    /// Zero-based index of the data row (the header is not counted).
    pub row: usize,
    /// One-based line in the source text, when known.
    pub line: Option<u64>,
    pub kind: RowWarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RowWarningKind {
    #[display("too few fields: expected {expected}, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[display("too many fields: expected {expected}, found {found}")]
    TooManyFields { expected: usize, found: usize },
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "row {} (line {line}): {}", self.row, self.kind),
            None => write!(f, "row {}: {}", self.row, self.kind),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum IngestError {
    #[display("malformed survey CSV: {source}")]
    Malformed {
        source: csv::Error,
        warnings: Vec<RowWarning>,
    },
}

impl IngestError {
    /// Row warnings collected before the fatal error.
    #[must_use]
    pub fn warnings(&self) -> &[RowWarning] {
        match self {
            IngestError::Malformed { warnings, .. } => warnings,
        }
    }
}

/// Normalizes a header cell: strips a leading byte-order mark and turns
/// non-breaking spaces into ordinary spaces.
///
/// ```
/// # use survey_data::ingest::normalize_header;
/// assert_eq!(normalize_header("\u{feff}Status"), "Status");
/// assert_eq!(normalize_header("Small\u{a0}company"), "Small company");
/// ```
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header
        .strip_prefix('\u{feff}')
        .unwrap_or(header)
        .replace('\u{a0}', " ")
}

/// Parses the survey export.
///
/// Blank lines are skipped. A row with fewer cells than headers leaves the
/// uncovered keys missing; cells beyond the last header are dropped. Both
/// cases are reported as warnings. Rows are returned in input order.
pub fn parse_survey_csv(text: &str) -> Result<ParsedCsv, IngestError> {
    parse_survey_reader(text.as_bytes())
}

/// Parses the survey export from any byte source.
///
/// Same rules as [`parse_survey_csv`]; additionally fails on cells that are
/// not valid UTF-8.
pub fn parse_survey_reader<R: io::Read>(source: R) -> Result<ParsedCsv, IngestError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut warnings = Vec::new();
    let headers = match reader.headers() {
        Ok(record) => record.iter().map(normalize_header).collect::<Vec<_>>(),
        Err(source) => return Err(IngestError::Malformed { source, warnings }),
    };

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(source) => return Err(IngestError::Malformed { source, warnings }),
        };

        let found = record.len();
        let expected = headers.len();
        let kind = match found.cmp(&expected) {
            std::cmp::Ordering::Less => Some(RowWarningKind::TooFewFields { expected, found }),
            std::cmp::Ordering::Greater => Some(RowWarningKind::TooManyFields { expected, found }),
            std::cmp::Ordering::Equal => None,
        };
        if let Some(kind) = kind {
            let warning = RowWarning {
                row: index,
                line: record.position().map(csv::Position::line),
                kind,
            };
            warn!("{warning}");
            warnings.push(warning);
        }

        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.as_str(), value))
                .collect(),
        );
    }

    debug!(
        rows = rows.len(),
        columns = headers.len(),
        warnings = warnings.len(),
        "parsed survey CSV"
    );
    Ok(ParsedCsv {
        headers,
        rows,
        warnings,
    })
}
