use csv::{ReaderBuilder, StringRecord, Trim};
use log::warn;
use models::schedule::{HEADERS, ScheduleRecord, ScheduleRow, ScheduleRowError, SourceRow};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failures that prevent any row of a schedule file from being read
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read header row: {0}")]
    Header(#[from] csv::Error),
}

/// Reads a schedule CSV file into source rows
///
/// The file must be UTF-8; a leading byte-order mark is ignored. Rows
/// that cannot be decoded or validated are returned with their error
/// instead of failing the whole file.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// Every data row in file order, or a [`ReadError`] if the file itself is unreadable
pub fn read_schedule(path: &Path) -> Result<Vec<SourceRow>, ReadError> {
    let content = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_schedule(&content)
}

/// Parses schedule CSV content that is already in memory
pub fn parse_schedule(content: &str) -> Result<Vec<SourceRow>, ReadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    warn_missing_headers(&headers);

    let rows = reader
        .records()
        .map(|result| match result {
            Ok(record) => to_source_row(&headers, record),
            Err(e) => SourceRow {
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                raw: Vec::new(),
                parsed: Err(ScheduleRowError::Malformed(e.to_string())),
            },
        })
        .collect();

    Ok(rows)
}

fn to_source_row(headers: &StringRecord, record: StringRecord) -> SourceRow {
    let parsed = record
        .deserialize::<ScheduleRecord>(Some(headers))
        .map_err(|e| ScheduleRowError::Malformed(e.to_string()))
        .and_then(ScheduleRow::try_from);

    SourceRow {
        line: record.position().map(|p| p.line()).unwrap_or_default(),
        raw: record.iter().map(str::to_string).collect(),
        parsed,
    }
}

/// Every row will fail on a missing column, so say it once up front
fn warn_missing_headers(headers: &StringRecord) {
    for expected in HEADERS {
        if !headers.iter().any(|h| h == expected) {
            warn!("Schedule file has no '{expected}' column");
        }
    }
}
