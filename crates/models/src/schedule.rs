use serde::Deserialize;
use thiserror::Error;

/// Semester label used when the caller does not name one
pub const DEFAULT_SEMESTER: &str = "2024-2025-2";

/// Separator between instructor names in the instructors column
pub const INSTRUCTOR_SEPARATOR: char = '/';

/// Column headers of the schedule export, in file order
pub const HEADERS: [&str; 7] = [
    "课程代码",
    "课程名称",
    "课程英文名称",
    "课程性质",
    "开课学院",
    "任课老师",
    "学分",
];

/// Errors that make a single schedule row unusable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleRowError {
    #[error("missing value for column '{0}'")]
    MissingField(&'static str),
    #[error("invalid credit '{0}'")]
    InvalidCredit(String),
    #[error("no instructor listed")]
    NoInstructor,
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// A schedule record exactly as it appears in the CSV file
///
/// Every column is optional here so that a missing or blank cell is
/// reported per row instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "课程代码")]
    pub code: Option<String>,
    #[serde(rename = "课程名称")]
    pub name: Option<String>,
    #[serde(rename = "课程英文名称")]
    pub english_name: Option<String>,
    #[serde(rename = "课程性质")]
    pub category: Option<String>,
    #[serde(rename = "开课学院")]
    pub department: Option<String>,
    #[serde(rename = "任课老师")]
    pub instructors: Option<String>,
    #[serde(rename = "学分")]
    pub credit: Option<String>,
}

/// A validated course offering, ready to be written to the database
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub code: String,
    pub name: String,
    pub english_name: Option<String>,
    pub category: String,
    pub department: String,
    /// Non-empty when built through `TryFrom`; the first entry is the main instructor
    pub instructors: Vec<String>,
    pub credit: f64,
}

impl ScheduleRow {
    /// The first-listed instructor, part of the course's identity
    ///
    /// `None` only for a row built by hand with no instructors.
    pub fn main_instructor(&self) -> Option<&str> {
        self.instructors.first().map(String::as_str)
    }
}

impl TryFrom<ScheduleRecord> for ScheduleRow {
    type Error = ScheduleRowError;

    fn try_from(record: ScheduleRecord) -> Result<Self, Self::Error> {
        let code = required(record.code, HEADERS[0])?;
        let name = required(record.name, HEADERS[1])?;
        let category = required(record.category, HEADERS[3])?;
        let department = required(record.department, HEADERS[4])?;
        let instructors = split_instructors(&required(record.instructors, HEADERS[5])?)?;
        let credit = parse_credit(record.credit.as_deref())?;

        let english_name = record
            .english_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            code,
            name,
            english_name,
            category,
            department,
            instructors,
            credit,
        })
    }
}

/// Trims a required cell, rejecting absent or blank values
fn required(value: Option<String>, column: &'static str) -> Result<String, ScheduleRowError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ScheduleRowError::MissingField(column))
}

/// Parses the credit cell
///
/// # Arguments
/// * `value` - The raw cell, if present
///
/// # Returns
/// `0.0` for an absent or blank cell, the parsed value otherwise.
/// Non-numeric and non-finite values are rejected.
pub fn parse_credit(value: Option<&str>) -> Result<f64, ScheduleRowError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|credit| credit.is_finite())
        .ok_or_else(|| ScheduleRowError::InvalidCredit(trimmed.to_string()))
}

/// Splits the instructors cell into individual trimmed names
///
/// Empty segments (e.g. from a trailing separator) are dropped.
pub fn split_instructors(value: &str) -> Result<Vec<String>, ScheduleRowError> {
    let names: Vec<String> = value
        .split(INSTRUCTOR_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(ScheduleRowError::NoInstructor);
    }

    Ok(names)
}

/// One data row of a schedule file, as read
#[derive(Debug, Clone)]
pub struct SourceRow {
    /// 1-based line number in the source file
    pub line: u64,
    /// The raw cells, kept for diagnostics
    pub raw: Vec<String>,
    pub parsed: Result<ScheduleRow, ScheduleRowError>,
}

impl SourceRow {
    /// The raw cells joined back into a single comma-separated line
    pub fn raw_line(&self) -> String {
        self.raw.join(",")
    }
}
