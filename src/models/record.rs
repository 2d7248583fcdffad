use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of the time-tracking export.
///
/// Only the six columns below are read; everything else in the export
/// (task, notes, billable flags, ...) is ignored by the CSV reader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeRecord {
    #[serde(rename = "Client")]
    pub client: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Hours", with = "rust_decimal::serde::str")]
    pub hours: Decimal,
}

/// Column names the CSV reader requires in the header row.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Client", "Project", "First Name", "Last Name", "Date", "Hours"];

impl TimeRecord {
    pub fn new(
        client: impl Into<String>,
        project: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date: NaiveDate,
        hours: Decimal,
    ) -> Self {
        Self {
            client: client.into(),
            project: project.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date,
            hours,
        }
    }
}
