use crate::errors::{AppError, AppResult};
use crate::models::record::{REQUIRED_COLUMNS, TimeRecord};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read every record of the CSV export at `path`.
pub fn read_records(path: &Path) -> AppResult<Vec<TimeRecord>> {
    let file = File::open(path)?;
    read_records_from(file)
}

/// Read every record from any CSV source with a header row.
///
/// Unknown columns are ignored. A row that cannot be parsed, has no client,
/// no first name, or negative hours aborts the read with its line number.
pub fn read_records_from<R: Read>(reader: R) -> AppResult<Vec<TimeRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(AppError::MissingColumn(col.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let raw = row.map_err(|e| malformed(e.position().map(|p| p.line()), e.to_string()))?;
        let line = raw.position().map(|p| p.line());

        let record: TimeRecord = raw
            .deserialize(Some(&headers))
            .map_err(|e| malformed(line, e.to_string()))?;
        validate(&record, line)?;
        records.push(record);
    }

    debug!(records = records.len(), "records read");
    Ok(records)
}

fn validate(r: &TimeRecord, line: Option<u64>) -> AppResult<()> {
    if r.client.is_empty() {
        Err(malformed(line, "empty client"))
    } else if r.first_name.is_empty() {
        Err(malformed(line, "empty first name"))
    } else if r.hours < Decimal::ZERO {
        Err(malformed(line, "negative hours"))
    } else {
        Ok(())
    }
}

fn malformed(line: Option<u64>, reason: impl Into<String>) -> AppError {
    AppError::MalformedRecord {
        line: line.unwrap_or(0),
        reason: reason.into(),
    }
}
