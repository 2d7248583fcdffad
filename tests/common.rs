#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use harvestgraph::models::record::TimeRecord;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

pub fn hg() -> Command {
    cargo_bin_cmd!("harvestgraph")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// `y-m-d` at the given time of day.
pub fn at(y: i32, m: u32, day: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(hh, mm, ss).expect("valid time")
}

pub fn h(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}

pub fn rec(client: &str, project: &str, first: &str, last: &str, date: NaiveDate, hours: &str) -> TimeRecord {
    TimeRecord::new(client, project, first, last, date, h(hours))
}

/// The three-record dataset: Jo Doe splits 8.5h between two clients over two days.
pub fn jo_doe_records() -> Vec<TimeRecord> {
    vec![
        rec("ClientA", "ProjA", "Jo", "Doe", d(2019, 1, 1), "4"),
        rec("ClientA", "ProjA", "Jo", "Doe", d(2019, 1, 2), "4"),
        rec("ClientB", "ProjB", "Jo", "Doe", d(2019, 1, 1), "0.5"),
    ]
}

/// A few people across three clients over roughly two months.
pub fn team_records() -> Vec<TimeRecord> {
    vec![
        rec("Acme Corp", "Website", "Ann", "Lee", d(2020, 3, 2), "6"),
        rec("Acme Corp", "Website", "Ann", "Lee", d(2020, 3, 3), "7.5"),
        rec("Acme Corp", "Mobile App", "Ann", "Lee", d(2020, 3, 4), "1"),
        rec("Globex", "Audit", "Bob", "Stone", d(2020, 3, 2), "8"),
        rec("Globex", "Audit", "Ann", "Lee", d(2020, 3, 10), "2"),
        rec("Acme Corp", "Mobile App", "Bob", "Stone", d(2020, 3, 11), "3.25"),
        rec("Initech", "Migration", "Cy", "Park", d(2020, 3, 20), "5"),
        rec("IgNew internal", "Admin", "Ann", "Lee", d(2020, 3, 21), "4"),
        rec("Initech", "Migration", "Ann", "Lee", d(2020, 4, 14), "0.25"),
        rec("Globex", "Audit", "Cy", "Park", d(2020, 4, 30), "6"),
    ]
}

pub const CSV_HEADER: &str = "Date,Client,Project,Project Code,Task,Notes,Hours,First Name,Last Name,Billable?";

/// Write a Harvest-like CSV (extra columns included) and return its path.
pub fn write_export(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(CSV_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).expect("write csv export");
    path
}

pub fn jo_doe_csv_rows() -> Vec<&'static str> {
    vec![
        "2019-01-01,ClientA,ProjA,PA,Dev,,4,Jo,Doe,Yes",
        "2019-01-02,ClientA,ProjA,PA,Dev,\"notes, with comma\",4,Jo,Doe,Yes",
        "2019-01-01,ClientB,ProjB,PB,Call,,0.5,Jo,Doe,No",
    ]
}
