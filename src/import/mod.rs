//! Reads the time-tracking export into `TimeRecord`s.

mod reader;

pub use reader::{read_records, read_records_from};
