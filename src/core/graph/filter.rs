use crate::models::record::TimeRecord;

pub const DEFAULT_EXCLUSION_MARKER: &str = "IgNew";

/// True when `client` contains `marker`, ignoring case.
/// An empty marker never matches.
pub fn is_excluded(client: &str, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    client.to_lowercase().contains(&marker.to_lowercase())
}

/// Drop every record whose client carries the exclusion marker.
pub fn filter_records(mut records: Vec<TimeRecord>, marker: &str) -> Vec<TimeRecord> {
    records.retain(|r| !is_excluded(&r.client, marker));
    records
}
