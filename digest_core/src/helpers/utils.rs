use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2026-01-01T12:00:00.000Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
