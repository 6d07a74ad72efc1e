use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout of every timestamp column; matches SQLite `CURRENT_TIMESTAMP` (UTC).
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn to_db(ts: DateTime<Utc>) -> String {
    ts.format(DB_FORMAT).to_string()
}

pub fn from_db(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, DB_FORMAT) {
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
