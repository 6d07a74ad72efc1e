use chrono::{DateTime, Utc};

const BRACKETED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const HEARTBEAT_FORMAT: &str = "%d/%m/%Y-%H:%M:%S";

/// `[YYYY-MM-DD HH:MM:SS]` prefix shared by the task logs
pub fn stamp(now: DateTime<Utc>) -> String {
    format!("[{}]", now.format(BRACKETED_FORMAT))
}

pub fn heartbeat_stamp(now: DateTime<Utc>) -> String {
    now.format(HEARTBEAT_FORMAT).to_string()
}
