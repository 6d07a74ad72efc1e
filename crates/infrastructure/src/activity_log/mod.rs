pub mod file_activity_log;

pub use file_activity_log::FileActivityLog;
