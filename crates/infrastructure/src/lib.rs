//! CRM Housekeeping Infrastructure Layer
pub mod activity_log;
pub mod database;
pub mod repositories;
pub mod system;
