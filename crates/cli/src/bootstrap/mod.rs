mod config;
mod database;
mod logging;

pub use config::load_config;
pub use database::{init_database, init_database_or_lazy};
pub use logging::init_logging;
