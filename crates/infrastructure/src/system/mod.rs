pub mod clock;
pub mod health_probe;

pub use clock::SystemClock;
pub use health_probe::SqliteHealthProbe;
