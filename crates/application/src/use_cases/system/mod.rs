pub mod check_health;
pub mod seed_sample_data;

pub use check_health::CheckHealthUseCase;
pub use seed_sample_data::{SeedSampleDataUseCase, SeedSummary};
