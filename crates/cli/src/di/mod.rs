mod jobs;
mod repositories;
mod use_cases;

pub use jobs::Jobs;
pub use repositories::Repositories;
pub use use_cases::UseCases;
