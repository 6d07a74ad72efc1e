pub mod customers;
pub mod orders;
pub mod products;
pub mod system;

pub use customers::CleanupInactiveCustomersUseCase;
pub use orders::SendOrderRemindersUseCase;
pub use products::RestockLowStockProductsUseCase;
pub use system::{CheckHealthUseCase, SeedSampleDataUseCase, SeedSummary};
