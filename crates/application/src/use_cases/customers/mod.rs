pub mod cleanup_inactive_customers;

pub use cleanup_inactive_customers::CleanupInactiveCustomersUseCase;
