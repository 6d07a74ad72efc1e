mod activity_log;
mod clock;
mod customer_repository;
mod health_probe;
mod order_repository;
mod product_repository;

pub use activity_log::ActivityLog;
pub use clock::Clock;
pub use customer_repository::CustomerRepository;
pub use health_probe::HealthProbe;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
