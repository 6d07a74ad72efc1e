pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::SqliteCustomerRepository;
pub use order_repository::SqliteOrderRepository;
pub use product_repository::SqliteProductRepository;
