//! CRM Housekeeping Domain Layer
pub mod config;
pub mod customer;
pub mod errors;
pub mod inactivity;
pub mod order;
pub mod product;
pub mod timestamp;

pub use config::{CliOverrides, Config, ConfigError};
pub use customer::Customer;
pub use errors::DomainError;
pub use inactivity::InactivityPolicy;
pub use order::{Order, OrderItem, OrderReminder};
pub use product::{Product, RestockPolicy};
