use crm_housekeeping_infrastructure::repositories::{
    SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
};
use crm_housekeeping_infrastructure::system::SqliteHealthProbe;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub customer: Arc<SqliteCustomerRepository>,
    pub order: Arc<SqliteOrderRepository>,
    pub product: Arc<SqliteProductRepository>,
    pub health: Arc<SqliteHealthProbe>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            customer: Arc::new(SqliteCustomerRepository::new(pool.clone())),
            order: Arc::new(SqliteOrderRepository::new(pool.clone())),
            product: Arc::new(SqliteProductRepository::new(pool.clone())),
            health: Arc::new(SqliteHealthProbe::new(pool)),
        }
    }
}
