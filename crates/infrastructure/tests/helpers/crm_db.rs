#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use crm_housekeeping_application::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crm_housekeeping_domain::{timestamp, Customer, Order, OrderItem, Product};
use crm_housekeeping_infrastructure::database::run_migrations;
use crm_housekeeping_infrastructure::repositories::{
    SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;

pub fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../migrations")
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> String {
    timestamp::to_db(fixed_now() - Duration::days(days))
}

pub async fn create_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool, &migrations_dir()).await.unwrap();
    pool
}

pub struct Repos {
    pub customers: SqliteCustomerRepository,
    pub orders: SqliteOrderRepository,
    pub products: SqliteProductRepository,
}

impl Repos {
    pub fn new(pool: &SqlitePool) -> Self {
        Self {
            customers: SqliteCustomerRepository::new(pool.clone()),
            orders: SqliteOrderRepository::new(pool.clone()),
            products: SqliteProductRepository::new(pool.clone()),
        }
    }

    pub async fn customer(&self, name: &str) -> i64 {
        let email = format!("{}@example.com", name.to_lowercase());
        self.customers
            .create(&Customer::new(name, email))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    pub async fn product(&self, name: &str, stock: i64) -> i64 {
        self.products
            .create(&Product::new(name, 1_000, stock))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    pub async fn order_at(&self, customer_id: i64, order_date: &str) -> i64 {
        let mut order = Order::new(customer_id, 1_000);
        order.order_date = Some(order_date.to_string());
        self.orders.create(&order, &[]).await.unwrap().id.unwrap()
    }

    pub async fn order_with_items(
        &self,
        customer_id: i64,
        order_date: &str,
        items: &[OrderItem],
    ) -> i64 {
        let mut order = Order::new(customer_id, 1_000);
        order.order_date = Some(order_date.to_string());
        self.orders.create(&order, items).await.unwrap().id.unwrap()
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

pub async fn customer_emails(pool: &SqlitePool) -> Vec<String> {
    sqlx::query_as::<_, (String,)>("SELECT email FROM customers ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|(email,)| email)
        .collect()
}
