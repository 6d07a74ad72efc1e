#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use crm_housekeeping_application::ports::{
    Clock, CustomerRepository, HealthProbe, OrderRepository, ProductRepository,
};
use crm_housekeeping_domain::{
    Customer, DomainError, InactivityPolicy, Order, OrderItem, OrderReminder, Product,
    RestockPolicy,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Customers plus the timestamps of their orders, enough to model
/// the inactivity query.
pub struct MockCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
    order_dates: Arc<RwLock<HashMap<i64, Vec<DateTime<Utc>>>>>,
    next_id: AtomicU64,
    should_fail: AtomicBool,
    last_cutoff: Arc<RwLock<Option<DateTime<Utc>>>>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(Vec::new())),
            order_dates: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
            should_fail: AtomicBool::new(false),
            last_cutoff: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn add_customer(&self, name: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) as i64;
        let mut customer = Customer::new(name, format!("{}@example.com", name.to_lowercase()));
        customer.id = Some(id);
        self.customers.write().await.push(customer);
        id
    }

    pub async fn add_order_at(&self, customer_id: i64, at: DateTime<Utc>) {
        self.order_dates
            .write()
            .await
            .entry(customer_id)
            .or_default()
            .push(at);
    }

    pub async fn names(&self) -> Vec<String> {
        self.customers
            .read()
            .await
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    pub async fn last_cutoff(&self) -> Option<DateTime<Utc>> {
        *self.last_cutoff.read().await
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        Ok(())
    }

    fn is_active(
        customer: &Customer,
        order_dates: &HashMap<i64, Vec<DateTime<Utc>>>,
        cutoff: DateTime<Utc>,
    ) -> bool {
        let last_order_at = customer
            .id
            .and_then(|id| order_dates.get(&id))
            .and_then(|dates| dates.iter().max().copied());
        !InactivityPolicy::is_inactive(last_order_at, cutoff)
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError> {
        self.check_fail()?;
        let mut created = customer.clone();
        created.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed) as i64);
        self.customers.write().await.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_fail()?;
        Ok(self.customers.read().await.len() as u64)
    }

    async fn count_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.check_fail()?;
        let order_dates = self.order_dates.read().await;
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .filter(|c| !Self::is_active(c, &order_dates, cutoff))
            .count() as u64)
    }

    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.check_fail()?;
        *self.last_cutoff.write().await = Some(cutoff);

        let order_dates = self.order_dates.read().await;
        let mut customers = self.customers.write().await;
        let before = customers.len();
        customers.retain(|c| Self::is_active(c, &order_dates, cutoff));
        Ok((before - customers.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        self.check_fail()?;
        let mut customers = self.customers.write().await;
        let removed = customers.len() as u64;
        customers.clear();
        self.order_dates.write().await.clear();
        Ok(removed)
    }
}

pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<(Order, Vec<OrderItem>, String)>>>,
    next_id: AtomicU64,
    should_fail: AtomicBool,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicU64::new(1),
            should_fail: AtomicBool::new(false),
        }
    }

    pub async fn add_order(&self, email: &str, at: DateTime<Utc>) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) as i64;
        let mut order = Order::new(0, 1_000);
        order.id = Some(id);
        order.order_date = Some(at.format("%Y-%m-%d %H:%M:%S").to_string());
        self.orders
            .write()
            .await
            .push((order, Vec::new(), email.to_string()));
        id
    }

    pub async fn items_for(&self, order_id: i64) -> Vec<OrderItem> {
        self.orders
            .read()
            .await
            .iter()
            .find(|(o, _, _)| o.id == Some(order_id))
            .map(|(_, items, _)| items.clone())
            .unwrap_or_default()
    }

    pub async fn all(&self) -> Vec<Order> {
        self.orders
            .read()
            .await
            .iter()
            .map(|(o, _, _)| o.clone())
            .collect()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("no such table: orders".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn create(&self, order: &Order, items: &[OrderItem]) -> Result<Order, DomainError> {
        self.check_fail()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) as i64;
        let mut created = order.clone();
        created.id = Some(id);
        created.order_date = Some(fixed_now().format("%Y-%m-%d %H:%M:%S").to_string());
        let items = items
            .iter()
            .map(|item| OrderItem {
                order_id: id,
                ..item.clone()
            })
            .collect();
        self.orders
            .write()
            .await
            .push((created.clone(), items, String::new()));
        Ok(created)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_fail()?;
        Ok(self.orders.read().await.len() as u64)
    }

    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<OrderReminder>, DomainError> {
        self.check_fail()?;
        let since = since.format("%Y-%m-%d %H:%M:%S").to_string();
        let mut reminders: Vec<OrderReminder> = self
            .orders
            .read()
            .await
            .iter()
            .filter_map(|(order, _, email)| {
                let date = order.order_date.clone()?;
                (date >= since).then(|| OrderReminder {
                    order_id: order.id.unwrap_or_default(),
                    customer_email: email.clone(),
                    order_date: date,
                })
            })
            .collect();
        reminders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(reminders)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        self.check_fail()?;
        let mut orders = self.orders.write().await;
        let removed = orders.len() as u64;
        orders.clear();
        Ok(removed)
    }
}

pub struct MockProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    next_id: AtomicU64,
    should_fail: AtomicBool,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicU64::new(1),
            should_fail: AtomicBool::new(false),
        }
    }

    pub async fn with_products(products: Vec<(&str, i64)>) -> Self {
        let repo = Self::new();
        for (name, stock) in products {
            repo.create(&Product::new(name, 1_000, stock)).await.unwrap();
        }
        repo
    }

    pub async fn stock_of(&self, name: &str) -> Option<i64> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.stock)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn create(&self, product: &Product) -> Result<Product, DomainError> {
        self.check_fail()?;
        let mut created = product.clone();
        created.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed) as i64);
        self.products.write().await.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_fail()?;
        Ok(self.products.read().await.len() as u64)
    }

    async fn restock_below(&self, policy: RestockPolicy) -> Result<Vec<Product>, DomainError> {
        self.check_fail()?;
        let mut updated = Vec::new();
        for product in self.products.write().await.iter_mut() {
            if policy.is_low(product.stock) {
                product.stock = policy.restocked(product.stock);
                updated.push(product.clone());
            }
        }
        Ok(updated)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        self.check_fail()?;
        let mut products = self.products.write().await;
        let removed = products.len() as u64;
        products.clear();
        Ok(removed)
    }
}

pub struct MockHealthProbe {
    healthy: AtomicBool,
    calls: AtomicU64,
}

impl MockHealthProbe {
    pub fn new(healthy: bool) -> Self {
        Self {
            healthy: AtomicBool::new(healthy),
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HealthProbe for MockHealthProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.healthy.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(DomainError::DatabaseError("unable to open database file".to_string()))
        }
    }
}
