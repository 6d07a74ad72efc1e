use crate::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crm_housekeeping_domain::{Customer, DomainError, Order, OrderItem, Product};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub customers: u64,
    pub products: u64,
    pub orders: u64,
}

/// Use case: replace the store's contents with a small demo dataset.
/// Destructive; intended for local and staging databases.
pub struct SeedSampleDataUseCase {
    customer_repo: Arc<dyn CustomerRepository>,
    product_repo: Arc<dyn ProductRepository>,
    order_repo: Arc<dyn OrderRepository>,
}

impl SeedSampleDataUseCase {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        product_repo: Arc<dyn ProductRepository>,
        order_repo: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            customer_repo,
            product_repo,
            order_repo,
        }
    }

    pub async fn execute(&self) -> Result<SeedSummary, DomainError> {
        self.order_repo.delete_all().await?;
        self.product_repo.delete_all().await?;
        self.customer_repo.delete_all().await?;

        let customers = [
            Customer::new("John Doe", "john@example.com").with_phone("+1234567890"),
            Customer::new("Jane Smith", "jane@example.com").with_phone("123-456-7890"),
            Customer::new("Bob Johnson", "bob@example.com").with_phone("+447912345678"),
        ];
        let mut created_customers = Vec::with_capacity(customers.len());
        for customer in &customers {
            customer.validate()?;
            created_customers.push(self.customer_repo.create(customer).await?);
        }
        info!(count = created_customers.len(), "Customers seeded");

        let products = [
            Product::new("Laptop", 99_999, 10),
            Product::new("Mouse", 2_999, 50),
            Product::new("Keyboard", 7_999, 30),
            Product::new("Monitor", 29_999, 15),
        ];
        let mut created_products = Vec::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            created_products.push(self.product_repo.create(product).await?);
        }
        info!(count = created_products.len(), "Products seeded");

        let john = id_of(&created_customers[0].id, "customer")?;
        let jane = id_of(&created_customers[1].id, "customer")?;
        let laptop = &created_products[0];
        let mouse = &created_products[1];
        let keyboard = &created_products[2];

        let orders = [
            (john, vec![laptop, mouse]),
            (jane, vec![keyboard]),
        ];
        for (customer_id, lines) in &orders {
            let total: i64 = lines.iter().map(|p| p.price_cents).sum();
            let mut items = Vec::with_capacity(lines.len());
            for product in lines {
                items.push(OrderItem::new(
                    0,
                    id_of(&product.id, "product")?,
                    1,
                    product.price_cents,
                ));
            }
            let order = Order::new(*customer_id, total);
            order.validate()?;
            self.order_repo.create(&order, &items).await?;
        }
        info!(count = orders.len(), "Orders seeded");

        Ok(SeedSummary {
            customers: created_customers.len() as u64,
            products: created_products.len() as u64,
            orders: orders.len() as u64,
        })
    }
}

fn id_of(id: &Option<i64>, kind: &str) -> Result<i64, DomainError> {
    id.ok_or_else(|| DomainError::NotFound(format!("{} was created without an id", kind)))
}
