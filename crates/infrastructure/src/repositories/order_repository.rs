use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_housekeeping_application::ports::OrderRepository;
use crm_housekeeping_domain::{timestamp, DomainError, Order, OrderItem, OrderReminder};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    #[instrument(
        skip(self, order, items),
        fields(customer_id = order.customer_id, items = items.len())
    )]
    async fn create(&self, order: &Order, items: &[OrderItem]) -> Result<Order, DomainError> {
        order.validate()?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin order transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let (id, order_date): (i64, String) = sqlx::query_as(
            "INSERT INTO orders (customer_id, total_amount_cents, order_date)
             VALUES (?, ?, COALESCE(?, CURRENT_TIMESTAMP))
             RETURNING id, datetime(order_date)",
        )
        .bind(order.customer_id)
        .bind(order.total_amount_cents)
        .bind(&order.order_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create order");
            DomainError::DatabaseError(e.to_string())
        })?;

        for item in items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price_cents)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(id)
            .bind(item.product_id)
            .bind(i64::from(item.quantity))
            .bind(item.price_cents)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, product_id = item.product_id, "Failed to create order item");
                DomainError::DatabaseError(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit order transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Order {
            id: Some(id),
            customer_id: order.customer_id,
            total_amount_cents: order.total_amount_cents,
            order_date: Some(order_date),
        })
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count orders");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<OrderReminder>, DomainError> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT o.id, c.email, datetime(o.order_date) as order_date
             FROM orders o
             JOIN customers c ON c.id = o.customer_id
             WHERE datetime(o.order_date) >= datetime(?)
             ORDER BY datetime(o.order_date) DESC, o.id DESC",
        )
        .bind(timestamp::to_db(since))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch recent orders");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|(order_id, customer_email, order_date)| OrderReminder {
                order_id,
                customer_email,
                order_date,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM orders")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete orders");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
