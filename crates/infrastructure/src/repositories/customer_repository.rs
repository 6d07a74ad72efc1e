use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_housekeeping_application::ports::CustomerRepository;
use crm_housekeeping_domain::{timestamp, Customer, DomainError};
use sqlx::SqlitePool;
use tracing::{error, instrument};

// Customers with no orders fall through NOT EXISTS as well. An order date
// SQLite cannot parse counts as recent, so the customer is kept.
const INACTIVE_FILTER: &str = "NOT EXISTS (
    SELECT 1 FROM orders o
    WHERE o.customer_id = customers.id
      AND (datetime(o.order_date) IS NULL
           OR datetime(o.order_date) >= datetime(?))
)";

type CustomerRow = (i64, String, String, Option<String>, String, String);

pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: CustomerRow) -> Customer {
        let (id, name, email, phone, created_at, updated_at) = row;
        Customer {
            id: Some(id),
            name,
            email,
            phone,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    #[instrument(skip(self, customer), fields(email = %customer.email))]
    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "INSERT INTO customers (name, email, phone)
             VALUES (?, ?, ?)
             RETURNING id, name, email, phone,
                       datetime(created_at) as created_at,
                       datetime(updated_at) as updated_at",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create customer");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_customer(row))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count customers");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn count_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM customers WHERE {}",
            INACTIVE_FILTER
        ))
        .bind(timestamp::to_db(cutoff))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to count inactive customers");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin cleanup transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let sql = format!("DELETE FROM customers WHERE {}", INACTIVE_FILTER);
        let result = sqlx::query(&sql)
            .bind(timestamp::to_db(cutoff))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete inactive customers");
                DomainError::DatabaseError(e.to_string())
            })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit cleanup transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM customers")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete customers");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
