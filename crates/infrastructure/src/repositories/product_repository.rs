use async_trait::async_trait;
use crm_housekeeping_application::ports::ProductRepository;
use crm_housekeeping_domain::{DomainError, Product, RestockPolicy};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type ProductRow = (i64, String, i64, i64);

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: ProductRow) -> Product {
        let (id, name, price_cents, stock) = row;
        Product {
            id: Some(id),
            name,
            price_cents,
            stock,
        }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn create(&self, product: &Product) -> Result<Product, DomainError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, price_cents, stock)
             VALUES (?, ?, ?)
             RETURNING id, name, price_cents, stock",
        )
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create product");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_product(row))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count products");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn restock_below(&self, policy: RestockPolicy) -> Result<Vec<Product>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin restock transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut rows = sqlx::query_as::<_, ProductRow>(
            "UPDATE products SET
                 stock = stock + ?,
                 updated_at = CURRENT_TIMESTAMP
             WHERE stock < ?
             RETURNING id, name, price_cents, stock",
        )
        .bind(policy.increment)
        .bind(policy.threshold)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to restock products");
            DomainError::DatabaseError(e.to_string())
        })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit restock transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        // RETURNING order is unspecified in SQLite
        rows.sort_by_key(|row| row.0);
        Ok(rows.into_iter().map(Self::row_to_product).collect())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete products");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
