use crate::errors::DomainError;
use std::fmt;

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
pub const DEFAULT_RESTOCK_INCREMENT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, price_cents: i64, stock: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price_cents,
            stock,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidProduct(
                "name cannot be empty".to_string(),
            ));
        }
        if self.price_cents < 1 {
            return Err(DomainError::InvalidProduct(
                "price must be at least 0.01".to_string(),
            ));
        }
        if self.stock < 0 {
            return Err(DomainError::InvalidProduct(
                "stock cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - ${}.{:02}",
            self.name,
            self.price_cents / 100,
            self.price_cents % 100
        )
    }
}

/// Products strictly below `threshold` get `increment` units added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestockPolicy {
    pub threshold: i64,
    pub increment: i64,
}

impl RestockPolicy {
    pub fn new(threshold: i64, increment: i64) -> Self {
        Self {
            threshold,
            increment,
        }
    }

    pub fn is_low(&self, stock: i64) -> bool {
        stock < self.threshold
    }

    pub fn restocked(&self, stock: i64) -> i64 {
        stock + self.increment
    }
}

impl Default for RestockPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_RESTOCK_INCREMENT)
    }
}
