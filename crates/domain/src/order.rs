use crate::errors::DomainError;
use crate::timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Option<i64>,
    pub customer_id: i64,
    pub total_amount_cents: i64,
    pub order_date: Option<String>,
}

impl Order {
    pub fn new(customer_id: i64, total_amount_cents: i64) -> Self {
        Self {
            id: None,
            customer_id,
            total_amount_cents,
            order_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total_amount_cents < 1 {
            return Err(DomainError::InvalidOrder(
                "total amount must be at least 0.01".to_string(),
            ));
        }
        if let Some(date) = &self.order_date {
            if timestamp::from_db(date).is_none() {
                return Err(DomainError::InvalidOrder(format!(
                    "order date '{}' is not a valid timestamp",
                    date
                )));
            }
        }
        Ok(())
    }
}

/// A product line inside an order. One row per (order, product).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: Option<i64>,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: u32,
    pub price_cents: i64,
}

impl OrderItem {
    pub fn new(order_id: i64, product_id: i64, quantity: u32, price_cents: i64) -> Self {
        Self {
            id: None,
            order_id,
            product_id,
            quantity,
            price_cents,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.quantity < 1 {
            return Err(DomainError::InvalidOrder(
                "quantity must be at least 1".to_string(),
            ));
        }
        if self.price_cents < 1 {
            return Err(DomainError::InvalidOrder(
                "item price must be at least 0.01".to_string(),
            ));
        }
        Ok(())
    }
}

/// Projection used by the reminder task: an order joined with its customer's email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReminder {
    pub order_id: i64,
    pub customer_email: String,
    pub order_date: String,
}
