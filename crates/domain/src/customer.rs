use crate::errors::DomainError;
use std::fmt;

const MAX_NAME_LEN: usize = 255;
const MAX_PHONE_LEN: usize = 20;

/// A CRM customer. Orders reference it and are removed with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            phone: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidCustomer(
                "name cannot be empty".to_string(),
            ));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidCustomer(format!(
                "name cannot exceed {} characters",
                MAX_NAME_LEN
            )));
        }

        let valid_email = self
            .email
            .split_once('@')
            .is_some_and(|(local, host)| !local.is_empty() && host.contains('.'));
        if !valid_email {
            return Err(DomainError::InvalidCustomer(format!(
                "invalid email: {}",
                self.email
            )));
        }

        if let Some(phone) = &self.phone {
            if phone.len() > MAX_PHONE_LEN {
                return Err(DomainError::InvalidCustomer(format!(
                    "phone cannot exceed {} characters",
                    MAX_PHONE_LEN
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}
