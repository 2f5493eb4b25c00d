use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// A customer as stored in the `customers` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Status code, 1 = active, 0 = inactive
    pub condition: i32,
}

/// Request body for creating a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub condition: i32,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::validation("first_name must not be empty"));
        }
        if self.last_name.trim().is_empty() {
            return Err(AppError::validation("last_name must not be empty"));
        }
        Ok(())
    }

    /// Attach the store-assigned id
    pub fn into_customer(self, id: i64) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            condition: self.condition,
        }
    }
}
