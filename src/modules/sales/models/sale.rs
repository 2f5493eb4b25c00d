use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// Units of one product sold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

/// Request body for recording a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSale {
    pub product_id: i64,
    pub quantity: i32,
}

impl NewSale {
    pub fn validate(&self) -> Result<()> {
        if self.product_id <= 0 {
            return Err(AppError::validation("product_id must be a positive id"));
        }
        if self.quantity < 0 {
            return Err(AppError::validation("quantity must not be negative"));
        }
        Ok(())
    }

    pub fn into_sale(self, id: i64) -> Sale {
        Sale {
            id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}
