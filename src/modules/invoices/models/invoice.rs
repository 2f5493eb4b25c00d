use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::amount::validate_amount;
use crate::core::{AppError, Result};

/// An invoice billed to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i64,
    pub customer_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Request body for creating an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvoice {
    pub customer_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl NewInvoice {
    pub fn validate(&self) -> Result<()> {
        if self.customer_id <= 0 {
            return Err(AppError::validation("customer_id must be a positive id"));
        }
        validate_amount("total", self.total)
    }

    pub fn into_invoice(self, id: i64) -> Invoice {
        Invoice {
            id,
            customer_id: self.customer_id,
            total: self.total,
        }
    }
}
