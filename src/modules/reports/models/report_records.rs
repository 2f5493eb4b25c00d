use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Condition code marking a customer as active
pub const ACTIVE_CONDITION: i32 = 1;

/// Total invoiced amount for a single customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CustomerSpent {
    pub first_name: String,
    pub last_name: String,
    /// Sum of `invoices.total` for this customer
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Invoice total for every customer sharing a condition code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CustomerInvoicesByCondition {
    pub condition: i32,
    /// Sum of `invoices.total`, rounded to two decimals after summing
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Quantity sold for a single product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductAmount {
    pub description: String,
    /// Sum of `sales.quantity` for this product
    pub total: i64,
}

impl CustomerSpent {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, total: Decimal) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            total,
        }
    }
}

impl CustomerInvoicesByCondition {
    pub fn new(condition: i32, total: Decimal) -> Self {
        Self { condition, total }
    }
}

impl ProductAmount {
    pub fn new(description: impl Into<String>, total: i64) -> Self {
        Self {
            description: description.into(),
            total,
        }
    }
}
