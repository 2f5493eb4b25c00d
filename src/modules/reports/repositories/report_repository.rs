use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::reports::models::{
    CustomerInvoicesByCondition, CustomerSpent, ProductAmount, ACTIVE_CONDITION,
};

/// Repository for report aggregation queries
///
/// Every operation is a single read-only statement. Implementations return
/// either the complete sequence or an error, never a partial result, and
/// leave logging to their callers.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Active customers ranked by the sum of their invoice totals, highest
    /// first, truncated to `limit`. Customers without invoices are excluded.
    async fn top_active_customers_by_spend(&self, limit: u32) -> Result<Vec<CustomerSpent>>;

    /// Invoice totals grouped by the owning customer's condition, rounded to
    /// two decimals after summing. Conditions without invoices are omitted.
    async fn invoice_totals_by_condition(&self) -> Result<Vec<CustomerInvoicesByCondition>>;

    /// Products ranked by total quantity sold, highest first, truncated to
    /// `limit`. Products without sales are excluded.
    async fn top_products_by_quantity_sold(&self, limit: u32) -> Result<Vec<ProductAmount>>;
}

// Ties on `total` and the order of condition groups are left to MySQL.
const TOP_ACTIVE_CUSTOMERS_SQL: &str = r#"
    SELECT c.`first_name`, c.`last_name`, SUM(i.`total`) AS `total`
    FROM customers AS c
    INNER JOIN invoices AS i ON c.`id` = i.`customer_id`
    WHERE c.`condition` = ?
    GROUP BY c.`id`
    ORDER BY `total` DESC
    LIMIT ?
"#;

const INVOICE_TOTALS_BY_CONDITION_SQL: &str = r#"
    SELECT c.`condition`, ROUND(SUM(i.`total`), 2) AS `total`
    FROM customers AS c
    INNER JOIN invoices AS i ON c.`id` = i.`customer_id`
    GROUP BY c.`condition`
"#;

// SUM over an INT column comes back as DECIMAL in MySQL.
const TOP_PRODUCTS_SQL: &str = r#"
    SELECT p.`description`, CAST(SUM(s.`quantity`) AS SIGNED) AS `total`
    FROM products AS p
    INNER JOIN sales AS s ON p.`id` = s.`product_id`
    GROUP BY p.`id`
    ORDER BY `total` DESC
    LIMIT ?
"#;

pub struct MySqlReportRepository {
    pool: MySqlPool,
}

impl MySqlReportRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for MySqlReportRepository {
    async fn top_active_customers_by_spend(&self, limit: u32) -> Result<Vec<CustomerSpent>> {
        let rows = sqlx::query_as::<_, CustomerSpent>(TOP_ACTIVE_CUSTOMERS_SQL)
            .bind(ACTIVE_CONDITION)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn invoice_totals_by_condition(&self) -> Result<Vec<CustomerInvoicesByCondition>> {
        let rows = sqlx::query_as::<_, CustomerInvoicesByCondition>(INVOICE_TOTALS_BY_CONDITION_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn top_products_by_quantity_sold(&self, limit: u32) -> Result<Vec<ProductAmount>> {
        let rows = sqlx::query_as::<_, ProductAmount>(TOP_PRODUCTS_SQL)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
