use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{Invoice, NewInvoice};

/// Repository for the `invoices` table
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Invoice>>;

    /// Insert an invoice; fails with a validation error when the customer
    /// does not exist
    async fn save(&self, invoice: NewInvoice) -> Result<Invoice>;
}

pub struct MySqlInvoiceRepository {
    pool: MySqlPool,
}

impl MySqlInvoiceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for MySqlInvoiceRepository {
    async fn find_all(&self) -> Result<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT `id`, `customer_id`, `total` FROM invoices",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn save(&self, invoice: NewInvoice) -> Result<Invoice> {
        let result = sqlx::query("INSERT INTO invoices (`customer_id`, `total`) VALUES (?, ?)")
            .bind(invoice.customer_id)
            .bind(invoice.total)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_foreign_key_violation() {
                        return AppError::validation(format!(
                            "customer {} does not exist",
                            invoice.customer_id
                        ));
                    }
                }
                AppError::from(e)
            })?;

        Ok(invoice.into_invoice(result.last_insert_id() as i64))
    }
}
