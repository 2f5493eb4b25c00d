use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::invoices::models::{Invoice, NewInvoice};
use crate::modules::invoices::repositories::InvoiceRepository;

/// Service for invoice listing and creation
pub struct InvoiceService {
    invoice_repo: Arc<dyn InvoiceRepository>,
}

impl InvoiceService {
    pub fn new(invoice_repo: Arc<dyn InvoiceRepository>) -> Self {
        Self { invoice_repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Invoice>> {
        self.invoice_repo.find_all().await
    }

    pub async fn create(&self, request: NewInvoice) -> Result<Invoice> {
        request.validate()?;

        let invoice = self.invoice_repo.save(request).await?;
        info!(
            invoice_id = invoice.id,
            customer_id = invoice.customer_id,
            "Invoice created"
        );

        Ok(invoice)
    }
}
