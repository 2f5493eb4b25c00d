use std::sync::Arc;

use tracing::debug;

use crate::config::ReportsConfig;
use crate::core::Result;
use crate::modules::reports::models::{CustomerInvoicesByCondition, CustomerSpent, ProductAmount};
use crate::modules::reports::repositories::ReportRepository;

/// Service for business reports
///
/// Applies the configured result-count limits and forwards to the
/// repository. Records and errors pass through untouched.
pub struct ReportService {
    report_repo: Arc<dyn ReportRepository>,
    limits: ReportsConfig,
}

impl ReportService {
    pub fn new(report_repo: Arc<dyn ReportRepository>, limits: ReportsConfig) -> Self {
        Self { report_repo, limits }
    }

    /// Highest-spending active customers
    pub async fn top_spenders(&self) -> Result<Vec<CustomerSpent>> {
        debug!(limit = self.limits.top_customers_limit, "Computing top spenders");

        self.report_repo
            .top_active_customers_by_spend(self.limits.top_customers_limit)
            .await
    }

    /// Invoice totals per customer condition
    pub async fn invoices_by_condition(&self) -> Result<Vec<CustomerInvoicesByCondition>> {
        debug!("Computing invoice totals by condition");

        self.report_repo.invoice_totals_by_condition().await
    }

    /// Best-selling products by quantity
    pub async fn top_products(&self) -> Result<Vec<ProductAmount>> {
        debug!(limit = self.limits.top_products_limit, "Computing top products");

        self.report_repo
            .top_products_by_quantity_sold(self.limits.top_products_limit)
            .await
    }
}
