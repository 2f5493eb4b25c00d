use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::response;
use crate::modules::invoices::models::NewInvoice;
use crate::modules::invoices::services::InvoiceService;

/// List invoices
/// GET /invoices
pub async fn list_invoices(service: web::Data<Arc<InvoiceService>>) -> HttpResponse {
    match service.find_all().await {
        Ok(invoices) => response::ok("invoices found", invoices),
        Err(err) => {
            error!(error = %err, "Failed to list invoices");
            err.to_public_response("error getting invoices")
        }
    }
}

/// Create an invoice
/// POST /invoices
pub async fn create_invoice(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<NewInvoice>,
) -> HttpResponse {
    match service.create(request.into_inner()).await {
        Ok(invoice) => response::created("invoice created", invoice),
        Err(err) => {
            error!(error = %err, "Failed to create invoice");
            err.to_public_response("error creating invoice")
        }
    }
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("", web::get().to(list_invoices))
            .route("", web::post().to(create_invoice)),
    );
}
