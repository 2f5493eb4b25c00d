use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::response;
use crate::modules::reports::services::ReportService;

/// Highest-spending active customers
/// GET /reports/customers/top-spenders
pub async fn get_top_spenders(service: web::Data<Arc<ReportService>>) -> HttpResponse {
    match service.top_spenders().await {
        Ok(customers) => response::ok("customers found", customers),
        Err(err) => {
            error!(error = %err, "Failed to compute top spenders");
            err.to_public_response("error getting customers")
        }
    }
}

/// Invoice totals grouped by customer condition
/// GET /reports/customers/invoices-by-condition
pub async fn get_invoices_by_condition(service: web::Data<Arc<ReportService>>) -> HttpResponse {
    match service.invoices_by_condition().await {
        Ok(groups) => response::ok("customers found", groups),
        Err(err) => {
            error!(error = %err, "Failed to compute invoice totals by condition");
            err.to_public_response("error get customers")
        }
    }
}

/// Best-selling products by quantity
/// GET /reports/products/top-sold
pub async fn get_top_products(service: web::Data<Arc<ReportService>>) -> HttpResponse {
    match service.top_products().await {
        Ok(products) => response::ok("products found", products),
        Err(err) => {
            error!(error = %err, "Failed to compute top products");
            err.to_public_response("error get top products")
        }
    }
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/customers/top-spenders", web::get().to(get_top_spenders))
            .route(
                "/customers/invoices-by-condition",
                web::get().to(get_invoices_by_condition),
            )
            .route("/products/top-sold", web::get().to(get_top_products)),
    );
}
