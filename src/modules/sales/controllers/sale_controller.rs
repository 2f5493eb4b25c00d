use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::response;
use crate::modules::sales::models::NewSale;
use crate::modules::sales::services::SaleService;

/// GET /sales
pub async fn list_sales(service: web::Data<Arc<SaleService>>) -> HttpResponse {
    match service.find_all().await {
        Ok(sales) => response::ok("sales found", sales),
        Err(err) => {
            error!(error = %err, "Failed to list sales");
            err.to_public_response("error getting sales")
        }
    }
}

/// POST /sales
pub async fn create_sale(
    service: web::Data<Arc<SaleService>>,
    request: web::Json<NewSale>,
) -> HttpResponse {
    match service.create(request.into_inner()).await {
        Ok(sale) => response::created("sale created", sale),
        Err(err) => {
            error!(error = %err, "Failed to record sale");
            err.to_public_response("error creating sale")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("", web::get().to(list_sales))
            .route("", web::post().to(create_sale)),
    );
}
