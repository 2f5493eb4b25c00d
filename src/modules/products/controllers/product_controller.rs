use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::response;
use crate::modules::products::models::NewProduct;
use crate::modules::products::services::ProductService;

/// GET /products
pub async fn list_products(service: web::Data<Arc<ProductService>>) -> HttpResponse {
    match service.find_all().await {
        Ok(products) => response::ok("products found", products),
        Err(err) => {
            error!(error = %err, "Failed to list products");
            err.to_public_response("error getting products")
        }
    }
}

/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<NewProduct>,
) -> HttpResponse {
    match service.create(request.into_inner()).await {
        Ok(product) => response::created("product created", product),
        Err(err) => {
            error!(error = %err, "Failed to create product");
            err.to_public_response("error creating product")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list_products))
            .route("", web::post().to(create_product)),
    );
}
