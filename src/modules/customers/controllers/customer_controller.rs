use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::response;
use crate::modules::customers::models::NewCustomer;
use crate::modules::customers::services::CustomerService;

/// List customers
/// GET /customers
pub async fn list_customers(service: web::Data<Arc<CustomerService>>) -> HttpResponse {
    match service.find_all().await {
        Ok(customers) => response::ok("customers found", customers),
        Err(err) => {
            error!(error = %err, "Failed to list customers");
            err.to_public_response("error getting customers")
        }
    }
}

/// Create a customer
/// POST /customers
pub async fn create_customer(
    service: web::Data<Arc<CustomerService>>,
    request: web::Json<NewCustomer>,
) -> HttpResponse {
    match service.create(request.into_inner()).await {
        Ok(customer) => response::created("customer created", customer),
        Err(err) => {
            error!(error = %err, "Failed to create customer");
            err.to_public_response("error saving customer")
        }
    }
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(list_customers))
            .route("", web::post().to(create_customer)),
    );
}
