use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::customers::models::{Customer, NewCustomer};
use crate::modules::customers::repositories::CustomerRepository;

/// Service for customer listing and creation
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Customer>> {
        self.customer_repo.find_all().await
    }

    /// Validate and persist a new customer
    pub async fn create(&self, request: NewCustomer) -> Result<Customer> {
        request.validate()?;

        let customer = self.customer_repo.save(request).await?;
        info!(customer_id = customer.id, "Customer created");

        Ok(customer)
    }
}
