use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::products::models::{NewProduct, Product};
use crate::modules::products::repositories::ProductRepository;

/// Service for product listing and creation
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Product>> {
        self.product_repo.find_all().await
    }

    pub async fn create(&self, request: NewProduct) -> Result<Product> {
        request.validate()?;

        let product = self.product_repo.save(request).await?;
        info!(product_id = product.id, "Product created");

        Ok(product)
    }
}
