use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::sales::models::{NewSale, Sale};
use crate::modules::sales::repositories::SaleRepository;

pub struct SaleService {
    sale_repo: Arc<dyn SaleRepository>,
}

impl SaleService {
    pub fn new(sale_repo: Arc<dyn SaleRepository>) -> Self {
        Self { sale_repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Sale>> {
        self.sale_repo.find_all().await
    }

    pub async fn create(&self, request: NewSale) -> Result<Sale> {
        request.validate()?;

        let sale = self.sale_repo.save(request).await?;
        info!(sale_id = sale.id, product_id = sale.product_id, "Sale recorded");

        Ok(sale)
    }
}
