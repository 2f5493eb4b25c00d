use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::sales::models::{NewSale, Sale};

/// Repository for the `sales` table
#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Sale>>;

    /// Insert a sale; fails with a validation error when the product does
    /// not exist
    async fn save(&self, sale: NewSale) -> Result<Sale>;
}

pub struct MySqlSaleRepository {
    pool: MySqlPool,
}

impl MySqlSaleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for MySqlSaleRepository {
    async fn find_all(&self) -> Result<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>("SELECT `id`, `product_id`, `quantity` FROM sales")
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }

    async fn save(&self, sale: NewSale) -> Result<Sale> {
        let result = sqlx::query("INSERT INTO sales (`product_id`, `quantity`) VALUES (?, ?)")
            .bind(sale.product_id)
            .bind(sale.quantity)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_foreign_key_violation() {
                        return AppError::validation(format!(
                            "product {} does not exist",
                            sale.product_id
                        ));
                    }
                }
                AppError::from(e)
            })?;

        Ok(sale.into_sale(result.last_insert_id() as i64))
    }
}
