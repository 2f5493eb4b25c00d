use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::products::models::{NewProduct, Product};

/// Repository for the `products` table
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>>;

    async fn save(&self, product: NewProduct) -> Result<Product>;
}

pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT `id`, `description`, `price` FROM products",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn save(&self, product: NewProduct) -> Result<Product> {
        let result = sqlx::query("INSERT INTO products (`description`, `price`) VALUES (?, ?)")
            .bind(&product.description)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        Ok(product.into_product(result.last_insert_id() as i64))
    }
}
