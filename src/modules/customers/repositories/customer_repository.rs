use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::customers::models::{Customer, NewCustomer};

/// Repository for the `customers` table
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers in store order
    async fn find_all(&self) -> Result<Vec<Customer>>;

    /// Insert a customer and return it with its assigned id
    async fn save(&self, customer: NewCustomer) -> Result<Customer>;
}

pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT `id`, `first_name`, `last_name`, `condition` FROM customers",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    async fn save(&self, customer: NewCustomer) -> Result<Customer> {
        let result = sqlx::query(
            "INSERT INTO customers (`first_name`, `last_name`, `condition`) VALUES (?, ?, ?)",
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(customer.condition)
        .execute(&self.pool)
        .await?;

        Ok(customer.into_customer(result.last_insert_id() as i64))
    }
}
