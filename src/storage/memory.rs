//! In-process store holding the four base tables.
//!
//! Implements every repository trait with the same semantics as the MySQL
//! queries: inner-join aggregation, descending rank with a stable sort (ties
//! keep insertion order), groups emitted in order of first appearance, and
//! `ROUND(x, 2)` rounding half away from zero. Money values outside the
//! `DECIMAL(10, 2)` range are rejected on insert.

use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};
use tokio::sync::RwLock;

use crate::core::amount::check_range;
use crate::core::{AppError, Result};
use crate::modules::customers::models::{Customer, NewCustomer};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::invoices::models::{Invoice, NewInvoice};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::products::models::{NewProduct, Product};
use crate::modules::products::repositories::ProductRepository;
use crate::modules::reports::models::{
    CustomerInvoicesByCondition, CustomerSpent, ProductAmount, ACTIVE_CONDITION,
};
use crate::modules::reports::repositories::ReportRepository;
use crate::modules::sales::models::{NewSale, Sale};
use crate::modules::sales::repositories::SaleRepository;

#[derive(Debug, Default)]
struct Tables {
    customers: Vec<Customer>,
    products: Vec<Product>,
    invoices: Vec<Invoice>,
    sales: Vec<Sale>,
}

/// Auto-increment style id: one past the largest id in use
fn next_id<T>(rows: &[T], id: impl Fn(&T) -> i64) -> i64 {
    rows.iter().map(id).max().unwrap_or(0) + 1
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Customer>> {
        Ok(self.tables.read().await.customers.clone())
    }

    async fn save(&self, customer: NewCustomer) -> Result<Customer> {
        let mut tables = self.tables.write().await;
        let id = next_id(&tables.customers, |c| c.id);
        let customer = customer.into_customer(id);
        tables.customers.push(customer.clone());
        Ok(customer)
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn save(&self, product: NewProduct) -> Result<Product> {
        check_range("price", product.price)?;

        let mut tables = self.tables.write().await;
        let id = next_id(&tables.products, |p| p.id);
        let product = product.into_product(id);
        tables.products.push(product.clone());
        Ok(product)
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Invoice>> {
        Ok(self.tables.read().await.invoices.clone())
    }

    async fn save(&self, invoice: NewInvoice) -> Result<Invoice> {
        check_range("total", invoice.total)?;

        let mut tables = self.tables.write().await;
        if !tables.customers.iter().any(|c| c.id == invoice.customer_id) {
            return Err(AppError::validation(format!(
                "customer {} does not exist",
                invoice.customer_id
            )));
        }

        let id = next_id(&tables.invoices, |i| i.id);
        let invoice = invoice.into_invoice(id);
        tables.invoices.push(invoice.clone());
        Ok(invoice)
    }
}

#[async_trait]
impl SaleRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Sale>> {
        Ok(self.tables.read().await.sales.clone())
    }

    async fn save(&self, sale: NewSale) -> Result<Sale> {
        let mut tables = self.tables.write().await;
        if !tables.products.iter().any(|p| p.id == sale.product_id) {
            return Err(AppError::validation(format!(
                "product {} does not exist",
                sale.product_id
            )));
        }

        let id = next_id(&tables.sales, |s| s.id);
        let sale = sale.into_sale(id);
        tables.sales.push(sale.clone());
        Ok(sale)
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    async fn top_active_customers_by_spend(&self, limit: u32) -> Result<Vec<CustomerSpent>> {
        let tables = self.tables.read().await;

        let mut ranked: Vec<CustomerSpent> = Vec::new();
        for c in tables.customers.iter().filter(|c| c.condition == ACTIVE_CONDITION) {
            let total = sum_decimal(
                tables
                    .invoices
                    .iter()
                    .filter(|i| i.customer_id == c.id)
                    .map(|i| i.total),
            )?;
            if let Some(total) = total {
                ranked.push(CustomerSpent::new(
                    c.first_name.clone(),
                    c.last_name.clone(),
                    total,
                ));
            }
        }

        // sort_by is stable
        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked.truncate(limit as usize);

        Ok(ranked)
    }

    async fn invoice_totals_by_condition(&self) -> Result<Vec<CustomerInvoicesByCondition>> {
        let tables = self.tables.read().await;

        let mut groups: Vec<CustomerInvoicesByCondition> = Vec::new();
        for customer in &tables.customers {
            for invoice in tables.invoices.iter().filter(|i| i.customer_id == customer.id) {
                match groups.iter_mut().find(|g| g.condition == customer.condition) {
                    Some(group) => group.total = add_totals(group.total, invoice.total)?,
                    None => groups.push(CustomerInvoicesByCondition::new(
                        customer.condition,
                        invoice.total,
                    )),
                }
            }
        }

        for group in &mut groups {
            group.total = group
                .total
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        }

        Ok(groups)
    }

    async fn top_products_by_quantity_sold(&self, limit: u32) -> Result<Vec<ProductAmount>> {
        let tables = self.tables.read().await;

        let mut ranked: Vec<ProductAmount> = tables
            .products
            .iter()
            .filter_map(|p| {
                let mut sold = tables.sales.iter().filter(|s| s.product_id == p.id).peekable();
                sold.peek()?;
                let total = sold.map(|s| i64::from(s.quantity)).sum();
                Some(ProductAmount::new(p.description.clone(), total))
            })
            .collect();

        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked.truncate(limit as usize);

        Ok(ranked)
    }
}

/// SUM semantics over an inner join: `None` when there are no rows
fn sum_decimal(mut values: impl Iterator<Item = Decimal>) -> Result<Option<Decimal>> {
    values.try_fold(None, |acc: Option<Decimal>, v| {
        add_totals(acc.unwrap_or(Decimal::ZERO), v).map(Some)
    })
}

fn add_totals(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| AppError::internal("invoice total sum overflowed"))
}
