//! Integration tests for the MySQL report queries
//!
//! Require a disposable MySQL database (TEST_DATABASE_URL). Run with:
//!
//!   cargo test --test report_repository_test -- --ignored

#[path = "../helpers/mod.rs"]
mod helpers;

use fantasy_products::customers::MySqlCustomerRepository;
use fantasy_products::invoices::MySqlInvoiceRepository;
use fantasy_products::products::MySqlProductRepository;
use fantasy_products::reports::{MySqlReportRepository, ReportRepository};
use fantasy_products::sales::MySqlSaleRepository;
use rust_decimal_macros::dec;
use sqlx::MySqlPool;

use helpers::{
    create_test_pool, database_lock, reset_database, seed_customers, seed_products,
    storefront_customers, storefront_products, SeedCustomer,
};

async fn seed_storefront(pool: &MySqlPool) {
    seed_customers(
        &MySqlCustomerRepository::new(pool.clone()),
        &MySqlInvoiceRepository::new(pool.clone()),
        storefront_customers(),
    )
    .await;
    seed_products(
        &MySqlProductRepository::new(pool.clone()),
        &MySqlSaleRepository::new(pool.clone()),
        storefront_products(),
    )
    .await;
}

#[tokio::test]
#[ignore]
async fn test_top_active_customers_by_spend() {
    let _guard = database_lock().await;
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    seed_storefront(&pool).await;

    let repo = MySqlReportRepository::new(pool);
    let result = repo.top_active_customers_by_spend(5).await.unwrap();

    let rows: Vec<(&str, _)> = result
        .iter()
        .map(|c| (c.last_name.as_str(), c.total))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Jordan", dec!(1200.00)),
            ("Connor", dec!(650.00)),
            ("Einstein", dec!(300.00)),
            ("Newton", dec!(150.00)),
            ("Curie", dec!(75.00)),
        ]
    );
}

#[tokio::test]
#[ignore]
async fn test_invoice_totals_by_condition() {
    let _guard = database_lock().await;
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    seed_storefront(&pool).await;

    let repo = MySqlReportRepository::new(pool);
    let mut result = repo.invoice_totals_by_condition().await.unwrap();
    result.sort_by_key(|g| g.condition);

    assert_eq!(result.len(), 2);
    assert_eq!((result[0].condition, result[0].total), (0, dec!(23.00)));
    assert_eq!((result[1].condition, result[1].total), (1, dec!(2415.00)));
}

#[tokio::test]
#[ignore]
async fn test_condition_totals_sum_cents_exactly() {
    let _guard = database_lock().await;
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    seed_customers(
        &MySqlCustomerRepository::new(pool.clone()),
        &MySqlInvoiceRepository::new(pool.clone()),
        vec![SeedCustomer {
            first_name: "Rounding",
            last_name: "Check",
            condition: 1,
            invoices: vec![dec!(10.01), dec!(10.02), dec!(10.03)],
        }],
    )
    .await;

    let repo = MySqlReportRepository::new(pool);
    let result = repo.invoice_totals_by_condition().await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].total, dec!(30.06));
}

#[tokio::test]
#[ignore]
async fn test_top_products_by_quantity_sold() {
    let _guard = database_lock().await;
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    seed_storefront(&pool).await;

    let repo = MySqlReportRepository::new(pool);

    let result = repo.top_products_by_quantity_sold(5).await.unwrap();
    let rows: Vec<(&str, i64)> = result
        .iter()
        .map(|p| (p.description.as_str(), p.total))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Wireless Mouse", 30),
            ("Mechanical Keyboard", 15),
            ("Headset", 12),
            ("Monitor", 8),
            ("Laptop", 5),
        ]
    );

    let all = repo.top_products_by_quantity_sold(100).await.unwrap();
    assert_eq!(all.len(), 6, "unsold products are excluded");
}

#[tokio::test]
#[ignore]
async fn test_reports_on_empty_database() {
    let _guard = database_lock().await;
    let pool = create_test_pool().await;
    reset_database(&pool).await;

    let repo = MySqlReportRepository::new(pool);

    assert!(repo.top_active_customers_by_spend(5).await.unwrap().is_empty());
    assert!(repo.invoice_totals_by_condition().await.unwrap().is_empty());
    assert!(repo.top_products_by_quantity_sold(5).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_limit_zero_returns_nothing() {
    let _guard = database_lock().await;
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    seed_storefront(&pool).await;

    let repo = MySqlReportRepository::new(pool);

    assert!(repo.top_active_customers_by_spend(0).await.unwrap().is_empty());
    assert!(repo.top_products_by_quantity_sold(0).await.unwrap().is_empty());
}
