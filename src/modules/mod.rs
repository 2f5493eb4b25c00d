pub mod customers;
pub mod health;
pub mod invoices;
pub mod products;
pub mod reports;
pub mod sales;

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::config::ReportsConfig;
use crate::middleware::json_error_handler;
use crate::storage::InMemoryStore;

use customers::{CustomerService, MySqlCustomerRepository};
use invoices::{InvoiceService, MySqlInvoiceRepository};
use products::{MySqlProductRepository, ProductService};
use reports::{MySqlReportRepository, ReportService};
use sales::{MySqlSaleRepository, SaleService};

/// Every service the HTTP layer depends on
#[derive(Clone)]
pub struct AppServices {
    pub customers: Arc<CustomerService>,
    pub products: Arc<ProductService>,
    pub invoices: Arc<InvoiceService>,
    pub sales: Arc<SaleService>,
    pub reports: Arc<ReportService>,
}

impl AppServices {
    /// Services backed by MySQL repositories sharing one pool
    pub fn mysql(pool: MySqlPool, limits: ReportsConfig) -> Self {
        Self {
            customers: Arc::new(CustomerService::new(Arc::new(MySqlCustomerRepository::new(
                pool.clone(),
            )))),
            products: Arc::new(ProductService::new(Arc::new(MySqlProductRepository::new(
                pool.clone(),
            )))),
            invoices: Arc::new(InvoiceService::new(Arc::new(MySqlInvoiceRepository::new(
                pool.clone(),
            )))),
            sales: Arc::new(SaleService::new(Arc::new(MySqlSaleRepository::new(
                pool.clone(),
            )))),
            reports: Arc::new(ReportService::new(
                Arc::new(MySqlReportRepository::new(pool)),
                limits,
            )),
        }
    }

    /// Services backed by a single in-process store
    pub fn in_memory(store: Arc<InMemoryStore>, limits: ReportsConfig) -> Self {
        Self {
            customers: Arc::new(CustomerService::new(store.clone())),
            products: Arc::new(ProductService::new(store.clone())),
            invoices: Arc::new(InvoiceService::new(store.clone())),
            sales: Arc::new(SaleService::new(store.clone())),
            reports: Arc::new(ReportService::new(store, limits)),
        }
    }

    /// Register services, the JSON body error handler, and all routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.customers.clone()))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(web::Data::new(self.invoices.clone()))
            .app_data(web::Data::new(self.sales.clone()))
            .app_data(web::Data::new(self.reports.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));

        health::controllers::configure(cfg);
        customers::controllers::configure(cfg);
        products::controllers::configure(cfg);
        invoices::controllers::configure(cfg);
        sales::controllers::configure(cfg);
        reports::controllers::configure(cfg);
    }
}
