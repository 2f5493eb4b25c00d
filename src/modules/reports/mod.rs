pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CustomerInvoicesByCondition, CustomerSpent, ProductAmount};
pub use repositories::{MySqlReportRepository, ReportRepository};
pub use services::ReportService;
