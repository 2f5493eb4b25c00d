pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Invoice, NewInvoice};
pub use repositories::{InvoiceRepository, MySqlInvoiceRepository};
pub use services::InvoiceService;
