//! Fantasy Products storefront API
//!
//! CRUD endpoints for customers, products, invoices and sales, plus
//! aggregated business reports computed by the store.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod storage;

// Re-export commonly used types
pub use modules::customers;
pub use modules::invoices;
pub use modules::products;
pub use modules::reports;
pub use modules::sales;
pub use modules::AppServices;
