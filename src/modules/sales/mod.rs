pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewSale, Sale};
pub use repositories::{MySqlSaleRepository, SaleRepository};
pub use services::SaleService;
