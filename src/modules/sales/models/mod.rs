pub mod sale;

pub use sale::{NewSale, Sale};
