mod report_controller;

pub use report_controller::{
    configure, get_invoices_by_condition, get_top_products, get_top_spenders,
};
