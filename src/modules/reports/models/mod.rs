pub mod report_records;

pub use report_records::{
    CustomerInvoicesByCondition, CustomerSpent, ProductAmount, ACTIVE_CONDITION,
};
