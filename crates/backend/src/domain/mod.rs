pub mod a001_customer;
pub mod a002_order;
pub mod a003_provider;
pub mod a004_invoice;
