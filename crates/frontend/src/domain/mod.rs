pub mod a001_cart;
pub mod a002_bill;
pub mod a003_product;
