pub mod cart_panel;
pub mod customer_form;
pub mod page;

pub use page::PosPage;
