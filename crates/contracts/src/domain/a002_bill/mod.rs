pub mod dto;

pub use dto::{bill_detail_path, BillDraft, CreateBillRequest, CreateBillResponse, PaymentType};
