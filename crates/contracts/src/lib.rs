//! Shared contracts for the ShopCloud client: wire DTOs plus the pure state
//! logic (cart totals, table filtering, report share links) the pages render.

pub mod dashboards;
pub mod domain;
pub mod shared;
