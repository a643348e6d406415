pub mod aggregate;
pub mod dto;
pub mod queue;
pub mod view_model;

pub use aggregate::{reconcile, Cart, CartLine, CartTotals};
pub use dto::{CartMutation, CartMutationResponse};
pub use queue::{CartJob, CartJobQueue};
pub use view_model::{CartLineView, CartView};
