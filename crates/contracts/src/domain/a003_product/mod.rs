pub mod dto;

pub use dto::{
    PosCatalog, ProductCategoryFilter, ProductCategoryOption, ProductSearchItem,
    ProductSearchQuery, ProductSearchResponse,
};
