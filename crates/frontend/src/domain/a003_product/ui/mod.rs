pub mod product_grid;

pub use product_grid::ProductGrid;
