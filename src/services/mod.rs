//! Typed upstream services.

pub mod categories;
pub mod products;

pub use categories::CategoriesService;
pub use products::ProductsService;
