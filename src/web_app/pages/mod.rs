// web_app/pages/mod.rs - Page components module
//
// - ProductsPage: product create/edit form and product table

pub mod products;

// Re-export page components
pub use products::ProductsPage;
