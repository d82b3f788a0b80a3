// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, FormField)
// - product.rs: Product form and table

pub mod common;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;
