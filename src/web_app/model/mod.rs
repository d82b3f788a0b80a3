// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON exchanged with the remote products API
// and the edit/create state of the product form.

use serde::{Deserialize, Serialize};

/// Server-assigned product identifier
///
/// Opaque to the client: the backend may send a number or a string, and
/// the id is echoed back in URLs exactly as it arrived.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Int(id) => write!(f, "{}", id),
            ProductId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Int(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Str(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Str(id.to_string())
    }
}

/// Product as returned by `GET /api/products`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub nama: String,
    #[serde(default)]
    pub deskripsi: String,
    pub harga: i64,
    pub stock: i64,
}

/// Validated request body for create and update calls
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub nama: String,
    pub deskripsi: String,
    pub harga: i64,
    pub stock: i64,
}

impl ProductInput {
    /// Materialize the input as a product with the given id
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            nama: self.nama,
            deskripsi: self.deskripsi,
            harga: self.harga,
            stock: self.stock,
        }
    }
}

/// Envelope of the list endpoint: `{ "data": [...] }`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductList {
    pub data: Vec<Product>,
}

/// Whether the form creates a new product or updates an existing one
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Creating,
    Editing(ProductId),
}

impl EditMode {
    pub fn target(&self) -> Option<ProductId> {
        match self {
            EditMode::Creating => None,
            EditMode::Editing(id) => Some(id.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing(_))
    }

    /// Heading shown above the form
    pub fn heading(&self) -> &'static str {
        match self {
            EditMode::Creating => "Add Product",
            EditMode::Editing(_) => "Edit Product",
        }
    }

    /// Label of the form's submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            EditMode::Creating => "Add Product",
            EditMode::Editing(_) => "Update Product",
        }
    }
}

impl std::fmt::Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditMode::Creating => write!(f, "Creating"),
            EditMode::Editing(id) => write!(f, "Editing({})", id),
        }
    }
}
