// web_app/api/mod.rs - Remote products API
//
// The `ProductApi` trait is the seam between the view state and the
// network. `HttpProductApi` talks to the real service; tests plug in
// in-memory fakes.
//
// All four endpoints require `Authorization: Bearer <token>`, the token
// coming from a `CredentialProvider`.

pub mod client;
pub mod credentials;

pub use client::HttpProductApi;
pub use credentials::{CookieToken, CredentialProvider, StaticToken};

use thiserror::Error;

use crate::web_app::model::{Product, ProductId, ProductInput};

/// Failure of a call to the products API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no bearer token available")]
    MissingCredential,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code when the server answered with a failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations the product screen needs from the remote service
///
/// Futures are not required to be `Send`: in the browser they run on
/// the single-threaded `spawn_local` executor.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET /api/products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST /api/products`
    async fn create_product(&self, input: &ProductInput) -> Result<(), ApiError>;

    /// `PUT /api/products/{id}`
    async fn update_product(&self, id: &ProductId, input: &ProductInput) -> Result<(), ApiError>;

    /// `DELETE /api/products/{id}`
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status { status: 401, body: "Unauthenticated.".to_string() };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "server responded with status 401: Unauthenticated.");

        assert_eq!(ApiError::MissingCredential.status(), None);
        assert_eq!(ApiError::Decode("eof".to_string()).status(), None);
    }
}
