// web_app/config.rs - Remote API configuration
//
// The WASM client has no process environment, so overrides are read at
// build time with `option_env!`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Cookie holding the bearer token
pub const TOKEN_COOKIE: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the products API, without the `/api` prefix
    pub base_url: String,
    pub token_cookie: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_cookie: TOKEN_COOKIE.to_string(),
        }
    }

    pub fn with_token_cookie(mut self, name: impl Into<String>) -> Self {
        self.token_cookie = name.into();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("PRODUCT_API_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let token_cookie = option_env!("PRODUCT_TOKEN_COOKIE").unwrap_or(TOKEN_COOKIE);
        Self::new(base_url).with_token_cookie(token_cookie)
    }
}
