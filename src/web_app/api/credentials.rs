// web_app/api/credentials.rs - Bearer token sources
//
// The browser keeps the token in a cookie set by the login flow.
// Everything that issues requests asks a `CredentialProvider` instead of
// reading the cookie itself.

use crate::web_app::config::TOKEN_COOKIE;

/// Source of the bearer token attached to API requests
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// Fixed token, for tools and tests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticToken(pub String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        StaticToken(token.into())
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Token read from a browser cookie on every call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieToken {
    name: String,
}

impl CookieToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expire the cookie (logout)
    pub fn clear(&self) {
        clear_cookie(&self.name);
    }
}

impl Default for CookieToken {
    fn default() -> Self {
        Self::new(TOKEN_COOKIE)
    }
}

impl CredentialProvider for CookieToken {
    fn bearer_token(&self) -> Option<String> {
        document_cookie().and_then(|cookies| cookie_value(&cookies, &self.name))
    }
}

/// Find a cookie in a `document.cookie` style string (`a=1; b=2`)
///
/// Empty values count as absent.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        fn html_document() -> Option<web_sys::HtmlDocument> {
            use wasm_bindgen::JsCast;

            web_sys::window()?
                .document()?
                .dyn_into::<web_sys::HtmlDocument>()
                .ok()
        }

        fn document_cookie() -> Option<String> {
            html_document()?.cookie().ok()
        }

        fn clear_cookie(name: &str) {
            let Some(document) = html_document() else {
                return;
            };
            let expired = format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name);
            if let Err(e) = document.set_cookie(&expired) {
                tracing::warn!("Failed to clear cookie '{}': {:?}", name, e);
            }
        }
    } else {
        // No document outside the browser
        fn document_cookie() -> Option<String> {
            None
        }

        fn clear_cookie(name: &str) {
            tracing::debug!("Ignoring cookie clear for '{}' outside the browser", name);
        }
    }
}
