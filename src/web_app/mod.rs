// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types for the products API
// - form: Form values, touched flags and validation
// - api/: ProductApi trait, reqwest client, credential providers
// - manager: Screen state and its transitions
// - config, logging: API configuration and tracing setup
// - components/, pages/, app.rs: Leptos UI (both SSR and hydrate)

pub mod api;
pub mod config;
pub mod form;
pub mod logging;
pub mod manager;
pub mod model;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
