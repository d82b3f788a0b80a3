// web_app/manager.rs - Product screen state and its transitions
//
// `ProductManager` owns the cached product list, the form and the edit
// mode. The synchronous methods are the state transitions; the async
// helpers talk to a `ProductApi`, log failures, and report success.
//
// The load / submit / delete flows are written once against
// `ManagerState`. The Leptos page runs them over its signal, and the
// `ProductManager::{load, submit, delete}` methods run them over a plain
// value for native callers and tests.

use crate::web_app::api::ProductApi;
use crate::web_app::form::{Field, FormValues, ProductForm};
use crate::web_app::model::{EditMode, Product, ProductId, ProductInput};

/// Request the form submit turns into
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    Create(ProductInput),
    Update(ProductId, ProductInput),
}

impl Mutation {
    pub fn input(&self) -> &ProductInput {
        match self {
            Mutation::Create(input) | Mutation::Update(_, input) => input,
        }
    }
}

/// Result of a submit attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid,
    /// The request failed; form and mode are unchanged
    Failed,
    /// Saved; form reset and list re-fetched
    Saved,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductManager {
    products: Vec<Product>,
    form: ProductForm,
    mode: EditMode,
}

impl ProductManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn mode(&self) -> EditMode {
        self.mode.clone()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    pub fn touch(&mut self, field: Field) {
        self.form.touch(field);
    }

    /// Load a product from the cached list into the form
    pub fn begin_edit(&mut self, product: &Product) {
        tracing::debug!("Editing product {}", product.id);
        self.form.set_values(FormValues::from_product(product));
        self.mode = EditMode::Editing(product.id.clone());
    }

    /// Overwrite the cached list with a fetched one
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Validate the form and build the request for the current mode
    ///
    /// Marks every field touched so all errors show; returns `None` when
    /// any field is invalid.
    pub fn prepare_submit(&mut self) -> Option<Mutation> {
        self.form.touch_all();
        match self.form.validate() {
            Ok(input) => Some(match &self.mode {
                EditMode::Creating => Mutation::Create(input),
                EditMode::Editing(id) => Mutation::Update(id.clone(), input),
            }),
            Err(errors) => {
                tracing::debug!("Submit blocked by {} invalid field(s)", errors.len());
                None
            }
        }
    }

    /// Reset after a saved create or update
    pub fn submit_succeeded(&mut self) {
        self.form.reset();
        self.mode = EditMode::Creating;
    }

    /// Drop everything cached for the signed-in user
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fetch the list and replace the cache; keeps the old list on failure
    pub async fn load<A: ProductApi>(&mut self, api: &A) -> bool {
        refresh_list(self, api).await
    }

    pub async fn submit<A: ProductApi>(&mut self, api: &A) -> SubmitOutcome {
        submit_form(self, api).await
    }

    /// Delete then re-fetch; returns whether the delete succeeded
    pub async fn delete<A: ProductApi>(&mut self, api: &A, id: &ProductId) -> bool {
        delete_and_refresh(self, api, id).await
    }
}

/// Somewhere a `ProductManager` lives while requests are in flight
///
/// `transition` returns `None` once the state is gone (a disposed view);
/// the flows below then stop without touching anything.
pub trait ManagerState {
    fn transition<R>(&mut self, f: impl FnOnce(&mut ProductManager) -> R) -> Option<R>;
}

impl ManagerState for ProductManager {
    fn transition<R>(&mut self, f: impl FnOnce(&mut ProductManager) -> R) -> Option<R> {
        Some(f(self))
    }
}

/// Re-fetch the list into the state, keeping the old list on failure
pub async fn refresh_list<S: ManagerState, A: ProductApi>(state: &mut S, api: &A) -> bool {
    match fetch_products(api).await {
        Some(products) => state.transition(|m| m.replace_products(products)).is_some(),
        None => false,
    }
}

/// Validate, send the create or update, then reset and re-fetch
pub async fn submit_form<S: ManagerState, A: ProductApi>(state: &mut S, api: &A) -> SubmitOutcome {
    let Some(mutation) = state.transition(ProductManager::prepare_submit).flatten() else {
        return SubmitOutcome::Invalid;
    };
    if !save_product(api, &mutation).await {
        return SubmitOutcome::Failed;
    }
    state.transition(ProductManager::submit_succeeded);
    refresh_list(state, api).await;
    SubmitOutcome::Saved
}

/// Delete one product, then re-fetch; returns whether the delete succeeded
pub async fn delete_and_refresh<S: ManagerState, A: ProductApi>(
    state: &mut S,
    api: &A,
    id: &ProductId,
) -> bool {
    if !remove_product(api, id).await {
        return false;
    }
    refresh_list(state, api).await;
    true
}

pub async fn fetch_products<A: ProductApi>(api: &A) -> Option<Vec<Product>> {
    match api.list_products().await {
        Ok(products) => {
            tracing::info!("Fetched {} products", products.len());
            Some(products)
        }
        Err(e) => {
            tracing::error!("Error fetching products: {}", e);
            None
        }
    }
}

pub async fn save_product<A: ProductApi>(api: &A, mutation: &Mutation) -> bool {
    let result = match mutation {
        Mutation::Create(input) => api.create_product(input).await,
        Mutation::Update(id, input) => api.update_product(id, input).await,
    };

    match result {
        Ok(()) => {
            match mutation {
                Mutation::Create(input) => tracing::info!("Created product '{}'", input.nama),
                Mutation::Update(id, _) => tracing::info!("Updated product {}", id),
            }
            true
        }
        Err(e) => {
            tracing::error!("Error saving product: {}", e);
            false
        }
    }
}

pub async fn remove_product<A: ProductApi>(api: &A, id: &ProductId) -> bool {
    match api.delete_product(id).await {
        Ok(()) => {
            tracing::info!("Deleted product {}", id);
            true
        }
        Err(e) => {
            tracing::error!("Error deleting product {}: {}", id, e);
            false
        }
    }
}
