// common/mod.rs - Shared test utilities
//
// An in-memory stand-in for the remote products API that records every
// call and can be told to fail the next request of each kind.

#![allow(dead_code)]

use std::sync::Mutex;

use product_manager::web_app::api::{ApiError, ProductApi};
use product_manager::web_app::model::{Product, ProductId, ProductInput};

/// Request received by the fake API
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create(ProductInput),
    Update(ProductId, ProductInput),
    Delete(ProductId),
}

#[derive(Default)]
struct State {
    products: Vec<Product>,
    next_id: i64,
    calls: Vec<Call>,
    fail_list: bool,
    fail_mutation: bool,
}

#[derive(Default)]
pub struct FakeProductApi {
    state: Mutex<State>,
}

impl FakeProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        // Ids are opaque; new ones come from a separate counter
        let next_id = 100;
        Self {
            state: Mutex::new(State {
                products,
                next_id,
                ..State::default()
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn stored(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    /// Make list calls fail until reset
    pub fn set_fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    /// Make create/update/delete calls fail until reset
    pub fn set_fail_mutation(&self, fail: bool) {
        self.state.lock().unwrap().fail_mutation = fail;
    }
}

fn network_error() -> ApiError {
    ApiError::Status {
        status: 503,
        body: "simulated outage".to_string(),
    }
}

impl ProductApi for FakeProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        if state.fail_list {
            return Err(network_error());
        }
        Ok(state.products.clone())
    }

    async fn create_product(&self, input: &ProductInput) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(input.clone()));
        if state.fail_mutation {
            return Err(network_error());
        }
        state.next_id = state.next_id.max(1);
        let id = ProductId::Int(state.next_id);
        state.next_id += 1;
        state.products.push(input.clone().into_product(id));
        Ok(())
    }

    async fn update_product(&self, id: &ProductId, input: &ProductInput) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update(id.clone(), input.clone()));
        if state.fail_mutation {
            return Err(network_error());
        }
        match state.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                *product = input.clone().into_product(id.clone());
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                body: "not found".to_string(),
            }),
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(id.clone()));
        if state.fail_mutation {
            return Err(network_error());
        }
        state.products.retain(|p| &p.id != id);
        Ok(())
    }
}

pub fn product(id: impl Into<ProductId>, nama: &str, harga: i64, stock: i64) -> Product {
    Product {
        id: id.into(),
        nama: nama.to_string(),
        deskripsi: format!("{} description", nama),
        harga,
        stock,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Kopi", 15000, 20),
        product(2, "Teh", 8000, 35),
        product(3, "Gula", 12000, 10),
        product(7, "Widget", 500, 4),
        product("sku-gula-aren", "Gula Aren", 18000, 6),
    ]
}
