// web_app/pages/products.rs - Product management page
//
// Composes the form and the table around one `RwSignal<ProductManager>`
// and drives the remote API from the browser. Every network call is
// spawned locally; whichever response lands last wins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{CookieToken, HttpProductApi};
use crate::web_app::components::*;
use crate::web_app::config::ApiConfig;
use crate::web_app::manager::{
    delete_and_refresh, refresh_list, submit_form, ManagerState, ProductManager,
};
use crate::web_app::model::{Product, ProductId};

type PageApi = HttpProductApi<CookieToken>;

impl ManagerState for RwSignal<ProductManager> {
    fn transition<R>(&mut self, f: impl FnOnce(&mut ProductManager) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// The cached list alone, so form keystrokes don't re-render the table
fn product_list(manager: RwSignal<ProductManager>) -> Memo<Vec<Product>> {
    Memo::new(move |_| manager.with(|m| m.products().to_vec()))
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let credentials = CookieToken::new(config.token_cookie.clone());
    let api: PageApi = HttpProductApi::new(&config, credentials.clone());

    let manager = RwSignal::new(ProductManager::new());
    let products = product_list(manager);

    // Initial load (effects only run in the browser)
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                let mut state = manager;
                refresh_list(&mut state, &api).await;
            });
        }
    });

    let on_submit = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                let mut state = manager;
                let outcome = submit_form(&mut state, &api).await;
                tracing::debug!("Submit finished: {:?}", outcome);
            });
        }
    });

    let on_edit = Callback::new(move |product: Product| {
        manager.update(|m| m.begin_edit(&product));
    });

    let on_delete = Callback::new({
        let api = api.clone();
        move |id: ProductId| {
            let api = api.clone();
            spawn_local(async move {
                let mut state = manager;
                delete_and_refresh(&mut state, &api, &id).await;
            });
        }
    });

    let on_logout = Callback::new(move |()| {
        tracing::info!("Logging out");
        credentials.clear();
        manager.update(|m| m.clear());
    });

    view! {
        <div class="py-2 px-4">
            <Button variant=ButtonVariant::Danger on_click=on_logout>
                "Logout"
            </Button>
        </div>

        <div class="flex flex-col items-center py-10 px-4 lg:px-8">
            <div class="sm:w-full sm:max-w-md">
                <ProductFormPanel manager=manager on_submit=on_submit />
            </div>

            <div class="mt-10 w-full sm:max-w-2xl">
                <h3 class="text-xl font-bold text-gray-900 mb-4">"Product List"</h3>
                <ProductTable products=products on_edit=on_edit on_delete=on_delete />
            </div>
        </div>
    }
}
