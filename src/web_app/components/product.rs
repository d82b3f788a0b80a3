// web_app/components/product.rs - Product form and table
//
// - ProductFormPanel: create/edit form bound to the manager's form state
// - ProductTable: list of cached products with Edit/Delete actions
// - ProductRow: one table row

use leptos::prelude::*;

use super::common::{Button, ButtonVariant, FormField};
use crate::web_app::form::Field;
use crate::web_app::manager::ProductManager;
use crate::web_app::model::{Product, ProductId};

/// Create/edit form
///
/// Field edits and blurs go straight into the manager; submission is left
/// to the parent, which owns the API.
#[component]
pub fn ProductFormPanel(
    manager: RwSignal<ProductManager>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let mode = Signal::derive(move || manager.with(|m| m.mode()));

    let on_input = Callback::new(move |(field, value): (Field, String)| {
        manager.update(|m| m.set_field(field, value));
    });
    let on_blur = Callback::new(move |field: Field| {
        manager.update(|m| m.touch(field));
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <h2 class="text-center text-2xl font-bold tracking-tight text-gray-900 mb-8">
            {move || mode.get().heading()}
        </h2>

        <form on:submit=handle_submit class="space-y-6">
            {Field::ALL.into_iter().map(|field| {
                let value = Signal::derive(move || manager.with(|m| m.form().value(field).to_string()));
                let error = Signal::derive(move || manager.with(|m| m.form().visible_error(field)));
                view! {
                    <FormField
                        field=field
                        value=value
                        error=error
                        on_input=on_input
                        on_blur=on_blur
                    />
                }
            }).collect_view()}

            <Button button_type="submit" class="w-full px-4 py-2 text-sm font-semibold">
                {move || mode.get().submit_label()}
            </Button>
        </form>
    }
}

/// Table of cached products
#[component]
pub fn ProductTable(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    on_edit: Callback<Product>,
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    let headers = ["Name", "Description", "Price", "Stock", "Action"];

    view! {
        <table class="min-w-full bg-white border border-gray-200">
            <thead>
                <tr>
                    {headers.into_iter().map(|h| view! {
                        <th class="border-b p-2 text-left text-gray-600">{h}</th>
                    }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || products.get().into_iter().map(|product| view! {
                    <ProductRow product=product on_edit=on_edit on_delete=on_delete />
                }).collect_view()}
            </tbody>
        </table>
    }
}

/// One row with Edit and Delete buttons
#[component]
pub fn ProductRow(
    product: Product,
    on_edit: Callback<Product>,
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    let for_edit = product.clone();
    let id = product.id;

    view! {
        <tr class="border-b">
            <td class="p-2">{product.nama}</td>
            <td class="p-2">{product.deskripsi}</td>
            <td class="p-2">{product.harga}</td>
            <td class="p-2">{product.stock}</td>
            <td class="p-2">
                <Button
                    variant=ButtonVariant::Warning
                    class="mr-2 px-3 py-1 text-sm"
                    on_click=Callback::new(move |()| on_edit.run(for_edit.clone()))
                >
                    "Edit"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    class="px-3 py-1 text-sm"
                    on_click=Callback::new(move |()| on_delete.run(id.clone()))
                >
                    "Delete"
                </Button>
            </td>
        </tr>
    }
}
