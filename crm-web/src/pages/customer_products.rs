use crate::components::{Alert, AlertKind, render_loadable};
use crate::format::money;
use crate::hooks::{use_fetch, use_flash};
use crate::session::use_session_handle;
use i18nrs::yew::use_translation;
use shared::ApiError;
use shared::models::{Product, ProductListResponse};
use std::collections::BTreeSet;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    Selected,
}

#[derive(Debug, Clone, PartialEq)]
struct Catalogue {
    available: ProductListResponse,
    selected: ProductListResponse,
}

impl Catalogue {
    fn visible(&self, filter: Filter) -> Vec<&Product> {
        match filter {
            Filter::All => self.available.products.iter().collect(),
            Filter::Selected => self.selected.products.iter().collect(),
        }
    }
}

/// Product catalogue where a customer picks what they are interested in.
#[function_component(CustomerProductsPage)]
pub fn customer_products_page() -> Html {
    let (i18n, _) = use_translation();
    let client = use_session_handle().store.client().clone();
    let catalogue = use_fetch((), |client, ()| async move {
        Ok::<_, ApiError>(Catalogue {
            available: client.list_available_products().await?,
            selected: client.list_selected_products().await?,
        })
    });
    let flash = use_flash();
    let filter = use_state(|| Filter::All);
    let in_flight = use_state(BTreeSet::<String>::new);
    let error = use_state(|| None::<String>);

    let toggle = |product: &Product, chosen: bool| {
        let id = product.id.clone();
        let client = client.clone();
        let in_flight = in_flight.clone();
        let error = error.clone();
        let reload = catalogue.reload.clone();
        let show = flash.show.clone();
        let done = if chosen {
            i18n.t("customer.unselected")
        } else {
            i18n.t("customer.selected")
        };
        Callback::from(move |_: MouseEvent| {
            let mut busy = (*in_flight).clone();
            if !busy.insert(id.clone()) {
                return;
            }
            in_flight.set(busy);
            let id = id.clone();
            let client = client.clone();
            let in_flight = in_flight.clone();
            let error = error.clone();
            let reload = reload.clone();
            let show = show.clone();
            let done = done.clone();
            spawn_local(async move {
                let result = if chosen {
                    client.unselect_product(&id).await
                } else {
                    client.select_product(&id).await
                };
                match result {
                    Ok(()) => {
                        show.emit(done);
                        reload.emit(());
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                let mut busy = (*in_flight).clone();
                busy.remove(&id);
                in_flight.set(busy);
            });
        })
    };

    let tab = |value: Filter, key: &str| {
        let filter_handle = filter.clone();
        html! {
            <button
                role="tab"
                class={classes!("tab", (*filter == value).then_some("tab-active"))}
                onclick={move |_| filter_handle.set(value)}
            >
                { i18n.t(key) }
            </button>
        }
    };

    let grid = |catalogue: &Catalogue| {
        let products = catalogue.visible(*filter);
        if products.is_empty() {
            return html! { <p class="text-base-content/70 py-6">{ i18n.t("customer.no_products") }</p> };
        }
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                { for products.into_iter().map(|product| {
                    let chosen = catalogue.selected.contains(&product.id);
                    let pending = in_flight.contains(&product.id);
                    html! {
                        <div key={product.id.clone()} class="card bg-base-100 shadow">
                            if let Some(url) = product.image_url.clone() {
                                <figure><img class="h-40 w-full object-cover" src={url} alt={product.name.clone()} /></figure>
                            }
                            <div class="card-body">
                                <h3 class="card-title">
                                    { &product.name }
                                    if chosen {
                                        <span class="badge badge-success">{ i18n.t("customer.chosen") }</span>
                                    }
                                </h3>
                                <p class="text-sm text-base-content/70">{ product.description.clone().unwrap_or_default() }</p>
                                <div class="card-actions justify-between items-center">
                                    <span class="text-lg font-semibold">{ money(product.price) }</span>
                                    <button
                                        class={classes!("btn", "btn-sm", if chosen { "btn-outline" } else { "btn-primary" })}
                                        disabled={pending}
                                        onclick={toggle(product, chosen)}
                                    >
                                        { if chosen { i18n.t("customer.unselect") } else { i18n.t("customer.select") } }
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap gap-4 justify-between items-center">
                <h2 class="text-xl font-semibold">{ i18n.t("customer.catalogue") }</h2>
                <div role="tablist" class="tabs tabs-boxed">
                    { tab(Filter::All, "customer.all_products") }
                    { tab(Filter::Selected, "customer.my_products") }
                </div>
            </div>
            if let Some(message) = flash.message.clone() {
                <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
            }
            if let Some(message) = (*error).clone() {
                <Alert {message} />
            }
            { render_loadable(&*catalogue.state, &catalogue.reload, grid) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue {
            available: serde_json::from_str(
                r#"{"products":[{"id":"p1","name":"A"},{"id":"p2","name":"B"}]}"#,
            )
            .unwrap(),
            selected: serde_json::from_str(r#"{"products":[{"id":"p2","name":"B"}]}"#).unwrap(),
        }
    }

    #[test]
    fn test_filter_switches_listing() {
        let catalogue = catalogue();

        assert_eq!(catalogue.visible(Filter::All).len(), 2);
        let selected = catalogue.visible(Filter::Selected);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "p2");
    }
}
