use crate::components::{
    Alert, AlertKind, ConfirmDialog, FilePicker, TextField, read_upload, render_loadable,
};
use crate::format::money;
use crate::hooks::{use_fetch, use_flash};
use crate::session::{use_session, use_session_handle};
use i18nrs::yew::use_translation;
use shared::models::{Product, ProductInput, ProductListResponse, UserRole};
use shared::validation::{ValidationError, parse_price, parse_quantity, validate_required};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Text state of the product editor.
#[derive(Debug, Clone, PartialEq)]
struct ProductDraft {
    name: String,
    description: String,
    price: String,
    category: String,
    stock: String,
    image_url: Option<String>,
    is_available: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            stock: String::new(),
            image_url: None,
            is_available: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ProductErrors {
    name: Option<ValidationError>,
    price: Option<ValidationError>,
    stock: Option<ValidationError>,
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|value| !value.is_empty())
}

impl ProductDraft {
    fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price_label(),
            category: product.category.clone().unwrap_or_default(),
            stock: product.stock.map(|stock| stock.to_string()).unwrap_or_default(),
            image_url: product.image_url.clone(),
            is_available: product.is_available,
        }
    }

    /// The payload, or the per-field errors that block it.
    fn to_input(&self) -> Result<ProductInput, ProductErrors> {
        let name = validate_required(&self.name);
        let price = parse_price(&self.price);
        let stock = parse_quantity(&self.stock);
        match (name, price, stock) {
            (Ok(()), Ok(price), Ok(stock)) => Ok(ProductInput {
                name: self.name.trim().to_string(),
                description: optional(&self.description),
                price,
                category: optional(&self.category),
                stock,
                image_url: self.image_url.clone(),
                is_available: self.is_available,
            }),
            (name, price, stock) => Err(ProductErrors {
                name: name.err(),
                price: price.err(),
                stock: stock.err(),
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProductEditorProps {
    editing: Option<Product>,
    on_saved: Callback<Product>,
    on_cancel: Callback<()>,
}

#[function_component(ProductEditor)]
fn product_editor(props: &ProductEditorProps) -> Html {
    let (i18n, _) = use_translation();
    let client = use_session_handle().store.client().clone();
    let draft = use_state(|| {
        props
            .editing
            .as_ref()
            .map(ProductDraft::from_product)
            .unwrap_or_default()
    });
    let errors = use_state(ProductErrors::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let field = |update: fn(&mut ProductDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            update(&mut next, value);
            draft.set(next);
        })
    };
    let message = |error: Option<ValidationError>| -> Option<AttrValue> {
        error.map(|error| i18n.t(error.message_key()).into())
    };

    let on_image = {
        let draft = draft.clone();
        let error = error.clone();
        let busy = busy.clone();
        let client = client.clone();
        Callback::from(move |files: Vec<File>| {
            let Some(file) = files.into_iter().next() else {
                return;
            };
            busy.set(true);
            let draft = draft.clone();
            let error = error.clone();
            let busy = busy.clone();
            let client = client.clone();
            spawn_local(async move {
                let uploaded = match read_upload(&file).await {
                    Ok(upload) => client.upload_image(upload).await,
                    Err(err) => Err(err),
                };
                match uploaded {
                    Ok(uploaded) => {
                        let mut next = (*draft).clone();
                        next.image_url = Some(uploaded.url);
                        draft.set(next);
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };
    let on_available = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.is_available = input.checked();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let error = error.clone();
        let busy = busy.clone();
        let editing = props.editing.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let input = match draft.to_input() {
                Ok(input) => input,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(ProductErrors::default());
            busy.set(true);
            error.set(None);
            let client = client.clone();
            let editing = editing.clone();
            let on_saved = on_saved.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let saved = match &editing {
                    Some(product) => client.update_product(&product.id, &input).await,
                    None => client.create_product(&input).await,
                };
                busy.set(false);
                match saved {
                    Ok(product) => on_saved.emit(product),
                    Err(err) => {
                        log(&format!("Saving product failed: {err}"));
                        error.set(Some(err.message().to_string()));
                    }
                }
            });
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let is_busy = *busy;
    let title = if props.editing.is_some() {
        i18n.t("products.edit")
    } else {
        i18n.t("products.create")
    };

    html! {
        <div class="modal modal-open" role="dialog">
            <form class="modal-box space-y-2" {onsubmit} novalidate=true>
                <h3 class="font-bold text-lg">{ title }</h3>
                if let Some(message) = (*error).clone() {
                    <Alert {message} />
                }
                if let Some(url) = draft.image_url.clone() {
                    <img class="w-full h-40 object-cover rounded" src={url} alt="" />
                }
                <FilePicker
                    label={i18n.t("products.image")}
                    accept="image/*"
                    on_select={on_image}
                    disabled={is_busy}
                />
                <TextField
                    id="product-name"
                    label={i18n.t("products.name")}
                    value={draft.name.clone()}
                    on_input={field(|draft, value| draft.name = value)}
                    error={message(errors.name)}
                    disabled={is_busy}
                />
                <TextField
                    id="product-description"
                    label={i18n.t("products.description")}
                    value={draft.description.clone()}
                    on_input={field(|draft, value| draft.description = value)}
                    disabled={is_busy}
                    multiline=true
                />
                <div class="grid grid-cols-3 gap-4">
                    <TextField
                        id="product-price"
                        label={i18n.t("products.price")}
                        input_type="number"
                        value={draft.price.clone()}
                        on_input={field(|draft, value| draft.price = value)}
                        error={message(errors.price)}
                        disabled={is_busy}
                    />
                    <TextField
                        id="product-stock"
                        label={i18n.t("products.stock")}
                        input_type="number"
                        value={draft.stock.clone()}
                        on_input={field(|draft, value| draft.stock = value)}
                        error={message(errors.stock)}
                        disabled={is_busy}
                    />
                    <TextField
                        id="product-category"
                        label={i18n.t("products.category")}
                        value={draft.category.clone()}
                        on_input={field(|draft, value| draft.category = value)}
                        disabled={is_busy}
                    />
                </div>
                <label class="label cursor-pointer justify-start gap-3">
                    <input
                        type="checkbox"
                        class="toggle toggle-success"
                        checked={draft.is_available}
                        onchange={on_available}
                        disabled={is_busy}
                    />
                    <span class="label-text">{ i18n.t("products.available") }</span>
                </label>
                <div class="modal-action">
                    <button class="btn" type="button" disabled={is_busy} onclick={on_cancel}>
                        { i18n.t("common.cancel") }
                    </button>
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        { i18n.t("common.save") }
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Create,
    Edit(Product),
}

/// Staff catalogue management. Super admins see every product, admins their own.
#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_session();
    let client = use_session_handle().store.client().clone();
    let everything = session.role() == Some(UserRole::SuperAdmin);
    let products = use_fetch(everything, |client, everything| async move {
        if everything {
            client.list_products().await
        } else {
            client.list_admin_products().await
        }
    });
    let flash = use_flash();
    let query = use_state(String::new);
    let editor = use_state(|| None::<Editor>);
    let deleting = use_state(|| None::<Product>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };
    let open_create = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.set(Some(Editor::Create)))
    };
    let on_saved = {
        let editor = editor.clone();
        let reload = products.reload.clone();
        let show = flash.show.clone();
        let saved = i18n.t("products.saved");
        Callback::from(move |product: Product| {
            log(&format!("Saved product {}", product.id));
            editor.set(None);
            show.emit(saved.clone());
            reload.emit(());
        })
    };
    let close_editor = {
        let editor = editor.clone();
        Callback::from(move |()| editor.set(None))
    };
    let on_delete = {
        let deleting = deleting.clone();
        let busy = busy.clone();
        let error = error.clone();
        let reload = products.reload.clone();
        let show = flash.show.clone();
        let client = client.clone();
        let deleted = i18n.t("products.deleted");
        Callback::from(move |()| {
            let Some(product) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let busy = busy.clone();
            let error = error.clone();
            let reload = reload.clone();
            let show = show.clone();
            let client = client.clone();
            let deleted = deleted.clone();
            spawn_local(async move {
                match client.delete_product(&product.id).await {
                    Ok(()) => {
                        show.emit(deleted);
                        reload.emit(());
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                deleting.set(None);
                busy.set(false);
            });
        })
    };
    let cancel_delete = {
        let deleting = deleting.clone();
        Callback::from(move |()| deleting.set(None))
    };

    let toggle_availability = |product: &Product| {
        let product = product.clone();
        let client = client.clone();
        let error = error.clone();
        let reload = products.reload.clone();
        Callback::from(move |_: Event| {
            let mut input = ProductInput::from(&product);
            input.is_available = !product.is_available;
            let id = product.id.clone();
            let client = client.clone();
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match client.update_product(&id, &input).await {
                    Ok(_) => reload.emit(()),
                    Err(err) => error.set(Some(err.message().to_string())),
                }
            });
        })
    };

    let grid = |listing: &ProductListResponse| {
        let needle = query.trim().to_lowercase();
        let visible: Vec<&Product> = listing
            .products
            .iter()
            .filter(|product| {
                needle.is_empty()
                    || product.name.to_lowercase().contains(&needle)
                    || product
                        .category
                        .as_deref()
                        .is_some_and(|category| category.to_lowercase().contains(&needle))
            })
            .collect();
        if visible.is_empty() {
            return html! { <p class="text-base-content/70 py-6">{ i18n.t("products.empty") }</p> };
        }

        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                { for visible.into_iter().map(|product| {
                    let on_edit = {
                        let editor = editor.clone();
                        let product = product.clone();
                        Callback::from(move |_: MouseEvent| editor.set(Some(Editor::Edit(product.clone()))))
                    };
                    let on_remove = {
                        let deleting = deleting.clone();
                        let product = product.clone();
                        Callback::from(move |_: MouseEvent| deleting.set(Some(product.clone())))
                    };
                    html! {
                        <div key={product.id.clone()} class="card bg-base-100 shadow">
                            if let Some(url) = product.image_url.clone() {
                                <figure><img class="h-40 w-full object-cover" src={url} alt={product.name.clone()} /></figure>
                            }
                            <div class="card-body">
                                <h3 class="card-title">{ &product.name }</h3>
                                if let Some(category) = product.category.clone() {
                                    <span class="badge badge-outline">{ category }</span>
                                }
                                <p class="text-sm text-base-content/70">{ product.description.clone().unwrap_or_default() }</p>
                                <div class="flex justify-between items-center">
                                    <span class="text-lg font-semibold">{ money(product.price) }</span>
                                    if let Some(stock) = product.stock {
                                        <span class="text-sm">{ format!("{}: {stock}", i18n.t("products.stock")) }</span>
                                    }
                                </div>
                                <div class="card-actions justify-between items-center">
                                    <label class="label cursor-pointer gap-2">
                                        <input
                                            type="checkbox"
                                            class="toggle toggle-success toggle-sm"
                                            checked={product.is_available}
                                            onchange={toggle_availability(product)}
                                        />
                                        <span class="label-text">{ i18n.t("products.available") }</span>
                                    </label>
                                    <div>
                                        <button class="btn btn-ghost btn-sm" title={i18n.t("common.edit")} onclick={on_edit}>
                                            <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-4 h-4" />
                                        </button>
                                        <button class="btn btn-ghost btn-sm text-error" title={i18n.t("common.delete")} onclick={on_remove}>
                                            <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4" />
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    };

    let confirm_message = deleting
        .as_ref()
        .map(|product| format!("{} {}?", i18n.t("products.confirm_delete"), product.name))
        .unwrap_or_default();

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap gap-4 justify-between items-center">
                <h2 class="text-xl font-semibold">{ i18n.t("products.title") }</h2>
                <div class="flex gap-2">
                    <input
                        class="input input-bordered input-sm"
                        type="search"
                        placeholder={i18n.t("products.search")}
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                    <button class="btn btn-primary btn-sm" onclick={open_create}>
                        <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                        { i18n.t("products.add") }
                    </button>
                </div>
            </div>
            if let Some(message) = flash.message.clone() {
                <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
            }
            if let Some(message) = (*error).clone() {
                <Alert {message} />
            }
            { render_loadable(&*products.state, &products.reload, grid) }
            if let Some(current) = (*editor).clone() {
                <ProductEditor
                    editing={match current { Editor::Create => None, Editor::Edit(product) => Some(product) }}
                    {on_saved}
                    on_cancel={close_editor}
                />
            }
            <ConfirmDialog
                open={deleting.is_some()}
                message={confirm_message}
                on_confirm={on_delete}
                on_cancel={cancel_delete}
                busy={*busy}
            />
        </div>
    }
}
