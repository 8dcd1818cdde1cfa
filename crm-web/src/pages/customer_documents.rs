use crate::components::{Alert, AlertKind, FilePicker, render_loadable, upload_documents};
use crate::format::date;
use crate::hooks::{use_fetch, use_flash};
use crate::session::{use_session, use_session_handle};
use i18nrs::yew::use_translation;
use shared::models::DocumentListResponse;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Files shared with the signed-in customer, plus their own uploads.
#[function_component(CustomerDocumentsPage)]
pub fn customer_documents_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_session();
    let client = use_session_handle().store.client().clone();
    let documents = use_fetch((), |client, ()| async move { client.list_documents().await });
    let flash = use_flash();
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_files = {
        let busy = busy.clone();
        let error = error.clone();
        let reload = documents.reload.clone();
        let show = flash.show.clone();
        let owner = session.user.as_ref().map(|user| user.id.clone());
        let uploaded = i18n.t("documents.uploaded");
        Callback::from(move |files: Vec<File>| {
            busy.set(true);
            error.set(None);
            let busy = busy.clone();
            let error = error.clone();
            let reload = reload.clone();
            let show = show.clone();
            let client = client.clone();
            let owner = owner.clone();
            let uploaded = uploaded.clone();
            spawn_local(async move {
                match upload_documents(&client, files, owner).await {
                    Ok(created) => {
                        show.emit(format!("{uploaded} ({created})"));
                        reload.emit(());
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };

    let list = |listing: &DocumentListResponse| {
        if listing.documents.is_empty() {
            return html! { <p class="text-base-content/70 py-6">{ i18n.t("documents.empty") }</p> };
        }
        html! {
            <ul class="divide-y divide-base-300">
                { for listing.documents.iter().map(|document| html! {
                    <li key={document.id.clone()} class="py-3 flex items-center gap-4">
                        <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6 text-primary" />
                        <div class="flex-1">
                            <a class="link link-primary" href={document.file_url.clone()} target="_blank" rel="noopener">
                                { &document.title }
                            </a>
                            if let Some(description) = document.description.clone() {
                                <div class="text-xs text-base-content/70">{ description }</div>
                            }
                        </div>
                        <span class="text-sm">{ document.size_label() }</span>
                        <span class="text-sm text-base-content/70">{ date(document.created_at.as_ref()) }</span>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body space-y-4">
                <h2 class="card-title">{ i18n.t("customer.documents") }</h2>
                if let Some(message) = flash.message.clone() {
                    <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
                }
                if let Some(message) = (*error).clone() {
                    <Alert {message} />
                }
                <FilePicker
                    label={i18n.t("documents.upload")}
                    multiple=true
                    on_select={on_files}
                    disabled={*busy}
                />
                if *busy {
                    <progress class="progress progress-primary w-full" />
                }
                { render_loadable(&*documents.state, &documents.reload, list) }
            </div>
        </div>
    }
}
