use crate::components::{
    Alert, AlertKind, ConfirmDialog, FilePicker, render_loadable, upload_documents,
};
use crate::format::date;
use crate::hooks::{use_fetch, use_flash};
use crate::session::{use_session, use_session_handle};
use i18nrs::yew::use_translation;
use shared::ApiError;
use shared::models::{Document, DocumentInput, DocumentListResponse, UserListResponse, UserRole};
use std::collections::BTreeSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// What the confirm dialog is about to delete.
#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    One(Document),
    Selected(Vec<String>),
}

fn customer_name(customers: &UserListResponse, id: Option<&str>) -> Option<String> {
    let id = id?;
    customers
        .users
        .iter()
        .find(|user| user.id == id)
        .map(|user| user.display_name().to_string())
}

fn toggled(selection: &BTreeSet<String>, id: &str) -> BTreeSet<String> {
    let mut next = selection.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Staff document library: upload, assign to customers, delete one or many.
#[function_component(DocumentsPage)]
pub fn documents_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_session();
    let client = use_session_handle().store.client().clone();
    let everything = session.role() == Some(UserRole::SuperAdmin);
    let library = use_fetch(everything, |client, everything| async move {
        let documents = if everything {
            client.list_documents().await?
        } else {
            client.list_admin_documents().await?
        };
        let customers = client.list_customers().await?;
        Ok::<_, ApiError>((documents, customers))
    });
    let flash = use_flash();
    let assign_to = use_state(|| None::<String>);
    let selection = use_state(BTreeSet::<String>::new);
    let pending = use_state(|| None::<PendingDelete>);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_assign_to = {
        let assign_to = assign_to.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            assign_to.set(Some(select.value()).filter(|value| !value.is_empty()));
        })
    };

    let on_files = {
        let assign_to = assign_to.clone();
        let busy = busy.clone();
        let error = error.clone();
        let reload = library.reload.clone();
        let show = flash.show.clone();
        let client = client.clone();
        let uploaded = i18n.t("documents.uploaded");
        Callback::from(move |files: Vec<File>| {
            busy.set(true);
            error.set(None);
            let customer_id = (*assign_to).clone();
            let busy = busy.clone();
            let error = error.clone();
            let reload = reload.clone();
            let show = show.clone();
            let client = client.clone();
            let uploaded = uploaded.clone();
            spawn_local(async move {
                match upload_documents(&client, files, customer_id).await {
                    Ok(created) => {
                        log(&format!("Created {created} document(s)"));
                        show.emit(format!("{uploaded} ({created})"));
                        reload.emit(());
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };

    let on_confirm = {
        let pending = pending.clone();
        let selection = selection.clone();
        let busy = busy.clone();
        let error = error.clone();
        let reload = library.reload.clone();
        let show = flash.show.clone();
        let client = client.clone();
        let deleted = i18n.t("documents.deleted");
        Callback::from(move |()| {
            let Some(target) = (*pending).clone() else {
                return;
            };
            busy.set(true);
            let pending = pending.clone();
            let selection = selection.clone();
            let busy = busy.clone();
            let error = error.clone();
            let reload = reload.clone();
            let show = show.clone();
            let client = client.clone();
            let deleted = deleted.clone();
            spawn_local(async move {
                let result = match target {
                    PendingDelete::One(document) => client.delete_document(&document.id).await,
                    PendingDelete::Selected(ids) => client.delete_documents_bulk(ids).await,
                };
                match result {
                    Ok(()) => {
                        selection.set(BTreeSet::new());
                        show.emit(deleted);
                        reload.emit(());
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                pending.set(None);
                busy.set(false);
            });
        })
    };
    let on_cancel = {
        let pending = pending.clone();
        Callback::from(move |()| pending.set(None))
    };
    let delete_selected = {
        let pending = pending.clone();
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            if !selection.is_empty() {
                pending.set(Some(PendingDelete::Selected(selection.iter().cloned().collect())));
            }
        })
    };

    let reassign = |document: &Document| {
        let document = document.clone();
        let client = client.clone();
        let error = error.clone();
        let reload = library.reload.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut input = DocumentInput::from(&document);
            input.customer_id = Some(select.value()).filter(|value| !value.is_empty());
            let id = document.id.clone();
            let client = client.clone();
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match client.update_document(&id, &input).await {
                    Ok(_) => reload.emit(()),
                    Err(err) => error.set(Some(err.message().to_string())),
                }
            });
        })
    };

    let customer_options = |customers: &UserListResponse, current: Option<&str>| {
        html! {
            <>
                <option value="" selected={current.is_none()}>{ i18n.t("documents.unassigned") }</option>
                { for customers.users.iter().map(|user| html! {
                    <option value={user.id.clone()} selected={current == Some(user.id.as_str())}>
                        { user.display_name().to_string() }
                    </option>
                }) }
            </>
        }
    };

    let table = |(documents, customers): &(DocumentListResponse, UserListResponse)| {
        let uploader = html! {
            <div class="flex flex-wrap gap-4 items-end">
                <label class="form-control">
                    <div class="label"><span class="label-text">{ i18n.t("documents.assign_to") }</span></div>
                    <select class="select select-bordered" onchange={on_assign_to.clone()}>
                        { customer_options(customers, assign_to.as_deref()) }
                    </select>
                </label>
                <div class="flex-1">
                    <FilePicker
                        label={i18n.t("documents.upload")}
                        multiple=true
                        on_select={on_files.clone()}
                        disabled={*busy}
                    />
                </div>
            </div>
        };
        if documents.documents.is_empty() {
            return html! {
                <>
                    { uploader }
                    <p class="text-base-content/70 py-6">{ i18n.t("documents.empty") }</p>
                </>
            };
        }

        let all_selected = documents
            .documents
            .iter()
            .all(|document| selection.contains(&document.id));
        let toggle_all = {
            let selection = selection.clone();
            let ids: Vec<String> = documents.documents.iter().map(|document| document.id.clone()).collect();
            Callback::from(move |_: Event| {
                if all_selected {
                    selection.set(BTreeSet::new());
                } else {
                    selection.set(ids.iter().cloned().collect());
                }
            })
        };

        html! {
            <>
                { uploader }
                <div class="flex justify-between items-center">
                    <span class="text-sm text-base-content/70">
                        { format!("{} {}", selection.len(), i18n.t("documents.selected")) }
                    </span>
                    <button
                        class="btn btn-error btn-sm"
                        disabled={selection.is_empty() || *busy}
                        onclick={delete_selected.clone()}
                    >
                        <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4" />
                        { i18n.t("documents.delete_selected") }
                    </button>
                </div>
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>
                                    <input type="checkbox" class="checkbox checkbox-sm" checked={all_selected} onchange={toggle_all} />
                                </th>
                                <th>{ i18n.t("documents.name") }</th>
                                <th>{ i18n.t("documents.customer") }</th>
                                <th>{ i18n.t("documents.size") }</th>
                                <th>{ i18n.t("documents.uploaded_at") }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for documents.documents.iter().map(|document| {
                                let on_check = {
                                    let selection = selection.clone();
                                    let id = document.id.clone();
                                    Callback::from(move |_: Event| selection.set(toggled(&selection, &id)))
                                };
                                let on_remove = {
                                    let pending = pending.clone();
                                    let document = document.clone();
                                    Callback::from(move |_: MouseEvent| pending.set(Some(PendingDelete::One(document.clone()))))
                                };
                                let assigned = document.customer_id.as_deref();
                                html! {
                                    <tr key={document.id.clone()}>
                                        <td>
                                            <input
                                                type="checkbox"
                                                class="checkbox checkbox-sm"
                                                checked={selection.contains(&document.id)}
                                                onchange={on_check}
                                            />
                                        </td>
                                        <td>
                                            <a class="link link-primary" href={document.file_url.clone()} target="_blank" rel="noopener">
                                                { &document.title }
                                            </a>
                                            if let Some(description) = document.description.clone() {
                                                <div class="text-xs text-base-content/70">{ description }</div>
                                            }
                                        </td>
                                        <td>
                                            <select
                                                class="select select-bordered select-xs"
                                                title={customer_name(customers, assigned).unwrap_or_default()}
                                                onchange={reassign(document)}
                                            >
                                                { customer_options(customers, assigned) }
                                            </select>
                                        </td>
                                        <td>{ document.size_label() }</td>
                                        <td>{ date(document.created_at.as_ref()) }</td>
                                        <td class="text-right">
                                            <button class="btn btn-ghost btn-xs text-error" title={i18n.t("common.delete")} onclick={on_remove}>
                                                <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4" />
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            </>
        }
    };

    let confirm_message = match &*pending {
        Some(PendingDelete::One(document)) => {
            format!("{} {}?", i18n.t("documents.confirm_delete"), document.title)
        }
        Some(PendingDelete::Selected(ids)) => {
            format!("{} ({})?", i18n.t("documents.confirm_delete_selected"), ids.len())
        }
        None => String::new(),
    };

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body space-y-4">
                <h2 class="card-title">{ i18n.t("documents.title") }</h2>
                if let Some(message) = flash.message.clone() {
                    <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
                }
                if let Some(message) = (*error).clone() {
                    <Alert {message} />
                }
                if *busy {
                    <progress class="progress progress-primary w-full" />
                }
                { render_loadable(&*library.state, &library.reload, table) }
            </div>
            <ConfirmDialog
                open={pending.is_some()}
                message={confirm_message}
                {on_confirm}
                {on_cancel}
                busy={*busy}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_adds_then_removes() {
        let empty = BTreeSet::new();
        let one = toggled(&empty, "d1");
        assert!(one.contains("d1"));
        assert!(toggled(&one, "d1").is_empty());
    }

    #[test]
    fn test_customer_name_lookup() {
        let customers: UserListResponse = serde_json::from_str(
            r#"{"users":[{"id":"c1","email":"ada@example.com","name":"Ada","role":"CUSTOMER"}]}"#,
        )
        .unwrap();

        assert_eq!(customer_name(&customers, Some("c1")).as_deref(), Some("Ada"));
        assert_eq!(customer_name(&customers, Some("c9")), None);
        assert_eq!(customer_name(&customers, None), None);
    }
}
