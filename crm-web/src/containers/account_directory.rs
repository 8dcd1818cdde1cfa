use crate::components::account_form::{AccountDraft, AccountForm};
use crate::components::{Alert, AlertKind, ConfirmDialog, Pager, render_loadable};
use crate::format::date;
use crate::hooks::{use_fetch, use_flash};
use crate::session::use_session_handle;
use i18nrs::yew::use_translation;
use shared::models::{UserListResponse, UserProfile, paginate};
use shared::{ApiError, CrmClient};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const PER_PAGE: usize = 10;

/// Which family of `/users` endpoints a directory manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Customer,
    Admin,
}

impl AccountKind {
    /// Translation key under this directory's namespace.
    pub fn key(self, suffix: &str) -> String {
        let namespace = match self {
            Self::Customer => "customers",
            Self::Admin => "admins",
        };
        format!("{namespace}.{suffix}")
    }

    async fn list(self, client: &CrmClient) -> Result<UserListResponse, ApiError> {
        match self {
            Self::Customer => client.list_customers().await,
            Self::Admin => client.list_admins().await,
        }
    }

    async fn save(
        self,
        client: &CrmClient,
        editing: Option<&UserProfile>,
        draft: &AccountDraft,
    ) -> Result<(), ApiError> {
        match (self, editing) {
            (Self::Customer, None) => client.create_customer(&draft.to_input()).await.map(|_| ()),
            (Self::Admin, None) => client.create_admin(&draft.to_input()).await.map(|_| ()),
            (Self::Customer, Some(user)) => client
                .update_customer(&user.id, &draft.to_update())
                .await
                .map(|_| ()),
            (Self::Admin, Some(user)) => client
                .update_admin(&user.id, &draft.to_update())
                .await
                .map(|_| ()),
        }
    }

    async fn delete(self, client: &CrmClient, id: &str) -> Result<(), ApiError> {
        match self {
            Self::Customer => client.delete_customer(id).await,
            Self::Admin => client.delete_admin(id).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Create,
    Edit(UserProfile),
}

impl Editor {
    fn editing(&self) -> Option<&UserProfile> {
        match self {
            Self::Create => None,
            Self::Edit(user) => Some(user),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountDirectoryProps {
    pub kind: AccountKind,
}

/// Searchable, paged table of accounts with create, edit and delete.
#[function_component(AccountDirectory)]
pub fn account_directory(props: &AccountDirectoryProps) -> Html {
    let (i18n, _) = use_translation();
    let kind = props.kind;
    let client = use_session_handle().store.client().clone();
    let accounts = use_fetch(kind, |client, kind| async move { kind.list(&client).await });
    let flash = use_flash();

    let query = use_state(String::new);
    let page = use_state(|| 1_usize);
    let editor = use_state(|| None::<Editor>);
    let deleting = use_state(|| None::<UserProfile>);
    let busy = use_state(|| false);
    let action_error = use_state(|| None::<String>);

    let on_search = {
        let query = query.clone();
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
            page.set(1);
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };
    let open_create = {
        let editor = editor.clone();
        let action_error = action_error.clone();
        Callback::from(move |_: MouseEvent| {
            action_error.set(None);
            editor.set(Some(Editor::Create));
        })
    };
    let close_editor = {
        let editor = editor.clone();
        Callback::from(move |()| editor.set(None))
    };

    let on_save = {
        let editor = editor.clone();
        let busy = busy.clone();
        let action_error = action_error.clone();
        let reload = accounts.reload.clone();
        let show = flash.show.clone();
        let client = client.clone();
        let i18n = i18n.clone();
        Callback::from(move |draft: AccountDraft| {
            let Some(current) = (*editor).clone() else {
                return;
            };
            busy.set(true);
            action_error.set(None);
            let editor = editor.clone();
            let busy = busy.clone();
            let action_error = action_error.clone();
            let reload = reload.clone();
            let show = show.clone();
            let client = client.clone();
            let done = match current {
                Editor::Create => i18n.t(&kind.key("created")),
                Editor::Edit(_) => i18n.t(&kind.key("updated")),
            };
            spawn_local(async move {
                match kind.save(&client, current.editing(), &draft).await {
                    Ok(()) => {
                        editor.set(None);
                        show.emit(done);
                        reload.emit(());
                    }
                    Err(err) => {
                        log(&format!("Saving account failed: {err}"));
                        action_error.set(Some(err.message().to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_delete = {
        let deleting = deleting.clone();
        let busy = busy.clone();
        let action_error = action_error.clone();
        let reload = accounts.reload.clone();
        let show = flash.show.clone();
        let client = client.clone();
        let done = i18n.t(&kind.key("deleted"));
        Callback::from(move |()| {
            let Some(user) = (*deleting).clone() else {
                return;
            };
            busy.set(true);
            let deleting = deleting.clone();
            let busy = busy.clone();
            let action_error = action_error.clone();
            let reload = reload.clone();
            let show = show.clone();
            let client = client.clone();
            let done = done.clone();
            spawn_local(async move {
                match kind.delete(&client, &user.id).await {
                    Ok(()) => {
                        show.emit(done);
                        reload.emit(());
                    }
                    Err(err) => action_error.set(Some(err.message().to_string())),
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

    let table = |listing: &UserListResponse| {
        let matches = listing.search(&query);
        let slice = paginate(&matches, *page, PER_PAGE);
        if slice.items.is_empty() {
            return html! { <p class="text-base-content/70 py-6">{ i18n.t(&kind.key("empty")) }</p> };
        }

        html! {
            <>
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ i18n.t("auth.fields.name") }</th>
                                <th>{ i18n.t("auth.fields.email") }</th>
                                <th>{ i18n.t("auth.fields.phone") }</th>
                                <th>{ i18n.t("directory.location") }</th>
                                <th>{ i18n.t("directory.joined") }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for slice.items.iter().map(|user| {
                                let on_edit = {
                                    let editor = editor.clone();
                                    let action_error = action_error.clone();
                                    let user = user.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        action_error.set(None);
                                        editor.set(Some(Editor::Edit(user.clone())));
                                    })
                                };
                                let on_remove = {
                                    let deleting = deleting.clone();
                                    let user = user.clone();
                                    Callback::from(move |_: MouseEvent| deleting.set(Some(user.clone())))
                                };
                                let location = [user.city.as_deref(), user.country.as_deref()]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                html! {
                                    <tr key={user.id.clone()}>
                                        <td class="font-medium">{ user.display_name().to_string() }</td>
                                        <td>{ &user.email }</td>
                                        <td>{ user.phone_number.clone().unwrap_or_default() }</td>
                                        <td>{ location }</td>
                                        <td>{ date(user.created_at.as_ref()) }</td>
                                        <td class="text-right whitespace-nowrap">
                                            <button class="btn btn-ghost btn-xs" title={i18n.t("common.edit")} onclick={on_edit}>
                                                <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-4 h-4" />
                                            </button>
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
                <div class="flex justify-between items-center">
                    <span class="text-sm text-base-content/70">
                        { format!("{}-{} / {}", slice.first_index(), slice.last_index(), slice.total_items) }
                    </span>
                    <Pager page={slice.page} total_pages={slice.total_pages} on_change={on_page.clone()} />
                </div>
            </>
        }
    };

    let confirm_message = deleting
        .as_ref()
        .map(|user| format!("{} {}?", i18n.t(&kind.key("confirm_delete")), user.display_name()))
        .unwrap_or_default();

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body space-y-4">
                <div class="flex flex-wrap gap-4 justify-between items-center">
                    <h2 class="card-title">{ i18n.t(&kind.key("title")) }</h2>
                    <div class="flex gap-2">
                        <input
                            class="input input-bordered input-sm"
                            type="search"
                            placeholder={i18n.t(&kind.key("search"))}
                            value={(*query).clone()}
                            oninput={on_search}
                        />
                        <button class="btn btn-primary btn-sm" onclick={open_create}>
                            <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                            { i18n.t(&kind.key("add")) }
                        </button>
                    </div>
                </div>
                if let Some(message) = flash.message.clone() {
                    <Alert {message} kind={AlertKind::Success} on_dismiss={flash.dismiss.clone()} />
                }
                if editor.is_none() {
                    if let Some(message) = (*action_error).clone() {
                        <Alert {message} />
                    }
                }
                { render_loadable(&*accounts.state, &accounts.reload, table) }
            </div>
            if let Some(current) = (*editor).clone() {
                <AccountForm
                    title={i18n.t(&kind.key(if current.editing().is_some() { "edit" } else { "create" }))}
                    editing={current.editing().cloned()}
                    on_submit={on_save}
                    on_cancel={close_editor}
                    busy={*busy}
                    error={(*action_error).clone().map(AttrValue::from)}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced_by_kind() {
        assert_eq!(AccountKind::Customer.key("title"), "customers.title");
        assert_eq!(AccountKind::Admin.key("deleted"), "admins.deleted");
    }

    #[test]
    fn test_editor_exposes_edited_account() {
        assert!(Editor::Create.editing().is_none());
    }
}
