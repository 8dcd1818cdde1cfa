use crate::routes::Route;
use crate::session::{use_session, use_session_handle};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let handle = use_session_handle();
    let session = use_session();
    let Some(user) = session.user.clone() else {
        return html! {};
    };

    let settings_button = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Settings);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("pages.settings")}</a></li>
        }
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            handle.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    let avatar = match &user.profile_picture {
        Some(url) => html! { <img src={url.clone()} alt={user.display_name().to_string()} /> },
        None => html! { <span>{ user.initials() }</span> },
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                <div class="bg-neutral text-neutral-content w-10 rounded-full">
                    { avatar }
                </div>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.display_name().to_string() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                    if let Some(role) = user.role {
                        <div class="badge badge-outline badge-sm mt-1">{ role.label() }</div>
                    }
                </li>
                <div class="divider my-0"></div>
                {settings_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
