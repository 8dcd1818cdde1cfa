use crate::components::{Pager, render_loadable};
use crate::format::date;
use crate::hooks::use_fetch;
use i18nrs::yew::use_translation;
use shared::models::{Notification, NotificationPage};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const PER_PAGE: u32 = 10;

fn kind_icon(notification: &Notification) -> IconId {
    match notification.kind.as_deref() {
        Some("customer" | "user") => IconId::HeroiconsOutlineUserPlus,
        Some("document" | "upload") => IconId::HeroiconsOutlineDocumentText,
        Some("product") => IconId::HeroiconsOutlineCube,
        Some("sale" | "order") => IconId::HeroiconsOutlineShoppingCart,
        _ => IconId::HeroiconsOutlineBell,
    }
}

#[function_component(NotificationsPage)]
pub fn notifications_page() -> Html {
    let (i18n, _) = use_translation();
    let page = use_state(|| 1_u32);
    let notifications = use_fetch(*page, |client, page| async move {
        client.notifications(page, PER_PAGE).await
    });
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(u32::try_from(next).unwrap_or(1)))
    };

    let render = |listing: &NotificationPage| {
        if listing.notifications.is_empty() {
            return html! { <p class="text-base-content/70 py-6">{ i18n.t("notifications.empty") }</p> };
        }
        let total_pages = listing
            .pagination
            .map_or(1, |pagination| pagination.total_pages.max(1));

        html! {
            <>
                <p class="text-sm text-base-content/70">
                    { format!("{}: {}", i18n.t("notifications.unread"), listing.unread_count()) }
                </p>
                <ul class="divide-y divide-base-300">
                    { for listing.notifications.iter().map(|notification| html! {
                        <li
                            key={notification.id.clone()}
                            class={classes!("py-3", "flex", "gap-4", (!notification.is_read).then_some("font-semibold"))}
                        >
                            <Icon icon_id={kind_icon(notification)} class="w-6 h-6 text-primary shrink-0" />
                            <div class="flex-1">
                                <div class="flex justify-between">
                                    <span>{ &notification.title }</span>
                                    <span class="text-xs text-base-content/70">{ date(notification.created_at.as_ref()) }</span>
                                </div>
                                <p class="text-sm font-normal">{ &notification.message }</p>
                            </div>
                            if !notification.is_read {
                                <span class="badge badge-primary badge-xs mt-2"></span>
                            }
                        </li>
                    }) }
                </ul>
                <Pager page={*page as usize} total_pages={total_pages as usize} on_change={on_page.clone()} />
            </>
        }
    };

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body">
                <h2 class="card-title">{ i18n.t("notifications.title") }</h2>
                { render_loadable(&*notifications.state, &notifications.reload, render) }
            </div>
        </div>
    }
}
