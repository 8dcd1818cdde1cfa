use crate::components::nav_item::NavItem;
use crate::session::use_session;
use i18nrs::yew::use_translation;
use shared::access::{Page, visible_pages};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    #[prop_or_default]
    pub current_page: Option<Page>,
}

/// Navigation menu holding only the pages the current role may open.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let pages = visible_pages(session.role());

    html! {
        <aside class="bg-base-200 min-h-full w-64">
            <div class="p-4 text-xl font-bold">{ i18n.t("app.title") }</div>
            <ul class="menu p-4 gap-1">
                { for pages.into_iter().map(|page| html! {
                    <NavItem {page} current_page={props.current_page} />
                }) }
            </ul>
        </aside>
    }
}
