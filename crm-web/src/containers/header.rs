use crate::components::user_dropdown::UserDropdown;
use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub title: Option<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-10">
            <div class="flex items-center gap-2">
                <label for="sidebar-drawer" class="btn btn-ghost btn-square lg:hidden">
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                </label>
                <h1 class="text-lg font-semibold">
                    { props.title.clone().unwrap_or_else(|| i18n.t("app.title")) }
                </h1>
            </div>
            <div class="flex items-center gap-2">
                <Link<Route> to={Route::Notifications} classes="btn btn-ghost btn-circle">
                    <Icon icon_id={IconId::HeroiconsOutlineBell} class="w-6 h-6" />
                </Link<Route>>
                <UserDropdown />
            </div>
        </nav>
    }
}
